use crate::foundation::core::Frame;
use crate::foundation::error::UnveilResult;
use crate::foundation::math::value_of_percent;
use crate::raster::grayscale::grayscale;
use crate::strategy::{ExecutionModel, RevealStrategy, Rotation, StepDomain, ensure_prepared};
use kurbo::Vec2;

/// Start of the sweep: 12 o'clock, in the screen-space convention where
/// angle 0 is 3 o'clock and positive angles turn clockwise (y grows down).
const START_ANGLE_DEG: f64 = 270.0;
const FULL_CIRCLE_DEG: u32 = 360;

/// Reveals the source inside an angular sector sweeping around the image
/// center from the top, clockwise or counterclockwise.
#[derive(Debug)]
pub struct RadialWipe {
    rotation: Rotation,
    placeholder: Option<Frame>,
}

impl RadialWipe {
    /// Create the strategy for the given sweep direction.
    pub fn new(rotation: Rotation) -> Self {
        Self {
            rotation,
            placeholder: None,
        }
    }

    fn in_sector(&self, offset: Vec2, sweep_deg: f64) -> bool {
        // atan2 with y-down screen coordinates already measures clockwise.
        let theta = offset.y.atan2(offset.x).to_degrees();
        let from_start = match self.rotation {
            Rotation::Clockwise => (theta - START_ANGLE_DEG).rem_euclid(360.0),
            Rotation::CounterClockwise => (START_ANGLE_DEG - theta).rem_euclid(360.0),
        };
        from_start <= sweep_deg
    }
}

impl RevealStrategy for RadialWipe {
    fn prepare(&mut self, source: &Frame) -> UnveilResult<Frame> {
        let placeholder = grayscale(source);
        self.placeholder = Some(placeholder.clone());
        Ok(placeholder)
    }

    fn compute_frame(
        &mut self,
        source: &Frame,
        _current: &Frame,
        step: u32,
    ) -> UnveilResult<Frame> {
        let placeholder = ensure_prepared(self.placeholder.as_ref())?;
        let sweep = value_of_percent(FULL_CIRCLE_DEG, step.min(100));
        if sweep == 0 {
            return Ok(placeholder.clone());
        }
        if sweep >= FULL_CIRCLE_DEG {
            return Ok(source.clone());
        }

        let center = Vec2::new(
            f64::from(source.width) * 0.5,
            f64::from(source.height) * 0.5,
        );
        let sweep_deg = f64::from(sweep);
        let mut out = placeholder.clone();
        for y in 0..source.height {
            for x in 0..source.width {
                let offset = Vec2::new(f64::from(x) + 0.5, f64::from(y) + 0.5) - center;
                if self.in_sector(offset, sweep_deg) {
                    let i = ((y * source.width + x) * 4) as usize;
                    out.data[i..i + 4].copy_from_slice(&source.data[i..i + 4]);
                }
            }
        }
        Ok(out)
    }

    fn cleanup(&mut self) {
        self.placeholder = None;
    }

    fn step_domain(&self) -> StepDomain {
        StepDomain::Percent
    }

    fn preferred_model(&self) -> ExecutionModel {
        ExecutionModel::Sync
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/radial.rs"]
mod tests;

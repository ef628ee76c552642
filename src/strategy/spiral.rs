use crate::foundation::core::Frame;
use crate::foundation::error::UnveilResult;
use crate::raster::grayscale::grayscale;
use crate::strategy::{ExecutionModel, RevealStrategy, StepDomain, ensure_prepared};
use kurbo::{Point, Vec2};

/// Total sweep at full progress: four turns.
const MAX_SWEEP_RAD: f64 = 1440.0 * std::f64::consts::PI / 180.0;
/// Radial growth per radian, i.e. the spacing between spiral arms.
const ARM_GROWTH: f64 = 30.0;
/// Angular increment of the walk.
const WALK_STEP: f64 = 0.05;
/// Brush radius stamped at each sample; the stroke is two arm-growth units
/// wide so the region reads as a spiral band.
const BRUSH_RADIUS: f64 = ARM_GROWTH;

/// Reveals the source along an Archimedean spiral walked from the image
/// center, sweeping further out as progress grows.
#[derive(Debug, Default)]
pub struct SpiralPath {
    placeholder: Option<Frame>,
}

impl SpiralPath {
    /// Create the strategy. All derived state is built in `prepare`.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Stamp a filled disc of source pixels onto `out`, clipped to bounds.
fn stamp(out: &mut Frame, source: &Frame, at: Point, radius: f64) {
    let x0 = ((at.x - radius).floor().max(0.0)) as u32;
    let y0 = ((at.y - radius).floor().max(0.0)) as u32;
    let x1 = (((at.x + radius).ceil()) as u32).min(out.width);
    let y1 = (((at.y + radius).ceil()) as u32).min(out.height);
    let r2 = radius * radius;
    for y in y0..y1 {
        for x in x0..x1 {
            let d = Vec2::new(f64::from(x) + 0.5 - at.x, f64::from(y) + 0.5 - at.y);
            if d.hypot2() <= r2 {
                let i = ((y * out.width + x) * 4) as usize;
                out.data[i..i + 4].copy_from_slice(&source.data[i..i + 4]);
            }
        }
    }
}

impl RevealStrategy for SpiralPath {
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
        let mut out = placeholder.clone();
        let swept = MAX_SWEEP_RAD * f64::from(step.min(100)) / 100.0;
        if swept <= 0.0 {
            return Ok(out);
        }
        let center = Point::new(
            f64::from(source.width) * 0.5,
            f64::from(source.height) * 0.5,
        );
        let mut theta = 0.0f64;
        while theta <= swept {
            let r = ARM_GROWTH * theta;
            let p = center + Vec2::new(r * theta.cos(), r * theta.sin());
            theta += WALK_STEP;
            // Samples that leave the image entirely are discarded.
            if p.x < -BRUSH_RADIUS
                || p.y < -BRUSH_RADIUS
                || p.x >= f64::from(source.width) + BRUSH_RADIUS
                || p.y >= f64::from(source.height) + BRUSH_RADIUS
            {
                continue;
            }
            stamp(&mut out, source, p, BRUSH_RADIUS);
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
        ExecutionModel::Hybrid
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/spiral.rs"]
mod tests;

use crate::foundation::core::Frame;
use crate::foundation::error::UnveilResult;
use crate::foundation::math::value_of_percent;
use crate::partition::grid::Cell;
use crate::raster::composite::blit_cell;
use crate::raster::grayscale::grayscale;
use crate::strategy::{ExecutionModel, FillDirection, RevealStrategy, StepDomain, ensure_prepared};

/// Reveals the source inside a rectangle growing from a configured edge,
/// leaving the grayscale placeholder outside it.
#[derive(Debug)]
pub struct ColorRegionFill {
    direction: FillDirection,
    placeholder: Option<Frame>,
}

impl ColorRegionFill {
    /// Create the strategy for the given grow direction.
    pub fn new(direction: FillDirection) -> Self {
        Self {
            direction,
            placeholder: None,
        }
    }

    fn revealed_rect(&self, width: u32, height: u32, percent: u32) -> Cell {
        let w = value_of_percent(width, percent);
        let h = value_of_percent(height, percent);
        match self.direction {
            FillDirection::LeftToRight => Cell {
                left: 0,
                top: 0,
                right: w,
                bottom: height,
            },
            FillDirection::RightToLeft => Cell {
                left: width - w,
                top: 0,
                right: width,
                bottom: height,
            },
            FillDirection::TopToBottom => Cell {
                left: 0,
                top: 0,
                right: width,
                bottom: h,
            },
            FillDirection::BottomToTop => Cell {
                left: 0,
                top: height - h,
                right: width,
                bottom: height,
            },
        }
    }
}

impl RevealStrategy for ColorRegionFill {
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
        let percent = step.min(100);
        let mut out = placeholder.clone();
        let rect = self.revealed_rect(source.width, source.height, percent);
        blit_cell(&mut out, source, rect)?;
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
#[path = "../../tests/unit/strategy/fill.rs"]
mod tests;

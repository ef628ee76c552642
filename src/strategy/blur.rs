use crate::foundation::core::Frame;
use crate::foundation::error::{UnveilError, UnveilResult};
use crate::foundation::math::value_of_percent;
use crate::raster::blur::gaussian_blur;
use crate::strategy::{ExecutionModel, RevealStrategy, StepDomain};

const MAX_RADIUS: u32 = 25;

/// Reveals the source by sharpening: a gaussian blur whose radius falls
/// linearly from the maximum at progress zero to nothing at full progress,
/// where the output is the source exactly.
#[derive(Debug, Default)]
pub struct Blur {
    prepared: bool,
}

impl Blur {
    /// Create the strategy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RevealStrategy for Blur {
    fn prepare(&mut self, source: &Frame) -> UnveilResult<Frame> {
        self.prepared = true;
        gaussian_blur(source, MAX_RADIUS)
    }

    fn compute_frame(
        &mut self,
        source: &Frame,
        _current: &Frame,
        step: u32,
    ) -> UnveilResult<Frame> {
        if !self.prepared {
            return Err(UnveilError::contract("compute_frame called before prepare"));
        }
        let radius = MAX_RADIUS - value_of_percent(MAX_RADIUS, step.min(100));
        // radius 0 short-circuits to a byte-exact copy of the source.
        gaussian_blur(source, radius)
    }

    fn cleanup(&mut self) {
        self.prepared = false;
    }

    fn step_domain(&self) -> StepDomain {
        StepDomain::Percent
    }

    fn preferred_model(&self) -> ExecutionModel {
        ExecutionModel::Async
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/blur.rs"]
mod tests;

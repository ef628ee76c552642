use crate::foundation::core::Frame;
use crate::foundation::error::{UnveilError, UnveilResult};
use crate::raster::scale::pixelate;
use crate::strategy::{ExecutionModel, RevealStrategy, StepDomain};
use std::time::Duration;

/// Divisor mapping remaining percent to a pixelation factor.
const PROGRESS_TO_FACTOR: f32 = 3000.0;
/// Minimum interval between recomputations under the async model.
const RECOMPUTE_WINDOW: Duration = Duration::from_millis(400);

/// Reveals the source coarse-to-fine: nearest-neighbor pixelation whose
/// block size shrinks as progress grows, reaching the source at full
/// progress.
#[derive(Debug, Default)]
pub struct Pixelation {
    prepared: bool,
}

impl Pixelation {
    /// Create the strategy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RevealStrategy for Pixelation {
    fn prepare(&mut self, source: &Frame) -> UnveilResult<Frame> {
        self.prepared = true;
        pixelate(source, 100.0 / PROGRESS_TO_FACTOR)
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
        let remaining = 100 - step.min(100);
        pixelate(source, remaining as f32 / PROGRESS_TO_FACTOR)
    }

    fn cleanup(&mut self) {
        self.prepared = false;
    }

    fn step_domain(&self) -> StepDomain {
        StepDomain::Percent
    }

    fn throttle(&self) -> Option<Duration> {
        Some(RECOMPUTE_WINDOW)
    }

    fn preferred_model(&self) -> ExecutionModel {
        ExecutionModel::Async
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/pixelate.rs"]
mod tests;

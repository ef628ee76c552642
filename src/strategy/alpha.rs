use crate::foundation::core::Frame;
use crate::foundation::error::UnveilResult;
use crate::foundation::math::value_of_percent;
use crate::raster::composite::over_scaled_frame;
use crate::raster::grayscale::grayscale;
use crate::strategy::{ExecutionModel, RevealStrategy, StepDomain, ensure_prepared};

/// Cross-fades the source image over a grayscale placeholder: the source is
/// drawn with its alpha scaled by the progress percent.
#[derive(Debug, Default)]
pub struct AlphaBlend {
    placeholder: Option<Frame>,
}

impl AlphaBlend {
    /// Create the strategy. All derived state is built in `prepare`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RevealStrategy for AlphaBlend {
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
        // Exact endpoints: percent 0 is the placeholder, percent 100 the
        // source, byte for byte.
        if step == 0 {
            return Ok(placeholder.clone());
        }
        if step >= 100 {
            return Ok(source.clone());
        }
        let alpha = value_of_percent(255, step) as u8;
        over_scaled_frame(placeholder, source, alpha)
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
#[path = "../../tests/unit/strategy/alpha.rs"]
mod tests;

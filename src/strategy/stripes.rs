use crate::foundation::core::Frame;
use crate::foundation::error::{UnveilError, UnveilResult};
use crate::partition::grid::{Cell, FlaggedCell};
use crate::raster::composite::blit_cell;
use crate::raster::grayscale::grayscale;
use crate::strategy::{ExecutionModel, RevealStrategy, StepDomain, StripeThickness};
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

/// Reveals the source in full-height column stripes of a configured
/// thickness, in shuffled order. Each stripe carries a revealed flag so an
/// already-opaque stripe is never composited twice.
#[derive(Debug)]
pub struct StripeMosaic {
    thickness: u32,
    seed: Option<u64>,
    stripes: Vec<FlaggedCell>,
    prepared: bool,
}

impl StripeMosaic {
    /// Create the strategy with a raw stripe thickness in pixels.
    pub fn new(thickness: u32) -> UnveilResult<Self> {
        if thickness == 0 {
            return Err(UnveilError::config("stripe thickness must be > 0"));
        }
        Ok(Self {
            thickness,
            seed: None,
            stripes: Vec::new(),
            prepared: false,
        })
    }

    /// Create the strategy with a named thickness class.
    pub fn with_thickness(thickness: StripeThickness) -> Self {
        Self {
            thickness: thickness.pixels(),
            seed: None,
            stripes: Vec::new(),
            prepared: false,
        }
    }

    /// Fix the random source used to shuffle the stripes, for reproducible
    /// orders.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl RevealStrategy for StripeMosaic {
    fn prepare(&mut self, source: &Frame) -> UnveilResult<Frame> {
        let mut stripes = Vec::with_capacity(source.width.div_ceil(self.thickness) as usize);
        let mut left = 0;
        while left < source.width {
            stripes.push(FlaggedCell::new(Cell {
                left,
                top: 0,
                right: (left + self.thickness).min(source.width),
                bottom: source.height,
            }));
            left += self.thickness;
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        stripes.shuffle(&mut rng);
        self.stripes = stripes;
        self.prepared = true;
        Ok(grayscale(source))
    }

    fn compute_frame(
        &mut self,
        source: &Frame,
        current: &Frame,
        step: u32,
    ) -> UnveilResult<Frame> {
        if !self.prepared {
            return Err(UnveilError::contract("compute_frame called before prepare"));
        }
        let mut out = current.clone();
        // Past-the-end steps and already-revealed stripes are no-ops.
        if let Some(stripe) = self.stripes.get_mut(step as usize)
            && !stripe.revealed
        {
            blit_cell(&mut out, source, stripe.cell)?;
            stripe.revealed = true;
        }
        Ok(out)
    }

    fn cleanup(&mut self) {
        self.stripes = Vec::new();
        self.prepared = false;
    }

    fn step_domain(&self) -> StepDomain {
        StepDomain::Cell
    }

    fn cell_count(&self) -> Option<u32> {
        self.prepared.then_some(self.stripes.len() as u32)
    }

    fn preferred_model(&self) -> ExecutionModel {
        ExecutionModel::Hybrid
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/stripes.rs"]
mod tests;

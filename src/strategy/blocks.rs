use crate::foundation::core::Frame;
use crate::foundation::error::{UnveilError, UnveilResult};
use crate::partition::grid::Partition;
use crate::partition::order::{ReorderPolicy, apply_order};
use crate::raster::composite::blit_cell;
use crate::raster::grayscale::grayscale;
use crate::strategy::{CellSize, ExecutionModel, RevealStrategy, StepDomain, ensure_prepared};
use rand::{SeedableRng, rngs::StdRng};

/// Reveals the source one partition cell at a time over a grayscale
/// placeholder. The playback order is set by the reorder policy: identity
/// and serpentine sweeps, or a shuffled order for the random-block effect.
#[derive(Debug)]
pub struct BlockMosaic {
    extent: u32,
    policy: ReorderPolicy,
    seed: Option<u64>,
    partition: Option<Partition>,
}

impl BlockMosaic {
    /// Create the strategy with a raw cell extent in pixels.
    pub fn new(extent: u32, policy: ReorderPolicy) -> UnveilResult<Self> {
        if extent == 0 {
            return Err(UnveilError::config("block extent must be > 0"));
        }
        Ok(Self {
            extent,
            policy,
            seed: None,
            partition: None,
        })
    }

    /// Create the strategy with a named size class.
    pub fn with_size(size: CellSize, policy: ReorderPolicy) -> Self {
        Self {
            extent: size.pixels(),
            policy,
            seed: None,
            partition: None,
        }
    }

    /// Fix the random source used by [`ReorderPolicy::Shuffled`], for
    /// reproducible orders.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => rand::make_rng(),
        }
    }
}

impl RevealStrategy for BlockMosaic {
    fn prepare(&mut self, source: &Frame) -> UnveilResult<Frame> {
        let mut partition = Partition::new(source.width, source.height, self.extent)?;
        apply_order(&mut partition, self.policy, &mut self.rng());
        self.partition = Some(partition);
        Ok(grayscale(source))
    }

    fn compute_frame(
        &mut self,
        source: &Frame,
        current: &Frame,
        step: u32,
    ) -> UnveilResult<Frame> {
        let partition = ensure_prepared(self.partition.as_ref())?;
        let mut out = current.clone();
        // Steps past the last cell clamp to a no-op.
        if let Some(cell) = partition.cell(step) {
            blit_cell(&mut out, source, cell)?;
        }
        Ok(out)
    }

    fn cleanup(&mut self) {
        self.partition = None;
    }

    fn step_domain(&self) -> StepDomain {
        StepDomain::Cell
    }

    fn cell_count(&self) -> Option<u32> {
        self.partition.as_ref().map(Partition::cell_count)
    }

    fn preferred_model(&self) -> ExecutionModel {
        ExecutionModel::Hybrid
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/blocks.rs"]
mod tests;

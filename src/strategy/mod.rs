//! Reveal strategies: pluggable units that composite the next frame from the
//! source image, the running frame and a step value.

pub(crate) mod alpha;
pub(crate) mod blocks;
pub(crate) mod blur;
pub(crate) mod fill;
pub(crate) mod pixelate;
pub(crate) mod radial;
pub(crate) mod spiral;
pub(crate) mod stripes;

pub use alpha::AlphaBlend;
pub use blocks::BlockMosaic;
pub use blur::Blur;
pub use fill::ColorRegionFill;
pub use pixelate::Pixelation;
pub use radial::RadialWipe;
pub use spiral::SpiralPath;
pub use stripes::StripeMosaic;

use crate::foundation::core::Frame;
use crate::foundation::error::{UnveilError, UnveilResult};
use std::time::Duration;

/// The unit a strategy's `step` argument is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDomain {
    /// `step` is an integer percent in `0..=100`.
    Percent,
    /// `step` is a cell index into the strategy's partition.
    Cell,
}

/// How composite work is scheduled for an attached strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionModel {
    /// Composite on the caller's thread; the frame is delivered before
    /// `set_progress` returns.
    Sync,
    /// Each `set_progress` call enqueues exactly one single-shot composite on
    /// the session worker. No cancellation: overlapping calls all complete
    /// and deliver.
    Async,
    /// Background composite with incremental, gap-filling delivery (the
    /// catch-up scheduler).
    Hybrid,
}

/// Common contract implemented by every reveal strategy.
///
/// Lifecycle: [`prepare`](RevealStrategy::prepare) exactly once per session,
/// then any number of [`compute_frame`](RevealStrategy::compute_frame) calls,
/// then [`cleanup`](RevealStrategy::cleanup) (idempotent). Compositing before
/// `prepare` is a contract error.
pub trait RevealStrategy: Send {
    /// One-time precomputation. Returns the placeholder frame shown at
    /// progress zero and builds any derived artifacts (partition, shuffled
    /// order, blurred copy).
    fn prepare(&mut self, source: &Frame) -> UnveilResult<Frame>;

    /// Composite the frame for `step`, reading `current` (the engine's
    /// current frame) but never retaining a reference to it. Pure in its
    /// inputs modulo artifacts fixed at `prepare`. Steps beyond the
    /// strategy's domain clamp to a no-op.
    fn compute_frame(
        &mut self,
        source: &Frame,
        current: &Frame,
        step: u32,
    ) -> UnveilResult<Frame>;

    /// Release derived artifacts. Safe to call more than once.
    fn cleanup(&mut self);

    /// The unit `compute_frame` interprets `step` in.
    fn step_domain(&self) -> StepDomain;

    /// Number of cells for [`StepDomain::Cell`] strategies, `None` otherwise.
    fn cell_count(&self) -> Option<u32> {
        None
    }

    /// Minimum interval between recomputations, for strategies that
    /// self-throttle under the async model. The engine re-delivers the
    /// previous frame unchanged inside the window.
    fn throttle(&self) -> Option<Duration> {
        None
    }

    /// The execution model this strategy is designed for. `attach` callers
    /// may override it.
    fn preferred_model(&self) -> ExecutionModel;
}

pub(crate) fn ensure_prepared<'a, T>(artifact: Option<&'a T>) -> UnveilResult<&'a T> {
    artifact.ok_or_else(|| UnveilError::contract("compute_frame called before prepare"))
}

/// Named cell-extent classes for the block mosaic, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellSize {
    /// 75 px cells.
    Big,
    /// 50 px cells.
    Medium,
    /// 30 px cells.
    Small,
    /// 15 px cells.
    ExtraSmall,
}

impl CellSize {
    /// The extent in pixels this class stands for.
    pub fn pixels(self) -> u32 {
        match self {
            CellSize::Big => 75,
            CellSize::Medium => 50,
            CellSize::Small => 30,
            CellSize::ExtraSmall => 15,
        }
    }
}

/// Named stripe-thickness classes for the stripe mosaic, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripeThickness {
    /// 4 px stripes.
    Thin,
    /// 8 px stripes.
    Medium,
    /// 16 px stripes.
    Thick,
}

impl StripeThickness {
    /// The thickness in pixels this class stands for.
    pub fn pixels(self) -> u32 {
        match self {
            StripeThickness::Thin => 4,
            StripeThickness::Medium => 8,
            StripeThickness::Thick => 16,
        }
    }
}

/// Edge the directional region fill grows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillDirection {
    /// Reveal grows from the left edge.
    LeftToRight,
    /// Reveal grows from the right edge.
    RightToLeft,
    /// Reveal grows from the top edge.
    TopToBottom,
    /// Reveal grows from the bottom edge.
    BottomToTop,
}

impl FillDirection {
    /// Parse a direction name, accepting the usual short aliases.
    pub fn parse(name: &str) -> UnveilResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left_to_right" | "lefttoright" | "ltr" => Ok(FillDirection::LeftToRight),
            "right_to_left" | "righttoleft" | "rtl" => Ok(FillDirection::RightToLeft),
            "top_to_bottom" | "toptobottom" | "ttb" => Ok(FillDirection::TopToBottom),
            "bottom_to_top" | "bottomtotop" | "btt" => Ok(FillDirection::BottomToTop),
            other => Err(UnveilError::config(format!(
                "unknown fill direction '{other}'"
            ))),
        }
    }
}

/// Sweep direction of the radial wipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// Positive sweep, 12 o'clock toward 3 o'clock.
    #[default]
    Clockwise,
    /// Negative sweep, 12 o'clock toward 9 o'clock.
    CounterClockwise,
}

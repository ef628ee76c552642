//! Unveil progressively reveals a raster image out of a placeholder
//! rendering as an externally-driven progress value advances.
//!
//! The public API is session-oriented:
//!
//! - Build a [`RevealEngine`] over a source [`Frame`] and a [`FrameSink`]
//! - [`attach`](RevealEngine::attach) a [`RevealStrategy`] under an
//!   [`ExecutionModel`]
//! - Drive it with [`set_progress`](RevealEngine::set_progress); every
//!   produced frame reaches the sink, including the intermediate frames a
//!   hybrid session synthesizes when progress jumps
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod raster;

/// Image-rectangle partitioning and playback-order policies.
pub mod partition;
/// The progress driver: sessions, execution models, catch-up delivery.
pub mod engine;
/// Reveal strategies and their configuration surface.
pub mod strategy;

pub use crate::foundation::core::{Frame, Progress};
pub use crate::foundation::error::{UnveilError, UnveilResult};

pub use crate::engine::session::RevealEngine;
pub use crate::engine::sink::{FrameSink, InMemorySink};
pub use crate::engine::snapshot::Snapshot;
pub use crate::partition::grid::{Cell, FlaggedCell, Partition};
pub use crate::partition::order::ReorderPolicy;
pub use crate::strategy::{
    AlphaBlend, BlockMosaic, Blur, CellSize, ColorRegionFill, ExecutionModel, FillDirection,
    Pixelation, RadialWipe, RevealStrategy, Rotation, SpiralPath, StepDomain, StripeMosaic,
    StripeThickness,
};

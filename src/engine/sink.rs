use crate::foundation::core::Frame;
use crate::foundation::error::UnveilResult;
use std::sync::{Arc, Mutex};

/// Sink contract for consuming produced frames.
///
/// Ordering contract: within one session, `on_frame` is called once per
/// produced frame, in the order the engine produced them — possibly several
/// times per `set_progress` call under catch-up. Delivery happens on the
/// caller's thread for the synchronous model and on the session worker
/// otherwise.
pub trait FrameSink: Send {
    /// Consume one produced frame. An error marks the session failed.
    fn on_frame(&mut self, frame: &Frame) -> UnveilResult<()>;
}

pub(crate) type SharedSink = Arc<Mutex<Box<dyn FrameSink>>>;

/// In-memory sink for tests and debugging.
///
/// Clones share the same storage, so a caller can keep a handle while the
/// engine owns the sink.
#[derive(Clone, Default)]
pub struct InMemorySink {
    frames: Arc<Mutex<Vec<Frame>>>,
}

impl InMemorySink {
    /// Create a new, empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the frames delivered so far.
    pub fn frames(&self) -> Vec<Frame> {
        crate::engine::lock(&self.frames).clone()
    }

    /// Number of frames delivered so far.
    pub fn len(&self) -> usize {
        crate::engine::lock(&self.frames).len()
    }

    /// Return `true` when nothing has been delivered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The most recently delivered frame, if any.
    pub fn last(&self) -> Option<Frame> {
        crate::engine::lock(&self.frames).last().cloned()
    }
}

impl FrameSink for InMemorySink {
    fn on_frame(&mut self, frame: &Frame) -> UnveilResult<()> {
        crate::engine::lock(&self.frames).push(frame.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/sink.rs"]
mod tests;

use crate::foundation::core::{Frame, Progress};
use crate::foundation::error::UnveilResult;

/// A host-side persistence snapshot: the current frame's pixels plus the
/// progress it stands for.
///
/// The engine hands this out and takes it back as a plain value; how it is
/// stored across lifecycle events is the host's business.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes of the current frame.
    pub data: Vec<u8>,
    /// Normalized progress of the current frame.
    pub progress: f32,
}

impl Snapshot {
    /// Capture a frame and its progress.
    pub fn capture(frame: &Frame, progress: Progress) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            data: frame.data.clone(),
            progress: progress.ratio(),
        }
    }

    /// Rebuild the frame, validating the buffer length.
    pub fn frame(&self) -> UnveilResult<Frame> {
        Frame::new(self.width, self.height, self.data.clone())
    }

    /// Rebuild the progress value, validating the ratio.
    pub fn progress(&self) -> UnveilResult<Progress> {
        Progress::from_ratio(self.progress)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/snapshot.rs"]
mod tests;

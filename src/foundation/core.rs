use crate::foundation::error::{UnveilError, UnveilResult};

/// A raster frame as straight-alpha RGBA8 pixels.
///
/// Frames are immutable by convention: every composite step produces a new
/// `Frame` rather than mutating its inputs in place. The engine replaces its
/// current-frame reference wholesale after each delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl Frame {
    /// Create a frame from raw RGBA8 bytes, validating the buffer length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> UnveilResult<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(UnveilError::config(format!(
                "frame data length {} does not match {}x{}x4",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a frame filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> UnveilResult<Self> {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Read the pixel at `(x, y)`. Out-of-bounds coordinates return `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Borrow the pixel at `(x, y)` mutably. Callers stay in bounds.
    pub(crate) fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let i = ((y * self.width + x) * 4) as usize;
        &mut self.data[i..i + 4]
    }

    /// Convert from a decoded [`image::RgbaImage`].
    pub fn from_image(img: &image::RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            data: img.as_raw().clone(),
        }
    }

    /// Convert into an [`image::RgbaImage`] for encoding or display.
    pub fn into_image(self) -> UnveilResult<image::RgbaImage> {
        let (width, height) = (self.width, self.height);
        image::RgbaImage::from_raw(width, height, self.data).ok_or_else(|| {
            UnveilError::compute(format!("frame buffer does not fit {width}x{height}"))
        })
    }
}

pub(crate) fn byte_len(width: u32, height: u32) -> UnveilResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| UnveilError::config("frame dimensions overflow"))
}

/// Scalar reveal progress in the normalized unit interval `[0.0, 1.0]`.
///
/// Callers may move progress backward or jump it arbitrarily; the engine
/// never assumes monotonic non-decrease.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Progress(f32);

impl Progress {
    /// Progress zero: only the placeholder frame is shown.
    pub const ZERO: Progress = Progress(0.0);
    /// Full progress: the source image is fully revealed.
    pub const FULL: Progress = Progress(1.0);

    /// Create from a normalized ratio. Non-finite values are rejected; finite
    /// values are clamped into `[0.0, 1.0]`.
    pub fn from_ratio(ratio: f32) -> UnveilResult<Self> {
        if !ratio.is_finite() {
            return Err(UnveilError::config("progress ratio must be finite"));
        }
        Ok(Self(ratio.clamp(0.0, 1.0)))
    }

    /// Create from an integer percent, clamped to `[0, 100]`.
    pub fn from_percent(percent: u32) -> Self {
        Self(percent.min(100) as f32 / 100.0)
    }

    /// The normalized ratio.
    pub fn ratio(self) -> f32 {
        self.0
    }

    /// Round to the nearest integer percent in `[0, 100]`.
    pub fn as_percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

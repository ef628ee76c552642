use crate::foundation::core::Frame;
use crate::foundation::error::{UnveilError, UnveilResult};
use image::imageops::{self, FilterType};

/// Coarsen a frame by downscaling and upscaling back with nearest-neighbor
/// sampling.
///
/// `factor` controls the block size: each axis is divided by
/// `max(1, factor * axis_len)` before resampling, so `factor == 0.0` is the
/// identity and larger factors produce coarser mosaics. The divisor clamp
/// keeps degenerate factors from collapsing an axis to zero.
pub(crate) fn pixelate(src: &Frame, factor: f32) -> UnveilResult<Frame> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(UnveilError::config("pixelation factor must be >= 0"));
    }
    let div_w = ((factor * src.width as f32) as u32).max(1);
    let div_h = ((factor * src.height as f32) as u32).max(1);
    if div_w == 1 && div_h == 1 {
        return Ok(src.clone());
    }
    let down_w = (src.width / div_w).max(1);
    let down_h = (src.height / div_h).max(1);

    let img = src.clone().into_image()?;
    let down = imageops::resize(&img, down_w, down_h, FilterType::Nearest);
    let up = imageops::resize(&down, src.width, src.height, FilterType::Nearest);
    Ok(Frame::from_image(&up))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/scale.rs"]
mod tests;

use crate::foundation::core::Frame;
use crate::foundation::error::{UnveilError, UnveilResult};

/// Separable gaussian blur over straight-alpha RGBA8.
///
/// `radius == 0` returns the source unchanged, byte for byte. The kernel is
/// Q16 fixed point and normalized to exactly 1.0, so constant regions come
/// out bit-identical.
pub(crate) fn gaussian_blur(src: &Frame, radius: u32) -> UnveilResult<Frame> {
    if radius == 0 {
        return Ok(src.clone());
    }
    let kernel = kernel_q16(radius, sigma_for(radius))?;
    let mut tmp = src.clone();
    // Horizontal pass walks along rows, vertical along columns.
    convolve_axis(&src.data, &mut tmp.data, src.width, src.height, &kernel, Axis::X);
    let mut out = src.clone();
    convolve_axis(&tmp.data, &mut out.data, src.width, src.height, &kernel, Axis::Y);
    Ok(out)
}

fn sigma_for(radius: u32) -> f64 {
    (radius as f64 / 2.0).max(0.5)
}

enum Axis {
    X,
    Y,
}

fn convolve_axis(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32], axis: Axis) {
    let radius = (k.len() / 2) as i64;
    let (w, h) = (i64::from(width), i64::from(height));
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let off = ki as i64 - radius;
                let (sx, sy) = match axis {
                    Axis::X => ((x + off).clamp(0, w - 1), y),
                    Axis::Y => (x, (y + off).clamp(0, h - 1)),
                };
                let idx = ((sy * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_round(acc[c]);
            }
        }
    }
}

fn kernel_q16(radius: u32, sigma: f64) -> UnveilResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(UnveilError::config("blur sigma must be > 0"));
    }
    let r = radius as i64;
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r).map(|i| (-((i * i) as f64) / denom).exp()).collect();
    let sum: f64 = weights_f.iter().sum();

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|&w| (((w / sum) * 65536.0).round() as i64).clamp(0, 65536) as u32)
        .collect();
    // Fold the fixed-point rounding residue into the center tap so the
    // kernel sums to exactly 1.0 in Q16.
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let mid = weights.len() / 2;
    weights[mid] = (i64::from(weights[mid]) + (65536 - acc)).clamp(0, 65536) as u32;
    Ok(weights)
}

fn q16_round(acc: u64) -> u8 {
    (((acc + 32768) >> 16).min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;

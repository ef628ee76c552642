use crate::foundation::core::Frame;

// Rec.709 luma weights scaled so they sum to exactly 255, matching a
// saturation-zero color matrix. Alpha is preserved.
const W_R: u32 = 54;
const W_G: u32 = 183;
const W_B: u32 = 18;

/// Desaturate a frame into grayscale, the stock placeholder rendering.
pub(crate) fn grayscale(src: &Frame) -> Frame {
    let mut data = Vec::with_capacity(src.data.len());
    for px in src.data.chunks_exact(4) {
        let y = ((W_R * u32::from(px[0]) + W_G * u32::from(px[1]) + W_B * u32::from(px[2]) + 127)
            / 255) as u8;
        data.extend_from_slice(&[y, y, y, px[3]]);
    }
    Frame {
        width: src.width,
        height: src.height,
        data,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/grayscale.rs"]
mod tests;

use crate::foundation::core::Frame;
use crate::foundation::error::{UnveilError, UnveilResult};
use crate::foundation::math::mul_div255_u8;
use crate::partition::grid::Cell;

pub(crate) fn check_same_dims(a: &Frame, b: &Frame, what: &str) -> UnveilResult<()> {
    if a.width != b.width || a.height != b.height {
        return Err(UnveilError::compute(format!(
            "{what} expects frames of equal dimensions ({}x{} vs {}x{})",
            a.width, a.height, b.width, b.height
        )));
    }
    Ok(())
}

/// Copy the pixels inside `cell` from `src` into `dst`.
///
/// The cell is clamped against the frame bounds; an empty cell is a no-op.
pub(crate) fn blit_cell(dst: &mut Frame, src: &Frame, cell: Cell) -> UnveilResult<()> {
    check_same_dims(dst, src, "blit_cell")?;
    let right = cell.right.min(dst.width);
    let bottom = cell.bottom.min(dst.height);
    if cell.left >= right || cell.top >= bottom {
        return Ok(());
    }
    let row_bytes = ((right - cell.left) * 4) as usize;
    for y in cell.top..bottom {
        let start = ((y * dst.width + cell.left) * 4) as usize;
        dst.data[start..start + row_bytes].copy_from_slice(&src.data[start..start + row_bytes]);
    }
    Ok(())
}

/// Straight-alpha "source over destination" for a single pixel, with the
/// source alpha additionally scaled by `alpha_scale` (0..=255).
///
/// `alpha_scale == 255` with an opaque source reproduces the source exactly;
/// `alpha_scale == 0` leaves the destination untouched.
pub(crate) fn over_scaled(dst: [u8; 4], src: [u8; 4], alpha_scale: u8) -> [u8; 4] {
    let sa = mul_div255_u8(u16::from(src[3]), u16::from(alpha_scale));
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for c in 0..3 {
        out[c] = mul_div255_u8(u16::from(src[c]), u16::from(sa))
            .saturating_add(mul_div255_u8(u16::from(dst[c]), inv));
    }
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    out
}

/// Composite `src` over `dst` across the whole frame with a scaled source
/// alpha, producing a new frame.
pub(crate) fn over_scaled_frame(dst: &Frame, src: &Frame, alpha_scale: u8) -> UnveilResult<Frame> {
    check_same_dims(dst, src, "over_scaled_frame")?;
    let mut out = dst.clone();
    for (d, s) in out.data.chunks_exact_mut(4).zip(src.data.chunks_exact(4)) {
        let px = over_scaled([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], alpha_scale);
        d.copy_from_slice(&px);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;

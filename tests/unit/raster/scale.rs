use super::*;

fn gradient(width: u32, height: u32) -> Frame {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x * 7 % 256) as u8, (y * 13 % 256) as u8, 0, 255]);
        }
    }
    Frame::new(width, height, data).unwrap()
}

#[test]
fn factor_zero_is_identity() {
    let src = gradient(8, 6);
    let out = pixelate(&src, 0.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn negative_or_non_finite_factor_is_rejected() {
    let src = gradient(4, 4);
    assert!(pixelate(&src, -0.1).is_err());
    assert!(pixelate(&src, f32::NAN).is_err());
}

#[test]
fn coarse_factor_produces_constant_blocks() {
    let src = gradient(8, 8);
    // divisor = 0.5 * 8 = 4 on both axes, so the result has 2x2 distinct
    // source samples blown up to 4x4 blocks.
    let out = pixelate(&src, 0.5).unwrap();
    let first = out.pixel(0, 0);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(out.pixel(x, y), first, "at {x},{y}");
        }
    }
    assert_ne!(out.pixel(4, 0), first);
}

#[test]
fn extreme_factor_collapses_to_one_sample() {
    let src = gradient(4, 4);
    let out = pixelate(&src, 10.0).unwrap();
    let first = out.pixel(0, 0);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(out.pixel(x, y), first);
        }
    }
}

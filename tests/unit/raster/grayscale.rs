use super::*;

#[test]
fn gray_channels_are_equal_and_alpha_survives() {
    let src = Frame::filled(2, 2, [200, 50, 10, 77]).unwrap();
    let out = grayscale(&src);
    for px in out.data.chunks_exact(4) {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 77);
    }
}

#[test]
fn neutral_gray_is_a_fixed_point() {
    let src = Frame::filled(1, 1, [128, 128, 128, 255]).unwrap();
    let out = grayscale(&src);
    assert_eq!(out.pixel(0, 0), Some([128, 128, 128, 255]));
}

#[test]
fn white_and_black_map_to_themselves() {
    let src = Frame::new(
        2,
        1,
        vec![255, 255, 255, 255, 0, 0, 0, 255],
    )
    .unwrap();
    let out = grayscale(&src);
    assert_eq!(out.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(out.pixel(1, 0), Some([0, 0, 0, 255]));
}

#[test]
fn green_dominates_the_luma() {
    let red = grayscale(&Frame::filled(1, 1, [255, 0, 0, 255]).unwrap());
    let green = grayscale(&Frame::filled(1, 1, [0, 255, 0, 255]).unwrap());
    let blue = grayscale(&Frame::filled(1, 1, [0, 0, 255, 255]).unwrap());
    assert!(green.data[0] > red.data[0]);
    assert!(red.data[0] > blue.data[0]);
}

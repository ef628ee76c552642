use super::*;

fn gradient(width: u32, height: u32) -> Frame {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x * 31 % 256) as u8, (y * 17 % 256) as u8, 128, 255]);
        }
    }
    Frame::new(width, height, data).unwrap()
}

fn mse(a: &Frame, b: &Frame) -> f64 {
    a.data
        .iter()
        .zip(&b.data)
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum::<f64>()
        / a.data.len() as f64
}

#[test]
fn compute_before_prepare_is_a_contract_error() {
    let src = gradient(4, 4);
    let mut s = Blur::new();
    assert!(s.compute_frame(&src, &src, 50).is_err());
}

#[test]
fn full_progress_is_the_source_exactly() {
    let src = gradient(16, 12);
    let mut s = Blur::new();
    let placeholder = s.prepare(&src).unwrap();
    assert_eq!(s.compute_frame(&src, &placeholder, 100).unwrap(), src);
}

#[test]
fn zero_progress_matches_the_placeholder() {
    let src = gradient(16, 12);
    let mut s = Blur::new();
    let placeholder = s.prepare(&src).unwrap();
    assert_eq!(s.compute_frame(&src, &placeholder, 0).unwrap(), placeholder);
}

#[test]
fn the_image_sharpens_as_progress_grows() {
    let src = gradient(24, 24);
    let mut s = Blur::new();
    let placeholder = s.prepare(&src).unwrap();
    let coarse = s.compute_frame(&src, &placeholder, 10).unwrap();
    let fine = s.compute_frame(&src, &placeholder, 90).unwrap();
    assert!(mse(&fine, &src) < mse(&coarse, &src));
}

#[test]
fn declared_contract() {
    let s = Blur::new();
    assert_eq!(s.step_domain(), StepDomain::Percent);
    assert_eq!(s.preferred_model(), ExecutionModel::Async);
}

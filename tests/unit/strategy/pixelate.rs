use super::*;

fn ramp(width: u32, height: u32) -> Frame {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 0, 255]);
        }
    }
    Frame::new(width, height, data).unwrap()
}

#[test]
fn compute_before_prepare_is_a_contract_error() {
    let src = ramp(4, 4);
    let mut s = Pixelation::new();
    assert!(s.compute_frame(&src, &src, 50).is_err());
}

#[test]
fn full_progress_is_the_source_exactly() {
    let src = ramp(300, 4);
    let mut s = Pixelation::new();
    let placeholder = s.prepare(&src).unwrap();
    assert_eq!(s.compute_frame(&src, &placeholder, 100).unwrap(), src);
}

#[test]
fn zero_progress_matches_the_placeholder() {
    let src = ramp(300, 4);
    let mut s = Pixelation::new();
    let placeholder = s.prepare(&src).unwrap();
    assert_eq!(s.compute_frame(&src, &placeholder, 0).unwrap(), placeholder);
}

#[test]
fn low_progress_produces_constant_blocks() {
    let src = ramp(300, 4);
    let mut s = Pixelation::new();
    let placeholder = s.prepare(&src).unwrap();
    // factor = 100/3000, divisor = 10, so columns come in runs of 10.
    let out = s.compute_frame(&src, &placeholder, 0).unwrap();
    let first = out.pixel(0, 0);
    for x in 0..10 {
        assert_eq!(out.pixel(x, 0), first, "column {x}");
    }
    assert_ne!(out.pixel(20, 0), first);
}

#[test]
fn declared_contract() {
    let s = Pixelation::new();
    assert_eq!(s.step_domain(), StepDomain::Percent);
    assert_eq!(s.preferred_model(), ExecutionModel::Async);
    assert_eq!(s.throttle(), Some(std::time::Duration::from_millis(400)));
}

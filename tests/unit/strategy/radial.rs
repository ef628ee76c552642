use super::*;

fn solid_source() -> Frame {
    Frame::filled(4, 4, [200, 40, 60, 255]).unwrap()
}

#[test]
fn compute_before_prepare_is_a_contract_error() {
    let src = solid_source();
    let mut s = RadialWipe::new(Rotation::Clockwise);
    assert!(s.compute_frame(&src, &src, 50).is_err());
}

#[test]
fn endpoints_are_pixel_exact() {
    for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
        let src = solid_source();
        let mut s = RadialWipe::new(rotation);
        let placeholder = s.prepare(&src).unwrap();
        assert_eq!(s.compute_frame(&src, &placeholder, 0).unwrap(), placeholder);
        assert_eq!(s.compute_frame(&src, &placeholder, 100).unwrap(), src);
    }
}

#[test]
fn clockwise_quarter_reveals_the_top_right_quadrant() {
    let src = solid_source();
    let mut s = RadialWipe::new(Rotation::Clockwise);
    let placeholder = s.prepare(&src).unwrap();
    // Sweep 90 degrees from 12 o'clock toward 3 o'clock.
    let out = s.compute_frame(&src, &placeholder, 25).unwrap();
    assert_eq!(out.pixel(3, 0), src.pixel(3, 0));
    assert_eq!(out.pixel(2, 1), src.pixel(2, 1));
    assert_eq!(out.pixel(0, 0), placeholder.pixel(0, 0));
    assert_eq!(out.pixel(0, 3), placeholder.pixel(0, 3));
    assert_eq!(out.pixel(3, 3), placeholder.pixel(3, 3));
}

#[test]
fn counterclockwise_quarter_mirrors_the_sweep() {
    let src = solid_source();
    let mut s = RadialWipe::new(Rotation::CounterClockwise);
    let placeholder = s.prepare(&src).unwrap();
    let out = s.compute_frame(&src, &placeholder, 25).unwrap();
    assert_eq!(out.pixel(0, 0), src.pixel(0, 0));
    assert_eq!(out.pixel(1, 1), src.pixel(1, 1));
    assert_eq!(out.pixel(3, 0), placeholder.pixel(3, 0));
    assert_eq!(out.pixel(0, 3), placeholder.pixel(0, 3));
}

#[test]
fn the_sector_grows_with_progress() {
    let src = solid_source();
    let mut s = RadialWipe::new(Rotation::Clockwise);
    let placeholder = s.prepare(&src).unwrap();
    let count = |pct: u32| {
        let out = s.compute_frame(&src, &placeholder, pct).unwrap();
        out.data
            .chunks_exact(4)
            .zip(src.data.chunks_exact(4))
            .filter(|(a, b)| a == b)
            .count()
    };
    assert!(count(25) < count(50));
    assert!(count(50) < count(75));
    assert_eq!(count(100), 16);
}

#[test]
fn declared_contract() {
    let s = RadialWipe::new(Rotation::Clockwise);
    assert_eq!(s.step_domain(), StepDomain::Percent);
    assert_eq!(s.preferred_model(), ExecutionModel::Sync);
}

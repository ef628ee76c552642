use super::*;
use crate::engine::sink::InMemorySink;
use crate::partition::order::ReorderPolicy;
use crate::strategy::{AlphaBlend, BlockMosaic, ColorRegionFill, FillDirection};

fn solid_source() -> Frame {
    Frame::filled(6, 4, [200, 40, 60, 255]).unwrap()
}

#[test]
fn attach_delivers_the_placeholder_and_resets_progress() {
    let sink = InMemorySink::new();
    let mut engine = RevealEngine::new(solid_source(), sink.clone());
    engine
        .attach(Box::new(AlphaBlend::new()), ExecutionModel::Sync)
        .unwrap();

    assert_eq!(sink.len(), 1);
    assert_eq!(engine.progress(), Some(Progress::ZERO));
    assert_eq!(engine.current_frame(), sink.last());
}

#[test]
fn set_progress_requires_an_attached_strategy() {
    let mut engine = RevealEngine::new(solid_source(), InMemorySink::new());
    assert!(engine.set_progress(Progress::from_percent(10)).is_err());
}

#[test]
fn sync_sessions_deliver_before_returning() {
    let sink = InMemorySink::new();
    let mut engine = RevealEngine::new(solid_source(), sink.clone());
    engine
        .attach(Box::new(AlphaBlend::new()), ExecutionModel::Sync)
        .unwrap();
    engine.set_progress(Progress::FULL).unwrap();

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.last().unwrap(), solid_source());
    assert_eq!(engine.progress(), Some(Progress::FULL));
    assert_eq!(engine.current_frame().unwrap(), solid_source());
}

#[test]
fn cleanup_is_idempotent_and_detaches() {
    let mut engine = RevealEngine::new(solid_source(), InMemorySink::new());
    engine
        .attach(Box::new(ColorRegionFill::new(FillDirection::LeftToRight)), ExecutionModel::Sync)
        .unwrap();
    engine.cleanup();
    engine.cleanup();
    assert!(engine.current_frame().is_none());
    assert!(engine.progress().is_none());
    assert!(engine.set_progress(Progress::FULL).is_err());
}

#[test]
fn a_failing_sink_marks_the_session_failed() {
    struct RejectAfter(usize);
    impl FrameSink for RejectAfter {
        fn on_frame(&mut self, _frame: &Frame) -> UnveilResult<()> {
            if self.0 == 0 {
                return Err(UnveilError::compute("sink full"));
            }
            self.0 -= 1;
            Ok(())
        }
    }

    let mut engine = RevealEngine::new(solid_source(), RejectAfter(1));
    engine
        .attach(Box::new(AlphaBlend::new()), ExecutionModel::Sync)
        .unwrap();
    assert!(engine.set_progress(Progress::from_percent(30)).is_err());
    assert!(engine.is_failed());
    // Failed sessions ignore further updates instead of erroring.
    assert!(engine.set_progress(Progress::from_percent(60)).is_ok());
}

#[test]
fn reattaching_replaces_the_session() {
    let sink = InMemorySink::new();
    let mut engine = RevealEngine::new(solid_source(), sink.clone());
    engine
        .attach(Box::new(AlphaBlend::new()), ExecutionModel::Sync)
        .unwrap();
    engine.set_progress(Progress::from_percent(40)).unwrap();
    engine
        .attach_preferred(Box::new(AlphaBlend::new()))
        .unwrap();

    assert_eq!(engine.progress(), Some(Progress::ZERO));
    // Two placeholders plus one composite.
    assert_eq!(sink.len(), 3);
}

#[test]
fn snapshot_restore_round_trips_through_the_engine() {
    let sink = InMemorySink::new();
    let mut engine = RevealEngine::new(solid_source(), sink.clone());
    engine
        .attach(
            Box::new(BlockMosaic::new(2, ReorderPolicy::Identity).unwrap()),
            ExecutionModel::Sync,
        )
        .unwrap();
    engine.set_progress(Progress::from_percent(50)).unwrap();
    let snap = engine.snapshot().unwrap();

    engine
        .attach(
            Box::new(BlockMosaic::new(2, ReorderPolicy::Identity).unwrap()),
            ExecutionModel::Sync,
        )
        .unwrap();
    engine.restore(&snap).unwrap();
    assert_eq!(engine.progress().unwrap().as_percent(), 50);
    assert_eq!(engine.current_frame().unwrap(), snap.frame().unwrap());
}

#[test]
fn restore_rejects_foreign_dimensions() {
    let mut engine = RevealEngine::new(solid_source(), InMemorySink::new());
    engine
        .attach(Box::new(AlphaBlend::new()), ExecutionModel::Sync)
        .unwrap();
    let foreign = Frame::filled(3, 3, [0, 0, 0, 255]).unwrap();
    let snap = Snapshot::capture(&foreign, Progress::ZERO);
    assert!(engine.restore(&snap).is_err());
}

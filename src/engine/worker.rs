use crate::engine::catchup::step_for_percent;
use crate::engine::session::SessionState;
use crate::engine::sink::SharedSink;
use crate::foundation::core::{Frame, Progress};
use crate::foundation::error::{UnveilError, UnveilResult};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// A unit of background composite work. Runs carry the progress value their
/// final frame stands for; the session's progress is updated once the run
/// has delivered it.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Job {
    /// Catch-up over engine cell indices `from..=to` (1-based; index `i`
    /// composites partition cell `i - 1`).
    CellRun {
        from: u32,
        to: u32,
        progress: Progress,
    },
    /// Catch-up over percent steps `from..=to`, each mapped to its strategy
    /// step.
    PercentRun {
        from: u32,
        to: u32,
        progress: Progress,
    },
    /// One direct hybrid step.
    Single { step: u32, progress: Progress },
    /// One fire-and-forget async composite.
    Shot { percent: u32, progress: Progress },
}

/// The per-session background worker: one dedicated thread draining a job
/// queue, so composite steps are serialized and frames leave in order.
pub(crate) struct Worker {
    tx: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    pub(crate) fn spawn(
        state: Arc<Mutex<SessionState>>,
        source: Arc<Frame>,
        sink: SharedSink,
    ) -> UnveilResult<Self> {
        let (tx, rx) = mpsc::channel::<Job>();
        let handle = std::thread::Builder::new()
            .name("unveil-worker".into())
            .spawn(move || drain(rx, state, source, sink))
            .map_err(|e| UnveilError::compute(format!("failed to spawn session worker: {e}")))?;
        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
        })
    }

    pub(crate) fn submit(&self, job: Job) -> UnveilResult<()> {
        let tx = self
            .tx
            .as_ref()
            .ok_or_else(|| UnveilError::contract("session worker already stopped"))?;
        tx.send(job)
            .map_err(|_| UnveilError::compute("session worker is not accepting jobs"))
    }

    /// Stop accepting jobs and wait for the queue to drain. Already-queued
    /// runs complete their scheduled range; nothing is delivered after this
    /// returns.
    pub(crate) fn join(mut self) {
        self.tx = None;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.tx = None;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn drain(rx: Receiver<Job>, state: Arc<Mutex<SessionState>>, source: Arc<Frame>, sink: SharedSink) {
    while let Ok(job) = rx.recv() {
        match job {
            Job::CellRun { from, to, progress } => {
                for idx in from..=to {
                    if !run_step(&state, &source, &sink, idx.saturating_sub(1)) {
                        break;
                    }
                }
                finish(&state, progress);
            }
            Job::PercentRun { from, to, progress } => {
                // The partition is fixed after prepare, so one lookup serves
                // the whole run.
                let cc = crate::engine::lock(&state).strategy.cell_count();
                for p in from..=to {
                    if !run_step(&state, &source, &sink, step_for_percent(cc, p)) {
                        break;
                    }
                }
                finish(&state, progress);
            }
            Job::Single { step, progress } | Job::Shot {
                percent: step,
                progress,
            } => {
                run_step(&state, &source, &sink, step);
                finish(&state, progress);
            }
        }
    }
}

/// Composite one step against the current frame, replace it, deliver.
/// Returns `false` when the session failed and the run should stop.
fn run_step(
    state: &Arc<Mutex<SessionState>>,
    source: &Frame,
    sink: &SharedSink,
    step: u32,
) -> bool {
    let frame = {
        let mut guard = crate::engine::lock(state);
        if guard.failed {
            return false;
        }
        let inner = &mut *guard;
        match inner.strategy.compute_frame(source, &inner.current, step) {
            Ok(frame) => {
                inner.current = frame.clone();
                frame
            }
            Err(err) => {
                tracing::warn!(step, %err, "composite step failed, session marked failed");
                inner.failed = true;
                return false;
            }
        }
    };
    if let Err(err) = crate::engine::lock(sink).on_frame(&frame) {
        tracing::warn!(step, %err, "sink rejected frame, session marked failed");
        crate::engine::lock(state).failed = true;
        return false;
    }
    true
}

fn finish(state: &Arc<Mutex<SessionState>>, progress: Progress) {
    let mut guard = crate::engine::lock(state);
    if !guard.failed {
        guard.progress = progress;
    }
}

use crate::engine::catchup::{Cursors, Dispatch, plan, step_for_percent};
use crate::engine::sink::{FrameSink, SharedSink};
use crate::engine::snapshot::Snapshot;
use crate::engine::worker::{Job, Worker};
use crate::foundation::core::{Frame, Progress};
use crate::foundation::error::{UnveilError, UnveilResult};
use crate::strategy::{ExecutionModel, RevealStrategy, StepDomain};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Mutable per-session state, shared between the caller and the session
/// worker under one lock.
pub(crate) struct SessionState {
    pub(crate) strategy: Box<dyn RevealStrategy>,
    pub(crate) current: Frame,
    pub(crate) progress: Progress,
    pub(crate) cursors: Cursors,
    pub(crate) failed: bool,
    pub(crate) last_compute: Option<Instant>,
}

struct Session {
    model: ExecutionModel,
    state: Arc<Mutex<SessionState>>,
    worker: Option<Worker>,
}

/// The progress driver: owns the source image, the frame sink and at most
/// one attached reveal session.
///
/// Lifecycle: `Unattached` until [`attach`](RevealEngine::attach) succeeds,
/// then progress updates flow through [`set_progress`](RevealEngine::set_progress)
/// until [`cleanup`](RevealEngine::cleanup) detaches the strategy again. A
/// session whose background work failed ignores further progress updates
/// until it is detached and re-attached.
pub struct RevealEngine {
    source: Arc<Frame>,
    sink: SharedSink,
    session: Option<Session>,
}

impl RevealEngine {
    /// Create an engine for one source image, delivering frames to `sink`.
    pub fn new(source: Frame, sink: impl FrameSink + 'static) -> Self {
        Self {
            source: Arc::new(source),
            sink: Arc::new(Mutex::new(Box::new(sink))),
            session: None,
        }
    }

    /// The source image frames are revealed from.
    pub fn source(&self) -> &Frame {
        &self.source
    }

    /// Attach a strategy under the given execution model.
    ///
    /// Runs the strategy's one-time `prepare`, delivers the placeholder
    /// frame, and (for the async and hybrid models) starts the session
    /// worker. An already-attached session is cleaned up first.
    #[tracing::instrument(skip(self, strategy))]
    pub fn attach(
        &mut self,
        mut strategy: Box<dyn RevealStrategy>,
        model: ExecutionModel,
    ) -> UnveilResult<()> {
        self.cleanup();
        let placeholder = strategy.prepare(&self.source)?;
        let state = Arc::new(Mutex::new(SessionState {
            strategy,
            current: placeholder.clone(),
            progress: Progress::ZERO,
            cursors: Cursors::default(),
            failed: false,
            last_compute: None,
        }));
        let worker = match model {
            ExecutionModel::Sync => None,
            ExecutionModel::Async | ExecutionModel::Hybrid => Some(Worker::spawn(
                state.clone(),
                self.source.clone(),
                self.sink.clone(),
            )?),
        };
        let session = Session {
            model,
            state,
            worker,
        };
        let delivered = crate::engine::lock(&self.sink).on_frame(&placeholder);
        if delivered.is_err() {
            crate::engine::lock(&session.state).failed = true;
        }
        self.session = Some(session);
        delivered
    }

    /// Attach a strategy under its preferred execution model.
    pub fn attach_preferred(&mut self, strategy: Box<dyn RevealStrategy>) -> UnveilResult<()> {
        let model = strategy.preferred_model();
        self.attach(strategy, model)
    }

    /// Drive the reveal to `progress`.
    ///
    /// Synchronous sessions composite and deliver before returning. Async
    /// and hybrid sessions enqueue work on the session worker and return
    /// immediately; hybrid sessions replay any skipped intermediate steps
    /// first (catch-up). Progress may move backward; that composites the
    /// earlier step directly and never errors. On a failed session this is
    /// a no-op.
    #[tracing::instrument(skip(self))]
    pub fn set_progress(&mut self, progress: Progress) -> UnveilResult<()> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| UnveilError::contract("set_progress requires an attached strategy"))?;
        let percent = progress.as_percent();
        match session.model {
            ExecutionModel::Sync => self.sync_step(session, percent, progress),
            ExecutionModel::Async => self.async_shot(session, percent, progress),
            ExecutionModel::Hybrid => self.hybrid_dispatch(session, percent, progress),
        }
    }

    /// Detach the current strategy, if any.
    ///
    /// Stops the session worker and waits for already-queued runs to finish
    /// their scheduled range, so no frame is delivered after this returns;
    /// then releases the strategy's artifacts and the current frame.
    /// Idempotent.
    #[tracing::instrument(skip(self))]
    pub fn cleanup(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if let Some(worker) = session.worker.take() {
            worker.join();
        }
        crate::engine::lock(&session.state).strategy.cleanup();
    }

    /// The engine's current frame, if a session is attached.
    pub fn current_frame(&self) -> Option<Frame> {
        self.session
            .as_ref()
            .map(|s| crate::engine::lock(&s.state).current.clone())
    }

    /// The progress of the most recently delivered frame, if attached.
    pub fn progress(&self) -> Option<Progress> {
        self.session
            .as_ref()
            .map(|s| crate::engine::lock(&s.state).progress)
    }

    /// Return `true` when the attached session has failed and is ignoring
    /// progress updates.
    pub fn is_failed(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| crate::engine::lock(&s.state).failed)
    }

    /// Copy out the current frame and progress for host-side persistence.
    pub fn snapshot(&self) -> Option<Snapshot> {
        let session = self.session.as_ref()?;
        let state = crate::engine::lock(&session.state);
        Some(Snapshot::capture(&state.current, state.progress))
    }

    /// Restore a previously captured snapshot into the attached session.
    pub fn restore(&mut self, snapshot: &Snapshot) -> UnveilResult<()> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| UnveilError::contract("restore requires an attached strategy"))?;
        let frame = snapshot.frame()?;
        if frame.width != self.source.width || frame.height != self.source.height {
            return Err(UnveilError::config(
                "snapshot dimensions do not match the source image",
            ));
        }
        let progress = snapshot.progress()?;
        let mut state = crate::engine::lock(&session.state);
        state.current = frame;
        state.progress = progress;
        state.cursors = Cursors {
            cell: match state.strategy.cell_count() {
                Some(cc) => crate::foundation::math::floor_of_percent(cc, progress.as_percent()) + 1,
                None => 0,
            },
            percent: progress.as_percent(),
        };
        Ok(())
    }

    fn sync_step(&self, session: &Session, percent: u32, progress: Progress) -> UnveilResult<()> {
        let frame = {
            let mut guard = crate::engine::lock(&session.state);
            if guard.failed {
                return Ok(());
            }
            let state = &mut *guard;
            let step = match state.strategy.step_domain() {
                StepDomain::Percent => percent,
                StepDomain::Cell => step_for_percent(state.strategy.cell_count(), percent),
            };
            match state.strategy.compute_frame(&self.source, &state.current, step) {
                Ok(frame) => {
                    state.current = frame.clone();
                    state.progress = progress;
                    frame
                }
                Err(err) => {
                    state.failed = true;
                    return Err(err);
                }
            }
        };
        self.deliver(session, &frame)
    }

    fn async_shot(&self, session: &Session, percent: u32, progress: Progress) -> UnveilResult<()> {
        {
            let mut state = crate::engine::lock(&session.state);
            if state.failed {
                return Ok(());
            }
            // Self-throttling strategies re-deliver the previous frame
            // unchanged inside their recompute window.
            if let Some(window) = state.strategy.throttle()
                && let Some(last) = state.last_compute
                && last.elapsed() < window
            {
                let frame = state.current.clone();
                state.progress = progress;
                drop(state);
                return self.deliver(session, &frame);
            }
            state.last_compute = Some(Instant::now());
        }
        submit(session, Job::Shot { percent, progress })
    }

    fn hybrid_dispatch(
        &self,
        session: &Session,
        percent: u32,
        progress: Progress,
    ) -> UnveilResult<()> {
        let dispatch = {
            let mut state = crate::engine::lock(&session.state);
            if state.failed {
                return Ok(());
            }
            let cell_count = state.strategy.cell_count();
            plan(&mut state.cursors, cell_count, percent)
        };
        let job = match dispatch {
            Dispatch::CellRun { from, to } => Job::CellRun { from, to, progress },
            Dispatch::PercentRun { from, to } => Job::PercentRun { from, to, progress },
            Dispatch::Direct { step } => Job::Single { step, progress },
        };
        submit(session, job)
    }

    fn deliver(&self, session: &Session, frame: &Frame) -> UnveilResult<()> {
        let result = crate::engine::lock(&self.sink).on_frame(frame);
        if result.is_err() {
            crate::engine::lock(&session.state).failed = true;
        }
        result
    }
}

fn submit(session: &Session, job: Job) -> UnveilResult<()> {
    session
        .worker
        .as_ref()
        .ok_or_else(|| UnveilError::contract("session has no background worker"))?
        .submit(job)
}

impl Drop for RevealEngine {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/session.rs"]
mod tests;

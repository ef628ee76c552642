use crate::foundation::math::floor_of_percent;

/// The scheduler's record of the last step actually dispatched, kept in two
/// unit spaces: partition cell indices and integer percent.
///
/// Cell index 0 is reserved for the placeholder-only frame; the first real
/// cell is index 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cursors {
    pub(crate) cell: u32,
    pub(crate) percent: u32,
}

/// What a progress update turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dispatch {
    /// Replay cell indices `from..=to` (engine indices, 1-based).
    CellRun { from: u32, to: u32 },
    /// Replay percent steps `from..=to`.
    PercentRun { from: u32, to: u32 },
    /// Composite the single step directly.
    Direct { step: u32 },
}

/// Map a percent to the strategy step: the 0-based cell index for
/// cell-domain strategies, the percent itself otherwise.
pub(crate) fn step_for_percent(cell_count: Option<u32>, percent: u32) -> u32 {
    match cell_count {
        Some(cc) => floor_of_percent(cc, percent),
        None => percent,
    }
}

/// Two-phase, dual-unit gap check.
///
/// Cursors are advanced before the caller enqueues the run, so an
/// overlapping update computes its gap against the new target and the same
/// step is never replayed by two runs. A negative gap (progress moved
/// backward) falls through to the direct branch; nothing is un-revealed.
pub(crate) fn plan(cursors: &mut Cursors, cell_count: Option<u32>, percent: u32) -> Dispatch {
    if let Some(cc) = cell_count {
        let target = floor_of_percent(cc, percent) + 1;
        if target > cursors.cell + 1 {
            let from = cursors.cell + 1;
            // The run supersedes the percent-space check too: both cursors
            // are caught up to this update before it is enqueued.
            cursors.cell = target;
            cursors.percent = percent;
            tracing::debug!(from, to = target, "cell-space catch-up");
            return Dispatch::CellRun { from, to: target };
        }
        cursors.cell = target;
    }
    if percent > cursors.percent + 1 {
        let from = cursors.percent + 1;
        cursors.percent = percent;
        tracing::debug!(from, to = percent, "percent-space catch-up");
        return Dispatch::PercentRun { from, to: percent };
    }
    cursors.percent = percent;
    Dispatch::Direct {
        step: step_for_percent(cell_count, percent),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/catchup.rs"]
mod tests;

//! The progress driver: session state machine, execution models, catch-up
//! scheduling and frame delivery.

pub(crate) mod catchup;
/// The engine session state machine.
pub mod session;
/// Frame delivery sinks.
pub mod sink;
/// Host-side persistence snapshots.
pub mod snapshot;
pub(crate) mod worker;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering the guard when a previous holder panicked.
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

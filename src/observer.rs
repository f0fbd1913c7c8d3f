//! First-chance error notification.
//!
//! Errors raised on the direct path are handed to [`notify`] before the
//! Option-returning API discards them. Applications that want telemetry
//! install a hook with [`set_observer`]; without one, the error is logged at
//! display level 3.
//!
//! The hook is process-wide. It runs on the thread that hit the error, so it
//! must be `Send + Sync` and should return quickly.

use std::sync::{Arc, RwLock};

use crate::displaylevel;
use crate::error::CodecError;

/// Signature of a first-chance observer.
pub type Observer = Arc<dyn Fn(&CodecError) + Send + Sync + 'static>;

static OBSERVER: RwLock<Option<Observer>> = RwLock::new(None);

/// Install `f` as the process-wide observer, replacing any previous one.
pub fn set_observer<F>(f: F)
where
    F: Fn(&CodecError) + Send + Sync + 'static,
{
    let mut slot = OBSERVER.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(Arc::new(f));
}

/// Remove the installed observer, restoring the logging default.
pub fn clear_observer() {
    let mut slot = OBSERVER.write().unwrap_or_else(|e| e.into_inner());
    *slot = None;
}

/// Report `err` to the observer.
pub fn notify(err: &CodecError) {
    // Clone out of the lock so a hook that calls back into this module
    // cannot deadlock.
    let hook = OBSERVER
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone();
    match hook {
        Some(f) => f(err),
        None => displaylevel!(3, "lzfsekit: first-chance error: {}\n", err),
    }
}

//! Screen lifetime flag for discarding late responses, and the browser task spawner.
//!
//! Each screen creates one `ScreenLifetime` on mount. Async tasks check
//! `is_alive()` before writing results into the screen's signals; leaving the
//! screen flips the flag via `on_cleanup`.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct ScreenLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenLifetime {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// New lifetime ended automatically when the current reactive owner is disposed.
    #[must_use]
    pub fn install() -> Self {
        let lifetime = Self::new();
        let on_drop = lifetime.clone();
        on_cleanup(move || on_drop.end());
        lifetime
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Run `task` on the browser event loop. Server renders never issue API calls,
/// so off the browser the task is dropped unpolled.
pub fn spawn_browser(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

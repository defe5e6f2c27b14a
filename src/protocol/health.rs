//! Readiness and liveness surfaces for the worker.
//!
//! The worker advertises `ready` while idle and `drain` while a search is
//! running; the proxy uses that to steer requests elsewhere. No socket code
//! lives here: the daemon owns transport, this module owns the state.

use serde::Serialize;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

pub struct Availability {
    busy: AtomicBool,
}

impl Default for Availability {
    fn default() -> Self {
        Self::new()
    }
}

static AVAILABILITY: OnceLock<Availability> = OnceLock::new();
static STARTED: OnceLock<Instant> = OnceLock::new();

impl Availability {
    pub fn new() -> Self {
        Availability {
            busy: AtomicBool::new(false),
        }
    }

    pub fn global() -> &'static Availability {
        AVAILABILITY.get_or_init(Availability::new)
    }

    /// Flip to drain for the lifetime of the returned guard.
    pub fn begin_search(&self) -> SearchGuard<'_> {
        self.busy.store(true, Ordering::SeqCst);
        SearchGuard { gate: self }
    }

    pub fn readiness(&self) -> &'static str {
        if self.busy.load(Ordering::SeqCst) {
            "drain"
        } else {
            "ready"
        }
    }
}

pub struct SearchGuard<'a> {
    gate: &'a Availability,
}

impl Drop for SearchGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::SeqCst);
    }
}

/// Anchor the uptime clock; called once at process start. Later calls are
/// no-ops, and `report` anchors lazily if the binary forgot.
pub fn mark_started() {
    let _ = STARTED.get_or_init(Instant::now);
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime: f64,
}

pub fn report() -> HealthReport {
    let started = STARTED.get_or_init(Instant::now);
    HealthReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime: started.elapsed().as_secs_f64(),
    }
}

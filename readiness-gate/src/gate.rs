//! Readiness state for the probe service.
//!
//! Liveness probes drive a counter; once it passes the threshold both
//! simulated dependencies report ready and stay that way. The counter
//! increment is exposed as [`ReadinessGate::record_probe`] so the warm-up can
//! be driven without HTTP.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tracing::info;

/// Liveness probes needed before the gate opens: it opens on probe
/// `DEFAULT_THRESHOLD + 1`.
pub const DEFAULT_THRESHOLD: u64 = 10;

/// Lifecycle of the gate. `Ready` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Still counting liveness probes.
    Warming,
    /// Both dependencies reported ready.
    Ready,
}

/// Readiness of the two simulated backing stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyFlags {
    pub database_ready: bool,
    pub object_store_ready: bool,
}

/// Thread-safe warm-up gate shared by the probe handlers.
#[derive(Debug)]
pub struct ReadinessGate {
    threshold: u64,
    probes: AtomicU64,
    database_ready: AtomicBool,
    object_store_ready: AtomicBool,
}

impl ReadinessGate {
    /// Create a warming gate that opens once more than `threshold` liveness
    /// probes have been recorded.
    #[must_use]
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            probes: AtomicU64::new(0),
            database_ready: AtomicBool::new(false),
            object_store_ready: AtomicBool::new(false),
        }
    }

    /// Count one liveness probe and return the new total.
    ///
    /// Opens the gate when the total first exceeds the threshold.
    pub fn record_probe(&self) -> u64 {
        let count = self.probes.fetch_add(1, Ordering::AcqRel).saturating_add(1);
        if count > self.threshold && !self.is_ready() {
            // Flags are written together; only the caller that flips the
            // database flag logs the transition.
            self.object_store_ready.store(true, Ordering::Release);
            if !self.database_ready.swap(true, Ordering::AcqRel) {
                info!(probes = count, threshold = self.threshold, "dependencies ready");
            }
        }
        count
    }

    /// Liveness probes recorded so far.
    #[must_use]
    pub fn probe_count(&self) -> u64 {
        self.probes.load(Ordering::Acquire)
    }

    /// `true` once both dependencies report ready.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        let flags = self.dependencies();
        flags.database_ready && flags.object_store_ready
    }

    /// Current state of the simulated dependencies.
    #[must_use]
    pub fn dependencies(&self) -> DependencyFlags {
        DependencyFlags {
            database_ready: self.database_ready.load(Ordering::Acquire),
            object_store_ready: self.object_store_ready.load(Ordering::Acquire),
        }
    }

    /// `Ready` once the gate has opened, `Warming` before.
    #[must_use]
    pub fn state(&self) -> GateState {
        if self.is_ready() {
            GateState::Ready
        } else {
            GateState::Warming
        }
    }

    /// Probe count the gate must exceed before it opens.
    #[must_use]
    pub fn threshold(&self) -> u64 {
        self.threshold
    }
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

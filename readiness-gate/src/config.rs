//! Probe service configuration read from the environment.

use tracing::warn;

use crate::gate::DEFAULT_THRESHOLD;

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4433";

/// Runtime configuration for the `readiness-gate` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GateConfig {
    /// Socket address to bind.
    pub listen_addr: String,

    /// Liveness probes to absorb before reporting ready.
    pub threshold: u64,
}

impl GateConfig {
    /// Read `READINESS_LISTEN_ADDR` and `READINESS_PROBE_THRESHOLD`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// An unparseable threshold is logged and replaced by the default.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let listen_addr = lookup("READINESS_LISTEN_ADDR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let threshold = match lookup("READINESS_PROBE_THRESHOLD") {
            Some(raw) if !raw.trim().is_empty() => raw.trim().parse().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "invalid READINESS_PROBE_THRESHOLD, using default");
                DEFAULT_THRESHOLD
            }),
            _ => DEFAULT_THRESHOLD,
        };
        Self { listen_addr, threshold }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

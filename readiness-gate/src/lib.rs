//! Liveness and readiness probe service with a simulated warm-up.
//!
//! `/healthyz` always succeeds and counts toward the warm-up; `/readyz`
//! reports 503 until more than the configured number of liveness probes
//! have been seen, then 200 for the rest of the process lifetime.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod gate;
pub mod routes;

pub use config::GateConfig;
pub use gate::{DependencyFlags, GateState, ReadinessGate, DEFAULT_THRESHOLD};

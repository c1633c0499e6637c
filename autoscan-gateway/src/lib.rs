//! HTTP API for the autoscan scan-record service.
//!
//! Accepts "run a scan" requests, records a simulated result in the scan
//! store and lists recent runs. Also exposes a static health check and an
//! allow-listed environment snapshot for deployment debugging.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod env;
pub mod error;
pub mod routes;

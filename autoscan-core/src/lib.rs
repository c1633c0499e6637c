//! Core types for the autoscan scan-record service.
//!
//! Defines the scan domain: request normalization, the weighted scan
//! simulation, persisted run records and their timestamp format. Nothing in
//! this crate performs I/O.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod request;
pub mod scan;
pub mod time;

pub use error::CoreError;
pub use id::ScanId;
pub use request::{ScanRequest, DEFAULT_AUTOMATION_MODE, DEFAULT_TARGET};
pub use scan::{simulate_scan, NewScanRun, ScanResult, ScanRun, ScanStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_id_display_shows_integer() {
        assert_eq!(ScanId(42).to_string(), "42");
        assert_eq!(ScanId::from(7).get(), 7);
    }

    #[test]
    fn scan_id_serializes_transparently() {
        let json = match serde_json::to_string(&ScanId(5)) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, "5");
    }

    #[test]
    fn scan_ids_order_by_value() {
        assert!(ScanId(1) < ScanId(2));
    }

    #[test]
    fn new_scan_run_carries_request_and_result() {
        let request = ScanRequest::normalize(Some("web-1"), Some("MANUAL"));
        let result = ScanResult::new(ScanStatus::Passed, &request);
        let run = NewScanRun::new(request, result);
        assert_eq!(run.target, "web-1");
        assert_eq!(run.automation_mode, "manual");
        assert_eq!(run.status, ScanStatus::Passed);
        assert_eq!(run.summary, "web-1 cleared manual checks.");
    }

    #[test]
    fn core_error_display_includes_value() {
        let err = CoreError::UnknownStatus { value: "skipped".to_owned() };
        assert!(err.to_string().contains("skipped"), "Display must include the value");
    }
}

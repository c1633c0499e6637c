//! Fuzz target: lenient parsing of `POST /api/scans` bodies.
//!
//! Arbitrary bytes must always normalize to a request with a non-blank
//! target and a lower-case automation mode.

#![no_main]

use autoscan_core::ScanRequest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let req = ScanRequest::from_body(data);
    assert!(!req.target.trim().is_empty());
    assert!(!req.automation_mode.is_empty());
});

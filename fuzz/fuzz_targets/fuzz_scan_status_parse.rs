//! Fuzz target: decoding stored status strings.
//!
//! Anything that parses must render back to the same string.

#![no_main]

use autoscan_core::ScanStatus;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(status) = data.parse::<ScanStatus>() {
        assert_eq!(status.as_str(), data);
    }
});

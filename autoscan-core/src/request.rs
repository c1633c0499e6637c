//! Normalization of "run a scan" request bodies.
//!
//! Parsing is deliberately lenient: a body that is missing, not JSON, or not
//! a JSON object yields the defaults rather than an error.

use serde_json::Value;

/// Target used when the request names none.
pub const DEFAULT_TARGET: &str = "internal";

/// Automation mode used when the request names none.
pub const DEFAULT_AUTOMATION_MODE: &str = "automated";

/// A normalized scan request.
///
/// `target` is never empty and `automation_mode` is always lower case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub target: String,
    pub automation_mode: String,
}

impl ScanRequest {
    /// Substitute defaults for absent or blank fields.
    ///
    /// - `target` is trimmed; if nothing is left it becomes [`DEFAULT_TARGET`].
    /// - `automation_mode` becomes [`DEFAULT_AUTOMATION_MODE`] when absent or
    ///   empty, and is lower-cased otherwise. It is not trimmed.
    #[must_use]
    pub fn normalize(target: Option<&str>, automation_mode: Option<&str>) -> Self {
        let target = match target.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_owned(),
            _ => DEFAULT_TARGET.to_owned(),
        };
        let automation_mode = match automation_mode {
            Some(m) if !m.is_empty() => m.to_lowercase(),
            _ => DEFAULT_AUTOMATION_MODE.to_owned(),
        };
        Self { target, automation_mode }
    }

    /// Read `target` and `automationMode` from a JSON value.
    ///
    /// Fields that are not strings count as absent, as does everything when
    /// `value` is not an object.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str);
        Self::normalize(field("target"), field("automationMode"))
    }

    /// Parse a raw request body. Never fails.
    #[must_use]
    pub fn from_body(bytes: &[u8]) -> Self {
        let value = serde_json::from_slice::<Value>(bytes).unwrap_or(Value::Null);
        Self::from_json(&value)
    }
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self::normalize(None, None)
    }
}

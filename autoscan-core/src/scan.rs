use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};
use serde::{Deserialize, Serialize};

use crate::{error::CoreError, id::ScanId, request::ScanRequest, time};

/// Outcome of a simulated scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// No findings.
    Passed,
    /// Drift detected; needs a manual follow-up.
    Warning,
    /// Critical policy violations.
    Failed,
}

impl ScanStatus {
    /// Every status, in the order matching [`ScanStatus::WEIGHTS`].
    pub const ALL: [ScanStatus; 3] = [ScanStatus::Passed, ScanStatus::Warning, ScanStatus::Failed];

    /// Relative selection weights used by [`simulate_scan`].
    pub const WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];

    /// Lower-case name, as stored and serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ScanStatus::Passed => "passed",
            ScanStatus::Warning => "warning",
            ScanStatus::Failed => "failed",
        }
    }

    /// Human-readable summary for a scan of `target` in `automation_mode`.
    ///
    /// Depends only on its inputs.
    #[must_use]
    pub fn summary(self, target: &str, automation_mode: &str) -> String {
        match self {
            ScanStatus::Passed => format!("{target} cleared {automation_mode} checks."),
            ScanStatus::Warning => {
                format!("{target} has drift indicators; schedule manual follow-up.")
            }
            ScanStatus::Failed => format!("{target} triggered critical policy violations."),
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScanStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStatus { value: s.to_owned() })
    }
}

/// Status and summary of a single simulated scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub status: ScanStatus,
    pub summary: String,
}

impl ScanResult {
    /// Build the result for `status` against a normalized request.
    #[must_use]
    pub fn new(status: ScanStatus, request: &ScanRequest) -> Self {
        Self { status, summary: status.summary(&request.target, &request.automation_mode) }
    }
}

/// A scan run that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScanRun {
    pub target: String,
    pub automation_mode: String,
    pub status: ScanStatus,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl NewScanRun {
    /// Combine a request and its result, stamped with the current time.
    #[must_use]
    pub fn new(request: ScanRequest, result: ScanResult) -> Self {
        Self::at(request, result, time::now_utc())
    }

    /// Combine a request and its result with an explicit creation time.
    #[must_use]
    pub fn at(request: ScanRequest, result: ScanResult, created_at: DateTime<Utc>) -> Self {
        Self {
            target: request.target,
            automation_mode: request.automation_mode,
            status: result.status,
            summary: result.summary,
            created_at,
        }
    }
}

/// A persisted scan run.
///
/// Records are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRun {
    pub id: ScanId,
    pub target: String,
    pub automation_mode: String,
    pub status: ScanStatus,
    pub summary: String,
    #[serde(with = "time::serde_micros")]
    pub created_at: DateTime<Utc>,
}

impl ScanRun {
    /// Attach the store-assigned id to a new run.
    #[must_use]
    pub fn from_new(id: ScanId, run: NewScanRun) -> Self {
        Self {
            id,
            target: run.target,
            automation_mode: run.automation_mode,
            status: run.status,
            summary: run.summary,
            created_at: run.created_at,
        }
    }
}

/// Produce a mock result for `request`, picking the status by weight.
///
/// # Panics
/// Never panics: [`ScanStatus::WEIGHTS`] is a fixed, valid weight table.
pub fn simulate_scan<R: Rng + ?Sized>(rng: &mut R, request: &ScanRequest) -> ScanResult {
    #[expect(clippy::expect_used, reason = "the weight table is non-empty and positive")]
    let weights = WeightedIndex::new(ScanStatus::WEIGHTS).expect("valid scan status weights");
    let status = ScanStatus::ALL[weights.sample(rng)];
    ScanResult::new(status, request)
}

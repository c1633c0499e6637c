//! UTC timestamps with a fixed ISO-8601 rendering.
//!
//! Every timestamp is written with exactly six fractional digits and a
//! trailing `Z`, so that string order matches chronological order. The
//! store relies on this for `ORDER BY created_at`.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::CoreError;

/// Current UTC time, truncated to the precision that survives a round-trip
/// through [`format_timestamp`].
#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Render `dt` as `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
#[must_use]
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a timestamp previously produced by [`format_timestamp`].
///
/// Any RFC 3339 timestamp is accepted and converted to UTC.
///
/// # Errors
/// Returns [`CoreError::InvalidTimestamp`] if `s` is not valid RFC 3339.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, CoreError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::InvalidTimestamp { value: s.to_owned(), reason: e.to_string() })
}

/// Serde adapter for `DateTime<Utc>` fields using the fixed rendering.
pub mod serde_micros {
    use chrono::{DateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    /// Serialize with [`super::format_timestamp`].
    ///
    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(dt))
    }

    /// Deserialize with [`super::parse_timestamp`].
    ///
    /// # Errors
    /// Fails if the string is not valid RFC 3339.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_timestamp_uses_micros_and_trailing_z() {
        let dt = match Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single() {
            Some(dt) => dt,
            None => panic!("valid date"),
        };
        assert_eq!(format_timestamp(&dt), "2024-05-01T12:00:00.000000Z");
    }

    #[test]
    fn now_utc_round_trips_through_text() {
        let now = now_utc();
        let parsed = match parse_timestamp(&format_timestamp(&now)) {
            Ok(dt) => dt,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(parsed, now, "truncated timestamps must survive formatting");
    }

    #[test]
    fn formatted_order_matches_chronological_order() {
        let base = now_utc();
        let later = base + chrono::Duration::microseconds(1);
        let much_later = base + chrono::Duration::seconds(1);
        assert!(format_timestamp(&base) < format_timestamp(&later));
        assert!(format_timestamp(&later) < format_timestamp(&much_later));
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("yesterday").err();
        assert!(
            matches!(err, Some(CoreError::InvalidTimestamp { .. })),
            "expected InvalidTimestamp, got {err:?}"
        );
    }
}

/// Errors produced by the `autoscan-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A stored status string is not one of `passed`, `warning` or `failed`.
    #[error("unknown scan status '{value}'")]
    UnknownStatus { value: String },

    /// A stored timestamp could not be parsed as ISO-8601 UTC.
    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

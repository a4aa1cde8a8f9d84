//! Millisecond durations rendered as `MM:SS`

use thiserror::Error;

#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("duration must be non-negative, got {0}ms")]
    Negative(i64),
}

/// Format a non-negative millisecond count as zero-padded `MM:SS`.
///
/// There is no hour component; 100 minutes and above keep every digit.
pub fn format_millis(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Checked variant of [`format_millis`] for signed input.
///
/// Every duration the app renders is already a decoded `u64`, so only the
/// tests call this today; it is the entry point for any signed source.
#[cfg_attr(not(test), allow(dead_code))]
pub fn format_duration(ms: i64) -> Result<String, DurationError> {
    u64::try_from(ms)
        .map(format_millis)
        .map_err(|_| DurationError::Negative(ms))
}

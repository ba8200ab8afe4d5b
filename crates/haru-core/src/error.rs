//! Error types for haru-core operations.

use thiserror::Error;

/// Format families the flexible parser understands, reported back to the
/// caller when no recognizer matches.
pub const SUPPORTED_FORMATS: &[&str] = &[
    "YYYY-MM-DDTHH:mm:ss+09:00[Asia/Seoul] (zoned)",
    "YYYY-MM-DDTHH:mm:ss (date-time)",
    "YYYY-MM-DD",
    "YYYY년 MM월 DD일",
    "YYYY.MM.DD / YY.MM.DD",
    "YYYY/MM/DD / MM/DD/YYYY / MM/DD/YY",
    "YYYYMMDD",
];

#[derive(Error, Debug)]
pub enum DateError {
    /// The string matched no known structural pattern.
    #[error("unrecognized date format: '{input}' (supported: {})", .supported.join(", "))]
    UnrecognizedFormat {
        input: String,
        supported: &'static [&'static str],
    },

    /// A structural pattern matched but the calendar value is impossible
    /// (month 13, February 30, ambiguous local time).
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// `format` was called with a type outside {date, time, datetime, iso, custom}.
    #[error("unsupported format type: '{0}' (expected one of: date, time, datetime, iso, custom)")]
    UnsupportedFormatType(String),

    /// A required companion argument was omitted.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A structurally valid request that is semantically impossible for the
    /// value's kind.
    #[error("incompatible operation: {operation} ({reason})")]
    IncompatibleOperation {
        operation: &'static str,
        reason: &'static str,
    },

    /// The timezone name is not a valid IANA identifier.
    #[error("invalid timezone: '{0}'")]
    InvalidTimezone(String),

    /// The bounded workday search exhausted its lookahead without finding
    /// a working day.
    #[error("no workday found within {scanned_days} days of {start}")]
    NoWorkdayFound { start: String, scanned_days: u32 },
}

pub type Result<T> = std::result::Result<T, DateError>;

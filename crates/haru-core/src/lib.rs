//! # haru-core
//!
//! Korean-convention date/time utilities on top of chrono and chrono-tz:
//! flexible date-string parsing, business-day and week-of-month
//! calculation, multi-style formatting (including Korean and relative
//! phrasing), and timezone conversion.
//!
//! Everything is a pure function over immutable values — no I/O, no
//! shared state, no interior mutation — so the whole crate is safe to
//! call concurrently without coordination. The only ambient resource is
//! the timezone rule database compiled into chrono-tz. The default
//! timezone for zone-defaulting operations is `Asia/Seoul`.
//!
//! ## Modules
//!
//! - [`parse`] — heterogeneous date strings → typed values, via a fixed,
//!   ordered list of format recognizers
//! - [`workday`] — workday predicate, next/previous-workday search,
//!   week-of-month computation
//! - [`format`] — fixed styles, custom token patterns, Korean style,
//!   relative-time phrasing
//! - [`timezone`] — current-time getters, zone conversion, offset
//!   differences
//! - [`bridge`] — `SystemTime` interop
//! - [`value`] — the [`DateValue`] sum type and polymorphic [`DateInput`]
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use haru_core::{format_korean, is_workday, next_workday, week_num, Holiday};
//!
//! let holidays = [Holiday {
//!     date: "2024-01-01".into(),
//!     name: "신정".into(),
//!     recurring: true,
//! }];
//!
//! assert!(!is_workday("2024년 1월 1일", &holidays, &[6, 7]).unwrap());
//! assert_eq!(
//!     next_workday("2024-01-12", &[], &[6, 7]).unwrap().to_string(),
//!     "2024-01-15"
//! );
//! assert_eq!(week_num("2024-02-01").unwrap().week_num, 5);
//! assert_eq!(format_korean("2024-01-15").unwrap(), "2024년 1월 15일");
//! ```

pub mod bridge;
pub mod error;
pub mod format;
pub mod parse;
pub mod timezone;
pub mod value;
pub mod workday;

pub use bridge::{from_system_time, from_system_time_in, to_system_time, to_system_time_in};
pub use error::{DateError, Result, SUPPORTED_FORMATS};
pub use format::{format, format_korean, format_relative, FormatType};
pub use parse::parse;
pub use timezone::{
    from_utc, from_utc_default, now, now_utc, parse_timezone, timezone_offset, to_utc, to_zoned,
    to_zoned_default,
};
pub use value::{DateInput, DateValue, DEFAULT_TZ};
pub use workday::{
    is_workday, next_workday, previous_workday, week_day, week_num, Holiday, WeekOfMonth,
    DEFAULT_NON_WORKING,
};

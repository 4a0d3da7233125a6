//! # Display Formatting
//!
//! Formatting helpers used when presenting amounts, times and search input.
//!
//! # Examples
//!
//! ```
//! use ladder_utils::api::display::{escape_regex, format_compact};
//!
//! assert_eq!(format_compact(1_250_000.0, "$", 1), "$1.3m");
//! assert_eq!(escape_regex("a.b*"), r"a\.b\*");
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

/// Default chrono format for [`format_timestamp`].
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder shown for a missing or unrenderable timestamp.
pub const EMPTY_TIMESTAMP: &str = "--";

const COMPACT_SCALES: [(f64, &str); 3] = [(1e9, "b"), (1e6, "m"), (1e3, "k")];

/// Formats a number with a `b`/`m`/`k` suffix.
///
/// The scaled value is rounded half away from zero to `fraction_digits`,
/// trailing zeros are dropped and the integer part is grouped with commas.
#[must_use]
pub fn format_compact(value: f64, currency_text: &str, fraction_digits: u32) -> String {
    let (scaled, suffix) = COMPACT_SCALES
        .iter()
        .find(|(divisor, _)| value / divisor >= 1.0)
        .map_or((value, ""), |(divisor, suffix)| (value / divisor, *suffix));

    match Decimal::from_f64(scaled) {
        Some(decimal) => {
            let rounded = decimal
                .round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero)
                .normalize();
            format!("{currency_text}{}{suffix}", group_thousands(&rounded.to_string()))
        }
        None => format!("{currency_text}{scaled}{suffix}"),
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a Unix timestamp in UTC.
///
/// Values with at most 10 digits are seconds, longer ones milliseconds.
/// `None`, zero and out-of-range values render as `"--"`, as does a format
/// string chrono cannot render.
#[must_use]
pub fn format_timestamp(timestamp: Option<i64>, format: &str) -> String {
    let Some(timestamp) = timestamp.filter(|t| *t != 0) else {
        return EMPTY_TIMESTAMP.to_string();
    };

    let millis = if timestamp.unsigned_abs() < 10_000_000_000 {
        timestamp.saturating_mul(1_000)
    } else {
        timestamp
    };

    DateTime::<Utc>::from_timestamp_millis(millis)
        .map_or_else(|| EMPTY_TIMESTAMP.to_string(), |dt| format_datetime(dt, format))
}

/// Formats a date-time, rendering `"--"` if chrono rejects the format string.
#[must_use]
pub fn format_datetime(datetime: DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", datetime.format(format)) {
        Ok(()) => out,
        Err(_) => EMPTY_TIMESTAMP.to_string(),
    }
}

/// Escapes regex metacharacters so user input can be matched literally.
#[must_use]
pub fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(
            c,
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

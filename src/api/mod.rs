//! # API Layer
//!
//! Presentation helpers used by the exchange UI.

pub mod display;

pub use display::{
    escape_regex, format_compact, format_datetime, format_timestamp, DEFAULT_TIMESTAMP_FORMAT,
    EMPTY_TIMESTAMP,
};

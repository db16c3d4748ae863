//! Utility modules for SGF values.

pub mod calendar;
pub mod number;
pub mod text;

pub use calendar::{days_in_month, is_leap_year, is_valid_calendar_date};
pub use number::{format_real, is_number, is_real, parse_number, parse_real, NumberError};
pub use text::{
    escape, find_composed_separator, normalize_simple_text, normalize_text, strip_escapes,
    unescape,
};

//! DT values: lists of possibly partial dates with shortcut notation.
//!
//! A DT value is a comma-separated list of `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
//! dates. After the first date, shortcuts may omit what the preceding date
//! already established:
//!
//! | Shortcut | Allowed after |
//! |----------|---------------|
//! | `MM-DD`  | `YYYY-MM-DD`, `YYYY-MM`, `MM-DD`, `MM`, `DD` |
//! | `MM`     | `YYYY-MM`, `MM` |
//! | `DD`     | `YYYY-MM-DD`, `MM-DD`, `DD` |
//!
//! A two-digit token is therefore a month after a month-precision date and a
//! day after a day-precision date.

use std::fmt;

use crate::limits::{MAX_YEAR, MIN_YEAR};
use crate::util::calendar::is_valid_calendar_date;

/// One date of a DT value. A zero component means "absent".
///
/// When passed to [`compose_date`], a date with year 0 is a shortcut that
/// inherits the year (and, for a day-only shortcut, the month) of the
/// preceding date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    /// Creates a date. No validation happens here; see [`Self::is_valid`].
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns true if the date is a valid full or partial date.
    ///
    /// A full date must exist in the Gregorian calendar. A partial date is
    /// valid if every present component is in range, it does not have a day
    /// without a month, and it is not empty.
    pub fn is_valid(&self) -> bool {
        if self.year == 0 && self.month == 0 && self.day == 0 {
            return false;
        }
        if self.month == 0 && self.day != 0 {
            return false;
        }
        if self.year != 0 && !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return false;
        }
        if self.month > 12 {
            return false;
        }
        if self.year != 0 && self.month != 0 && self.day != 0 {
            return is_valid_calendar_date(self.year, self.month, self.day);
        }
        self.day <= 31
    }

    /// Returns true if year, month and day are all present.
    pub fn is_full(&self) -> bool {
        self.year != 0 && self.month != 0 && self.day != 0
    }

    /// Returns true if the date lacks a year, i.e. is a shortcut.
    pub fn is_shortcut(&self) -> bool {
        self.year == 0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.day) {
            (0, _) => write!(f, "{:04}", self.year),
            (m, 0) => write!(f, "{:04}-{:02}", self.year, m),
            (m, d) => write!(f, "{:04}-{:02}-{:02}", self.year, m, d),
        }
    }
}

/// The written form of one token of a DT value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateFormat {
    YearMonthDay,
    YearMonth,
    Year,
    MonthDay,
    Month,
    Day,
}

impl DateFormat {
    /// Precision of the token: does the date it names carry a day?
    fn has_day(self) -> bool {
        matches!(self, DateFormat::YearMonthDay | DateFormat::MonthDay | DateFormat::Day)
    }

    /// Precision of the token: does it end with a month?
    fn ends_with_month(self) -> bool {
        matches!(self, DateFormat::YearMonth | DateFormat::Month)
    }

    /// Returns true if the shortcut `self` may follow a token of format `prev`.
    fn may_follow(self, prev: DateFormat) -> bool {
        match self {
            DateFormat::MonthDay => prev != DateFormat::Year,
            DateFormat::Month => prev.ends_with_month(),
            DateFormat::Day => prev.has_day(),
            _ => true,
        }
    }

    fn of_shortcut(date: &Date) -> Option<DateFormat> {
        match (date.month, date.day) {
            (0, 0) => None,
            (0, _) => Some(DateFormat::Day),
            (_, 0) => Some(DateFormat::Month),
            _ => Some(DateFormat::MonthDay),
        }
    }

    fn of_date(date: &Date) -> DateFormat {
        match (date.month, date.day) {
            (0, _) => DateFormat::Year,
            (_, 0) => DateFormat::YearMonth,
            _ => DateFormat::YearMonthDay,
        }
    }
}

/// Parses exactly `len` ASCII digits.
fn digits(s: &str, len: usize) -> Option<u32> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A token split into its numeric parts, before context resolves two-digit
/// tokens to month or day.
enum Token {
    Full(DateFormat, Date),
    MonthDay(u32, u32),
    TwoDigits(u32),
}

fn tokenize(token: &str) -> Option<Token> {
    let parts: Vec<&str> = token.split('-').collect();
    match parts.as_slice() {
        [y, m, d] if y.len() == 4 => Some(Token::Full(
            DateFormat::YearMonthDay,
            Date::new(digits(y, 4)? as i32, digits(m, 2)?, digits(d, 2)?),
        )),
        [y, m] if y.len() == 4 => Some(Token::Full(
            DateFormat::YearMonth,
            Date::new(digits(y, 4)? as i32, digits(m, 2)?, 0),
        )),
        [m, d] => Some(Token::MonthDay(digits(m, 2)?, digits(d, 2)?)),
        [y] if y.len() == 4 => Some(Token::Full(DateFormat::Year, Date::new(digits(y, 4)? as i32, 0, 0))),
        [v] => Some(Token::TwoDigits(digits(v, 2)?)),
        _ => None,
    }
}

/// Completes a shortcut using the preceding date's year and month.
fn complete(format: DateFormat, month: u32, day: u32, prev: &Date) -> Date {
    match format {
        DateFormat::MonthDay => Date::new(prev.year, month, day),
        DateFormat::Month => Date::new(prev.year, month, 0),
        _ => Date::new(prev.year, prev.month, day),
    }
}

/// Decomposes a raw DT value into its dates, completing every shortcut.
///
/// Returns an empty vector if any token is malformed, any date is invalid, or
/// a shortcut is not allowed where it appears.
pub fn decompose_date(raw: &str) -> Vec<Date> {
    match try_decompose(raw) {
        Some(dates) => dates,
        None => {
            tracing::trace!(raw, "DT value is not a valid date list");
            Vec::new()
        }
    }
}

fn try_decompose(raw: &str) -> Option<Vec<Date>> {
    if raw.trim().is_empty() {
        return None;
    }

    let mut dates = Vec::new();
    let mut prev: Option<(Date, DateFormat)> = None;

    for token in raw.split(',').map(str::trim) {
        let (date, format) = match tokenize(token)? {
            Token::Full(format, date) => (date, format),
            Token::MonthDay(month, day) => {
                let (p, pf) = prev?;
                if !DateFormat::MonthDay.may_follow(pf) {
                    return None;
                }
                (complete(DateFormat::MonthDay, month, day, &p), DateFormat::MonthDay)
            }
            Token::TwoDigits(v) => {
                let (p, pf) = prev?;
                if pf.has_day() {
                    (complete(DateFormat::Day, 0, v, &p), DateFormat::Day)
                } else if pf.ends_with_month() {
                    (complete(DateFormat::Month, v, 0, &p), DateFormat::Month)
                } else {
                    return None;
                }
            }
        };
        if !date.is_valid() {
            return None;
        }
        dates.push(date);
        prev = Some((date, format));
    }
    Some(dates)
}

/// Composes dates into a raw DT value, abbreviating with shortcuts wherever
/// the preceding date allows it.
///
/// Dates with year 0 are taken as caller-supplied shortcuts and are checked
/// two ways: completed with the preceding date's year and month they must be
/// valid, and their digit count must be unambiguous after the preceding
/// token. Returns the empty string (SGF "None") if any date or shortcut is
/// invalid, or if two consecutive non-shortcut dates are identical.
pub fn compose_date(dates: &[Date]) -> String {
    match try_compose(dates) {
        Some(raw) => raw,
        None => String::new(),
    }
}

fn try_compose(dates: &[Date]) -> Option<String> {
    if dates.is_empty() {
        return None;
    }

    let mut tokens = Vec::with_capacity(dates.len());
    // The previous completed date, its token format, and whether the caller
    // gave it as a shortcut.
    let mut prev: Option<(Date, DateFormat, bool)> = None;

    for date in dates {
        if date.is_shortcut() {
            let (p, pf, _) = prev?;
            let format = DateFormat::of_shortcut(date)?;
            if !format.may_follow(pf) {
                return None;
            }
            let completed = complete(format, date.month, date.day, &p);
            if !completed.is_valid() {
                return None;
            }
            tokens.push(format_token(&completed, format));
            prev = Some((completed, format, true));
            continue;
        }

        if !date.is_valid() {
            return None;
        }
        let full = DateFormat::of_date(date);
        let format = match prev {
            Some((p, _, false)) if p == *date => return None,
            Some((p, pf, _)) => abbreviate(date, full, &p, pf),
            None => full,
        };
        tokens.push(format_token(date, format));
        prev = Some((*date, format, false));
    }
    Some(tokens.join(","))
}

/// Picks the shortest token for `date` that the preceding token allows.
fn abbreviate(date: &Date, full: DateFormat, prev: &Date, prev_format: DateFormat) -> DateFormat {
    if date.year != prev.year {
        return full;
    }
    let candidates: &[DateFormat] = match full {
        DateFormat::YearMonthDay => &[DateFormat::Day, DateFormat::MonthDay],
        DateFormat::YearMonth => &[DateFormat::Month],
        _ => &[],
    };
    candidates
        .iter()
        .copied()
        .find(|f| {
            f.may_follow(prev_format)
                && complete(*f, date.month, date.day, prev) == *date
        })
        .unwrap_or(full)
}

fn format_token(date: &Date, format: DateFormat) -> String {
    match format {
        DateFormat::YearMonthDay | DateFormat::YearMonth | DateFormat::Year => date.to_string(),
        DateFormat::MonthDay => format!("{:02}-{:02}", date.month, date.day),
        DateFormat::Month => format!("{:02}", date.month),
        DateFormat::Day => format!("{:02}", date.day),
    }
}

//! SGF Number and Real grammar.
//!
//! ```text
//! Number = ["+"|"-"] Digit { Digit }
//! Real   = Number ["." Digit { Digit }]
//! ```

/// Error returned by [`parse_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    /// The text does not match the Number grammar.
    Syntax,
    /// The text matches but does not fit into an i64.
    Overflow,
}

fn split_sign(s: &str) -> &str {
    s.strip_prefix('+').or_else(|| s.strip_prefix('-')).unwrap_or(s)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if the text matches the Number grammar.
pub fn is_number(s: &str) -> bool {
    all_digits(split_sign(s))
}

/// Returns true if the text matches the Real grammar.
pub fn is_real(s: &str) -> bool {
    match split_sign(s).split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => is_number(s),
    }
}

/// Parses an SGF Number.
pub fn parse_number(s: &str) -> Result<i64, NumberError> {
    if !is_number(s) {
        return Err(NumberError::Syntax);
    }
    // i64::from_str accepts a leading '+' as well.
    s.parse::<i64>().map_err(|_| NumberError::Overflow)
}

/// Parses an SGF Real.
pub fn parse_real(s: &str) -> Option<f64> {
    if !is_real(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Formats a Real the shortest way SGF allows: no exponent, no trailing
/// fractional zeros, no trailing dot.
pub fn format_real(value: f64) -> String {
    // f64's Display never uses an exponent and omits ".0" for integral values.
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(parse_number("42"), Ok(42));
        assert_eq!(parse_number("+7"), Ok(7));
        assert_eq!(parse_number("-3"), Ok(-3));
        assert_eq!(parse_number(""), Err(NumberError::Syntax));
        assert_eq!(parse_number("-"), Err(NumberError::Syntax));
        assert_eq!(parse_number("1.5"), Err(NumberError::Syntax));
        assert_eq!(parse_number(" 1"), Err(NumberError::Syntax));
        assert_eq!(
            parse_number("99999999999999999999"),
            Err(NumberError::Overflow)
        );
    }

    #[test]
    fn test_reals() {
        assert_eq!(parse_real("6.5"), Some(6.5));
        assert_eq!(parse_real("-0.5"), Some(-0.5));
        assert_eq!(parse_real("7"), Some(7.0));
        assert_eq!(parse_real("7."), None);
        assert_eq!(parse_real(".5"), None);
        assert_eq!(parse_real("1e3"), None);
        assert_eq!(parse_real("inf"), None);
    }

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(6.5), "6.5");
        assert_eq!(format_real(3.0), "3");
        assert_eq!(format_real(-0.25), "-0.25");
    }
}

//! Gregorian calendar helpers used by the DT codec.

/// Returns true if the given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed), or 0 for a
/// month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Returns true if (year, month, day) names an existing Gregorian date.
pub fn is_valid_calendar_date(year: i32, month: u32, day: u32) -> bool {
    if !(crate::limits::MIN_YEAR..=crate::limits::MAX_YEAR).contains(&year) {
        return false;
    }
    day >= 1 && day <= days_in_month(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2020));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2019));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2019, 2), 28);
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(2020, 4), 30);
        assert_eq!(days_in_month(2020, 12), 31);
        assert_eq!(days_in_month(2020, 13), 0);
        assert_eq!(days_in_month(2020, 0), 0);
    }

    #[test]
    fn test_calendar_dates() {
        assert!(is_valid_calendar_date(2000, 2, 29));
        assert!(!is_valid_calendar_date(2019, 2, 29));
        assert!(!is_valid_calendar_date(2019, 4, 31));
        assert!(!is_valid_calendar_date(0, 1, 1));
        assert!(!is_valid_calendar_date(10000, 1, 1));
    }
}

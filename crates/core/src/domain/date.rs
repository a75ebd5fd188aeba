//! Calendar date normalization.
//!
//! Reports group and compare by calendar date only, so every string date is
//! normalized to a `NaiveDate` before it reaches the engine. Lexicographic
//! string comparison is never used.

use chrono::{Datelike, NaiveDate};

use super::error::DomainError;

/// Accepted textual layouts, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Parses a calendar date.
///
/// Accepts ISO `YYYY-MM-DD`, an ISO 8601 timestamp (the date part is kept),
/// and the day-first `DD/MM/YYYY` layout.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the input matches no layout or names
/// a day that does not exist (e.g. `2023-02-29`).
pub fn parse_date(input: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = input.trim();
    let date_part = trimmed.split_once('T').map_or(trimmed, |(date, _)| date);

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
        .ok_or_else(|| DomainError::InvalidDate(input.to_string()))
}

/// Last calendar day of `year`, clamped to the representable range.
#[must_use]
pub fn year_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(if year < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// Returns true if `date` falls in the given calendar month (1-based).
#[must_use]
pub fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

/// Steps `months` calendar months back from `(year, month)`.
///
/// `month` is 1-based; the result is too.
#[must_use]
pub fn months_back(year: i32, month: u32, months: u32) -> (i32, u32) {
    let index = i64::from(year) * 12 + i64::from(month) - 1 - i64::from(months);
    let back_year = i32::try_from(index.div_euclid(12)).unwrap_or(i32::MIN);
    let back_month = u32::try_from(index.rem_euclid(12)).unwrap_or(0) + 1;
    (back_year, back_month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2024-03-10", ymd(2024, 3, 10))]
    #[case("  2024-03-10 ", ymd(2024, 3, 10))]
    #[case("2024-03-10T14:30:00Z", ymd(2024, 3, 10))]
    #[case("2024-03-10T00:00:00.000-03:00", ymd(2024, 3, 10))]
    #[case("10/03/2024", ymd(2024, 3, 10))]
    #[case("2024-02-29", ymd(2024, 2, 29))]
    fn test_parse_date_accepts(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_date(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2023-02-29")]
    #[case("2024-13-01")]
    #[case("31/04/2024")]
    #[case("03/10/24x")]
    fn test_parse_date_rejects(#[case] input: &str) {
        assert_eq!(
            parse_date(input),
            Err(DomainError::InvalidDate(input.to_string()))
        );
    }

    #[test]
    fn test_year_end() {
        assert_eq!(year_end(2023), ymd(2023, 12, 31));
        assert_eq!(year_end(i32::MAX), NaiveDate::MAX);
        assert_eq!(year_end(i32::MIN), NaiveDate::MIN);
    }

    #[test]
    fn test_in_month() {
        assert!(in_month(ymd(2024, 3, 1), 2024, 3));
        assert!(in_month(ymd(2024, 3, 31), 2024, 3));
        assert!(!in_month(ymd(2024, 4, 1), 2024, 3));
        assert!(!in_month(ymd(2023, 3, 15), 2024, 3));
    }

    #[rstest]
    #[case((2024, 6), 0, (2024, 6))]
    #[case((2024, 6), 5, (2024, 1))]
    #[case((2024, 3), 5, (2023, 10))]
    #[case((2024, 1), 12, (2023, 1))]
    #[case((2024, 1), 25, (2021, 12))]
    fn test_months_back(#[case] from: (i32, u32), #[case] back: u32, #[case] expected: (i32, u32)) {
        assert_eq!(months_back(from.0, from.1, back), expected);
    }
}

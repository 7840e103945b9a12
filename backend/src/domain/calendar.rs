//! Calendar-date parsing and rendering for exercise dates.
//!
//! Inputs accept RFC 3339 timestamps, naive date-times, bare `YYYY-MM-DD`
//! dates (midnight UTC) and the rendered `Www Mmm dd yyyy` form, so a date
//! read back from the log can be submitted again unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Display format used in every response, e.g. `Mon Jan 02 2006`.
pub const CALENDAR_FORMAT: &str = "%a %b %d %Y";

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", CALENDAR_FORMAT];

/// Parse a client-supplied date string.
///
/// Returns `None` when the input is blank or matches none of the accepted
/// forms.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::{format_calendar_date, parse_calendar_date};
///
/// let parsed = parse_calendar_date("2006-01-02").expect("valid date");
/// assert_eq!(format_calendar_date(&parsed), "Mon Jan 02 2006");
/// assert!(parse_calendar_date("2006-13-45").is_none());
/// ```
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .map(|naive| naive.and_utc())
}

/// Render an instant in the fixed `Www Mmm dd yyyy` form (UTC).
#[must_use]
pub fn format_calendar_date(date: &DateTime<Utc>) -> String {
    date.format(CALENDAR_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("2023-02-01", "Wed Feb 01 2023")]
    #[case("2023-02-01T23:30:00Z", "Wed Feb 01 2023")]
    #[case("2023-02-01T23:30:00+02:00", "Wed Feb 01 2023")]
    #[case("2023-02-01T00:30:00+02:00", "Tue Jan 31 2023")]
    #[case("2023-02-01T08:15:00", "Wed Feb 01 2023")]
    #[case("2023-02-01 08:15:00.250", "Wed Feb 01 2023")]
    #[case("Wed Feb 01 2023", "Wed Feb 01 2023")]
    #[case("  2023-02-01  ", "Wed Feb 01 2023")]
    fn accepted_inputs_render_in_utc(#[case] raw: &str, #[case] expected: &str) {
        let parsed = parse_calendar_date(raw).expect("date should parse");
        assert_eq!(format_calendar_date(&parsed), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("yesterday")]
    #[case("2023-02-30")]
    #[case("2023-13-01")]
    #[case("1675209600")]
    fn rejected_inputs_yield_none(#[case] raw: &str) {
        assert!(parse_calendar_date(raw).is_none());
    }

    #[rstest]
    fn bare_dates_are_midnight_utc() {
        let parsed = parse_calendar_date("2006-01-02").expect("valid date");
        let expected = Utc.with_ymd_and_hms(2006, 1, 2, 0, 0, 0).single();
        assert_eq!(Some(parsed), expected);
    }

    #[rstest]
    fn day_is_zero_padded() {
        let date = Utc
            .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
            .single()
            .expect("valid instant");
        assert_eq!(format_calendar_date(&date), "Tue Mar 05 2024");
    }
}

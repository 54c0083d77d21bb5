//! Timestamps for tests that compare formatted times.
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Take the current local time shifted by `offset` and format it with the `strftime`-style
/// `format`. Returns the string together with the time it denotes, so parsing the string with the
/// same format yields exactly the returned time. Anything finer than the format's precision is cut
/// off:
///
/// ```
/// use chrono::{Duration, NaiveDateTime};
///
/// let format = "%Y-%m-%d %H:%M:%S";
/// let (formatted, time) = testgen::time::build_time(format, Duration::minutes(-30));
/// let parsed = NaiveDateTime::parse_from_str(&formatted, format).unwrap();
/// assert_eq!(parsed, time.naive_local());
/// ```
///
/// A format with a date but no time of day denotes midnight of that date. If the string does not
/// denote a single instant (a format without a date, or a local time skipped by a DST change), the
/// shifted time is returned unchanged.
///
/// Panics if `format` contains an invalid specifier.
pub fn build_time(format: &str, offset: Duration) -> (String, DateTime<Local>) {
    let time = Local::now() + offset;
    let formatted = time.format(format).to_string();
    let parsed = parse(&formatted, format, &time).unwrap_or(time);
    (formatted, parsed)
}

/// Parse `formatted` back into a local time. `hint` picks between the two candidates of a local
/// time that is repeated by a DST change.
fn parse(formatted: &str, format: &str, hint: &DateTime<Local>) -> Option<DateTime<Local>> {
    if let Ok(time) = DateTime::parse_from_str(formatted, format) {
        return Some(time.with_timezone(&Local));
    }
    let naive = NaiveDateTime::parse_from_str(formatted, format)
        .ok()
        .or_else(|| NaiveDate::parse_from_str(formatted, format).ok()?.and_hms_opt(0, 0, 0))?;
    let candidates = Local.from_local_datetime(&naive);
    match (candidates.earliest(), candidates.latest()) {
        (Some(_), Some(latest)) if latest.offset() == hint.offset() => Some(latest),
        (earliest, _) => earliest,
    }
}

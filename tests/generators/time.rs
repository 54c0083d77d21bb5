use crate::fixed_generator;
use chrono::{DateTime, Duration as TimeDelta, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::time::Duration;
use test_log::test;
use testgen::time::build_time;

#[test]
fn times_within_offset() {
    let gen = fixed_generator();
    let now = Local::now();
    for _ in 0..10_000 {
        let max_offset = gen.duration(Duration::from_secs(24 * 3600), Duration::from_secs(30 * 24 * 3600));
        let time = gen.time(&Local, &now, max_offset);
        let latest = now + TimeDelta::from_std(max_offset).unwrap();
        assert!(time >= now, "{} before {}", time, now);
        assert!(time <= latest, "{} after {}", time, latest);
    }
}

#[test]
fn times_are_localized() {
    let gen = fixed_generator();
    let berlin = FixedOffset::east_opt(3600).unwrap();
    let base = Utc.with_ymd_and_hms(2024, 2, 29, 23, 30, 0).unwrap();
    let time = gen.time(&berlin, &base, Duration::from_secs(600));
    assert_eq!(time.offset(), &berlin);
    let time = time.with_timezone(&Utc);
    assert!(time >= base && time <= base + TimeDelta::minutes(10));
}

#[test]
fn zero_offset_is_base() {
    let gen = fixed_generator();
    let base = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(gen.time(&Utc, &base, Duration::ZERO), base);
}

#[test]
#[should_panic(expected = "overflows the representable range")]
fn time_beyond_range_panics() {
    let gen = fixed_generator();
    let base = DateTime::<Utc>::MAX_UTC;
    for _ in 0..100 {
        gen.time(&Utc, &base, Duration::from_secs(3600));
    }
}

#[test]
fn sleeps_one_of() {
    let gen = fixed_generator();
    let sleeps = [1, 2, 3, 4, 5].map(Duration::from_millis);
    for _ in 0..50 {
        let sleep = gen.sleep_one_of(&sleeps);
        assert!(sleeps.contains(&sleep));
    }
}

#[test]
fn build_time_parses_back() {
    let formats = [
        "%a %b %d %H:%M:%S %Y",
        "%Y-%m-%d %H:%M:%S",
        "%d.%m.%Y %H:%M",
        "%Y-%m-%d %H:%M:%S%.3f",
    ];
    let offsets = [TimeDelta::zero(), TimeDelta::minutes(-30), TimeDelta::hours(1)];

    for format in formats {
        for offset in offsets {
            let (formatted, time) = build_time(format, offset);
            let after = Local::now() + offset;
            let parsed = NaiveDateTime::parse_from_str(&formatted, format).unwrap();
            assert_eq!(parsed, time.naive_local(), "{:?}", format);
            assert_eq!(time.format(format).to_string(), formatted);
            assert!(time <= after && after - time < TimeDelta::minutes(2));
        }
    }
}

#[test]
fn build_time_with_offset_parses_back() {
    let formats = ["%Y-%m-%dT%H:%M:%S%:z", "%a, %d %b %Y %H:%M:%S %z", "%d %b %y %H:%M %z"];

    for format in formats {
        let (formatted, time) = build_time(format, TimeDelta::hours(-2));
        let parsed = DateTime::parse_from_str(&formatted, format).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), time.with_timezone(&Utc), "{:?}", format);
    }
}

#[test]
fn build_time_of_date_is_midnight() {
    let (formatted, time) = build_time("%Y-%m-%d", TimeDelta::days(3));
    assert_eq!(NaiveDate::parse_from_str(&formatted, "%Y-%m-%d").unwrap(), time.date_naive());
    assert_eq!(time.time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
}

#[test]
fn build_time_without_date_is_unparsed() {
    let before = Local::now();
    let (formatted, time) = build_time("%l:%M%p", TimeDelta::zero());
    let after = Local::now();
    assert_eq!(time.format("%l:%M%p").to_string(), formatted);
    assert!(before <= time && time <= after);
}

#[test]
fn build_time_roundtrips_through_rfc3339() {
    let (formatted, time) = build_time("%+", TimeDelta::hours(-2));
    let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();
    assert_eq!(parsed.with_timezone(&Utc), time.with_timezone(&Utc));
}

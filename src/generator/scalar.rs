use crate::generator::Generator;
use chrono::{DateTime, TimeZone};
use std::time::Duration;

impl Generator {
    /// A byte in `[lo, hi]`. Inverted bounds are swapped.
    pub fn byte(&self, lo: u8, hi: u8) -> u8 {
        self.source.int_n(lo, hi)
    }

    /// `count` independent bytes in `[lo, hi]`.
    pub fn bytes(&self, lo: u8, hi: u8, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.byte(lo, hi)).collect()
    }

    /// An integer in `[lo, hi]`. Inverted bounds are swapped.
    pub fn int(&self, lo: i64, hi: i64) -> i64 {
        self.source.int_n(lo, hi)
    }

    /// `count` independent integers in `[lo, hi]`.
    pub fn ints(&self, lo: i64, hi: i64, count: usize) -> Vec<i64> {
        (0..count).map(|_| self.int(lo, hi)).collect()
    }

    /// A percentage in `[0, 100]`.
    pub fn percent(&self) -> i64 {
        self.int(0, 100)
    }

    /// `true` with a probability of `percent` in a hundred. `percent` is clamped to `[0, 100]`, so
    /// `0` never and `100` always returns `true`. Exactly one draw is consumed either way.
    pub fn flip_coin(&self, percent: i64) -> bool {
        let percent = percent.clamp(0, 100);
        self.int(0, 99) < percent
    }

    /// A duration in `[lo, hi]` with nanosecond resolution. Inverted bounds are swapped, and bounds
    /// beyond `u64::MAX` nanoseconds (about 584 years) saturate.
    pub fn duration(&self, lo: Duration, hi: Duration) -> Duration {
        Duration::from_nanos(self.source.int_n(saturating_nanos(lo), saturating_nanos(hi)))
    }

    /// A time in `[base, base + max_offset]`, expressed in `location`.
    ///
    /// Panics if `base + max_offset` is beyond the range chrono can represent.
    pub fn time<Tz, B>(&self, location: &Tz, base: &DateTime<B>, max_offset: Duration) -> DateTime<Tz>
    where
        Tz: TimeZone,
        B: TimeZone,
    {
        let offset = self.duration(Duration::ZERO, max_offset);
        chrono::Duration::from_std(offset)
            .ok()
            .and_then(|offset| base.with_timezone(location).checked_add_signed(offset))
            .unwrap_or_else(|| panic!("time offset {:?} overflows the representable range", offset))
    }

    /// Sixteen random bytes. These are not an RFC 4122 UUID: no version or variant bits are set.
    pub fn uuid(&self) -> [u8; 16] {
        let mut uuid = [0u8; 16];
        for byte in uuid.iter_mut() {
            *byte = self.byte(u8::MIN, u8::MAX);
        }
        uuid
    }

    /// Pick one of `durations`, sleep the current thread for it, and return it.
    ///
    /// Panics if `durations` is empty.
    pub fn sleep_one_of(&self, durations: &[Duration]) -> Duration {
        let sleep = self.one_duration_of(durations);
        std::thread::sleep(sleep);
        sleep
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

use crate::source::DataSource;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A `RandomDataSource` generates data from an RNG seeded by the clock, and moves on to a fresh
/// clock seed every time it is reset.
#[derive(Debug)]
pub struct RandomDataSource {
    rng: Pcg64Mcg,
    seed: u64,
}

impl RandomDataSource {
    /// Construct a data source with a seed taken from the current time.
    pub fn new() -> Self {
        Self::new_from_seed(time_seed())
    }

    fn new_from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for RandomDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for RandomDataSource {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reset(&mut self) -> u64 {
        *self = Self::new_from_seed(time_seed());
        self.seed
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

// Sources built within the same clock tick still get distinct seeds.
static CONSTRUCTED: AtomicU64 = AtomicU64::new(0);

fn time_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    let count = CONSTRUCTED.fetch_add(1, Ordering::Relaxed);
    nanos ^ count.wrapping_mul(0x9e37_79b9_7f4a_7c15)
}

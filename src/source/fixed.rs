use crate::source::DataSource;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A `FixedDataSource` generates the same stream of data, determined by its seed, on every run and
/// after every reset.
#[derive(Debug)]
pub struct FixedDataSource {
    seed: u64,
    rng: Pcg64Mcg,
}

impl FixedDataSource {
    /// Construct a data source that always starts from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }
}

impl DataSource for FixedDataSource {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reset(&mut self) -> u64 {
        self.rng = Pcg64Mcg::seed_from_u64(self.seed);
        self.seed
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

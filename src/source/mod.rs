//! The random substrate every generator draws from.
//!
//! A [`Source`] is a cheap, cloneable handle to a single stream of pseudo-random data. All clones
//! share the same stream, and every draw happens under a lock, so a `Source` can be used from many
//! threads at once without tearing its state.
use crate::Config;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_core::impls::fill_bytes_via_next;
use rand_core::RngCore;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

pub(crate) mod fixed;
pub(crate) mod random;
pub use fixed::FixedDataSource;
pub use random::RandomDataSource;

/// The seed used by [`Source::fixed`].
pub const FIXED_SEED: u64 = 0x7465_7374_6765_6e00;

/// A `DataSource` is an oracle for the raw 64-bit values that generators are built from.
pub trait DataSource: Debug + Send {
    /// The seed the current stream started from.
    fn seed(&self) -> u64;

    /// Restart the stream and return the seed it now starts from.
    fn reset(&mut self) -> u64;

    /// Produce the next value of the stream.
    fn next_u64(&mut self) -> u64;
}

/// A shared, thread-safe handle to a [`DataSource`].
///
/// Two `Source`s constructed from the same seed produce bit-identical sequences of draws for
/// identical sequences of calls. Draws from concurrent callers are serialized; which caller
/// observes which position of the stream is then unspecified.
#[derive(Clone, Debug)]
pub struct Source {
    inner: Arc<Mutex<Box<dyn DataSource>>>,
}

impl Source {
    /// Wrap an arbitrary data source.
    pub fn new<D: DataSource + 'static>(data_source: D) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(data_source))),
        }
    }

    /// A source that yields the same sequence on every run.
    pub fn fixed() -> Self {
        Self::from_seed(FIXED_SEED)
    }

    /// A source that yields the sequence determined by `seed` on every run.
    pub fn from_seed(seed: u64) -> Self {
        debug!(seed, "seeded fixed source");
        Self::new(FixedDataSource::new(seed))
    }

    /// A source seeded from the current time. Use [`Source::seed`] to find out which sequence it
    /// produces, and [`Source::from_seed`] to reproduce it.
    pub fn from_time() -> Self {
        let data_source = RandomDataSource::new();
        debug!(seed = data_source.seed(), "seeded time-based source");
        Self::new(data_source)
    }

    /// Build a source as described by `config`.
    pub fn from_config(config: &Config) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_time(),
        }
    }

    /// The seed the current stream started from.
    pub fn seed(&self) -> u64 {
        self.lock().seed()
    }

    /// Restart the stream, returning the seed it now starts from. Fixed sources replay their
    /// sequence from the beginning; time-based sources move on to a fresh seed.
    pub fn reset(&self) -> u64 {
        let seed = self.lock().reset();
        debug!(seed, "reset source");
        seed
    }

    /// Draw uniformly from the closed interval `[lo, hi]`. Inverted bounds are swapped first.
    pub fn int_n<T>(&self, lo: T, hi: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
        let mut data_source = self.lock();
        Draws(&mut **data_source).gen_range(lo..=hi)
    }

    /// Draw the next raw value of the stream.
    pub fn next_u64(&self) -> u64 {
        self.lock().next_u64()
    }

    // A panic can only poison the lock between draws, never inside one, so the state behind a
    // poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Box<dyn DataSource>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Adapts a locked data source to `rand`'s generator traits for the duration of one draw.
struct Draws<'a, D: ?Sized>(&'a mut D);

impl<D: DataSource + ?Sized> RngCore for Draws<'_, D> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

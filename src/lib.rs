#![deny(warnings, missing_debug_implementations, missing_docs)]

//! Testgen is a library of reproducible random test data, for tests that want realistic-looking
//! inputs without giving up determinism.
//!
//! ## Generating data
//!
//! All generation goes through a [`Generator`], which is bound to a single random [`Source`]:
//!
//! ```
//! use testgen::{Generator, Source};
//!
//! let gen = Generator::new(Source::fixed());
//!
//! let port = gen.int(1024, 65535);
//! assert!((1024..=65535).contains(&port));
//!
//! let (first, _middle, last) = gen.name();
//! let email = gen.email();
//! let text = gen.paragraph();
//! # let _ = (first, last, email, text);
//! ```
//!
//! Beyond scalars and selections, a generator expands *patterns*: templates in which a `^` and a
//! class tag are replaced by one random character of that class.
//!
//! ```
//! # use testgen::{Generator, Source};
//! # let gen = Generator::new(Source::fixed());
//! let serial = gen.pattern("SN-^A^A^0^0^0^0");
//! assert_eq!(serial.len(), 9);
//! assert!(serial.starts_with("SN-"));
//! ```
//!
//! See [`pattern`] for the table of classes.
//!
//! ## Reproducibility
//!
//! A generator built on [`Source::fixed`] (or [`Source::from_seed`]) produces the same values for
//! the same sequence of calls on every run. That is what most tests want: the data looks random,
//! but a failing test fails the same way every time.
//!
//! A generator built on [`Source::from_time`] explores different values on every run. The seed it
//! picked is logged at `DEBUG` level through `tracing` and is available from [`Source::seed`], so a
//! failure found this way can be replayed:
//!
//! ```
//! # use testgen::{Generator, Source};
//! let gen = Generator::new(Source::from_time());
//! let seed = gen.source().seed();
//! let first = gen.sentence();
//!
//! let replay = Generator::new(Source::from_seed(seed));
//! assert_eq!(replay.sentence(), first);
//! ```
//!
//! ## Concurrency
//!
//! `Generator` and `Source` are `Send + Sync` and cheap to clone; clones share one stream. Every
//! draw from the stream is atomic, so any number of threads can generate from the same generator
//! at once. Only single-threaded use of a fixed source is exactly reproducible, since the order in
//! which concurrent threads consume the stream is up to the OS scheduler.
//!
//! ## Misuse
//!
//! Asking for one element of an empty set, or expanding a pattern with an unknown class tag, is a
//! bug in the calling test and panics immediately. [`Generator::try_pattern`] is the non-panicking
//! variant for templates that are built at runtime.

pub mod pattern;
pub mod source;
pub mod time;

mod corpus;
mod generator;

pub use generator::names::to_upper_first;
pub use generator::words::{MAX_WORD_LEN, MIN_WORD_LEN};
pub use generator::Generator;
pub use pattern::PatternError;
pub use source::Source;

/// Configuration parameters for a [`Generator`]
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct Config {
    /// Seed of the random source. `None` seeds the source from the current time.
    pub seed: Option<u64>,
}

impl Config {
    /// Create a new default configuration, which uses a time-based seed
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Create a configuration that uses the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

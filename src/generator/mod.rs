//! The [`Generator`] and its families of generation methods.
use crate::source::Source;
use crate::Config;

mod internet;
pub(crate) mod names;
mod scalar;
mod selection;
mod text;
pub(crate) mod words;

/// A `Generator` produces random test data from a [`Source`].
///
/// It holds nothing but its source: no history, no caches, no counters. All methods take `&self`,
/// so a single generator can be shared between threads, and every value it produces depends only
/// on the state of the source and the arguments of the call.
#[derive(Clone, Debug)]
pub struct Generator {
    source: Source,
}

impl Generator {
    /// Construct a generator drawing from `source`.
    pub fn new(source: Source) -> Self {
        Self { source }
    }

    /// Construct a generator with a source built from `config`.
    pub fn from_config(config: Config) -> Self {
        Self::new(Source::from_config(&config))
    }

    /// The source this generator draws from.
    pub fn source(&self) -> &Source {
        &self.source
    }
}

impl Default for Generator {
    /// A generator with a time-based source.
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

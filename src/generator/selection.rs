use crate::generator::Generator;
use std::time::Duration;

impl Generator {
    /// One of `candidates`, chosen uniformly.
    ///
    /// Panics if `candidates` is empty.
    pub fn one_of<T: Clone>(&self, candidates: &[T]) -> T {
        self.pick("one_of", candidates).clone()
    }

    /// One of `candidates`, chosen uniformly.
    ///
    /// Panics if `candidates` is empty.
    pub fn one_byte_of(&self, candidates: &[u8]) -> u8 {
        *self.pick("one_byte_of", candidates)
    }

    /// One of the characters of `candidates`, chosen uniformly. Every `char` counts once, however
    /// many bytes it is encoded in.
    ///
    /// Panics if `candidates` is empty.
    pub fn one_rune_of(&self, candidates: &str) -> char {
        let count = candidates.chars().count();
        assert!(count > 0, "one_rune_of called with an empty string");
        let index = self.index(count);
        // `index < count`, so the iterator cannot run dry
        candidates.chars().nth(index).unwrap_or_default()
    }

    /// One of `candidates`, chosen uniformly.
    ///
    /// Panics if `candidates` is empty.
    pub fn one_int_of(&self, candidates: &[i64]) -> i64 {
        *self.pick("one_int_of", candidates)
    }

    /// One of `candidates`, chosen uniformly.
    ///
    /// Panics if `candidates` is empty.
    pub fn one_string_of<S: AsRef<str>>(&self, candidates: &[S]) -> String {
        self.pick("one_string_of", candidates).as_ref().to_owned()
    }

    /// One of `candidates`, chosen uniformly.
    ///
    /// Panics if `candidates` is empty.
    pub fn one_duration_of(&self, candidates: &[Duration]) -> Duration {
        *self.pick("one_duration_of", candidates)
    }

    /// Borrow one of `candidates`, chosen uniformly. `caller` names the public operation in the
    /// panic message for an empty slice.
    pub(crate) fn pick<'a, T>(&self, caller: &str, candidates: &'a [T]) -> &'a T {
        assert!(!candidates.is_empty(), "{} called with no candidates", caller);
        &candidates[self.index(candidates.len())]
    }

    /// An index in `[0, len)`. `len` must be positive.
    pub(crate) fn index(&self, len: usize) -> usize {
        self.source.int_n(0, len - 1)
    }
}

use crate::corpus::WORDS;
use crate::generator::Generator;
use tracing::trace;

/// The shortest word [`Generator::limited_word`] produces.
pub const MIN_WORD_LEN: usize = 1;

/// The longest word [`Generator::limited_word`] produces.
pub const MAX_WORD_LEN: usize = 14;

impl Generator {
    /// A lowercase word between [`MIN_WORD_LEN`] and [`MAX_WORD_LEN`] letters long.
    pub fn word(&self) -> String {
        self.one_string_of(WORDS)
    }

    /// A lowercase word whose length is in `[lo, hi]`. Inverted bounds are swapped, and both
    /// bounds are clamped to `[MIN_WORD_LEN, MAX_WORD_LEN]`.
    pub fn limited_word(&self, lo: usize, hi: usize) -> String {
        let lo = lo.clamp(MIN_WORD_LEN, MAX_WORD_LEN);
        let hi = hi.clamp(MIN_WORD_LEN, MAX_WORD_LEN);
        let len = self.source.int_n(lo, hi);
        let start = self.index(WORDS.len());
        WORDS
            .iter()
            .cycle()
            .skip(start)
            .take(WORDS.len())
            .find(|word| word.len() == len)
            .map(|word| word.to_string())
            .unwrap_or_else(|| self.pronounceable_word(len))
    }

    /// A word of exactly `len` letters, alternating consonants and vowels.
    fn pronounceable_word(&self, len: usize) -> String {
        trace!(len, "no vocabulary word of this length");
        let template = (0..len)
            .map(|i| if i % 2 == 0 { "^c" } else { "^v" })
            .collect::<String>();
        self.pattern(&template)
    }
}

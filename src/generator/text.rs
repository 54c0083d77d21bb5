use crate::generator::names::to_upper_first;
use crate::generator::Generator;

const MIN_SENTENCE_WORDS: i64 = 2;
const MAX_SENTENCE_WORDS: i64 = 15;
const MIN_PARAGRAPH_SENTENCES: i64 = 2;
const MAX_PARAGRAPH_SENTENCES: i64 = 10;

/// Chance, in percent, that a word of a sentence is replaced by a name.
const NAME_PERCENT: i64 = 20;

impl Generator {
    /// Between 2 and 15 lowercase words separated by single spaces, with the first letter
    /// capitalized and no terminal punctuation.
    pub fn sentence(&self) -> String {
        self.sentence_with_names::<&str>(&[])
    }

    /// Like [`Generator::sentence`], but some of the words may be replaced by one of `names`.
    /// With no names this is exactly [`Generator::sentence`].
    ///
    /// Each name fills one word slot, inserted verbatim. The 2 to 15 word bound counts slots, so a
    /// name with spaces (or a `". "`, as in `"Hans-Peter K. Smith"`) makes the sentence longer in
    /// whitespace-separated tokens, and a paragraph built from it no longer splits cleanly on
    /// `". "`.
    pub fn sentence_with_names<S: AsRef<str>>(&self, names: &[S]) -> String {
        let count = self.int(MIN_SENTENCE_WORDS, MAX_SENTENCE_WORDS);
        let words = (0..count)
            .map(|_| {
                if !names.is_empty() && self.flip_coin(NAME_PERCENT) {
                    self.one_string_of(names)
                } else {
                    self.word()
                }
            })
            .collect::<Vec<_>>();
        to_upper_first(&words.join(" "))
    }

    /// Between 2 and 10 sentences joined by `". "`.
    pub fn paragraph(&self) -> String {
        self.paragraph_with_names::<&str>(&[])
    }

    /// Like [`Generator::paragraph`], built from [`Generator::sentence_with_names`].
    pub fn paragraph_with_names<S: AsRef<str>>(&self, names: &[S]) -> String {
        let count = self.int(MIN_PARAGRAPH_SENTENCES, MAX_PARAGRAPH_SENTENCES);
        (0..count)
            .map(|_| self.sentence_with_names(names))
            .collect::<Vec<_>>()
            .join(". ")
    }
}

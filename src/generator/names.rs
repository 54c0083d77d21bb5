use crate::corpus::{FEMALE_FIRST_NAMES, LAST_NAMES, MALE_FIRST_NAMES, NEUTRAL_FIRST_NAMES};
use crate::generator::Generator;

impl Generator {
    /// A `(first, middle, last)` name. First and middle name are drawn from the same gender, or
    /// from gender-neutral names, and are never equal.
    pub fn name(&self) -> (&'static str, &'static str, &'static str) {
        if self.flip_coin(50) {
            self.male_name()
        } else {
            self.female_name()
        }
    }

    /// A `(first, middle, last)` name with male or neutral first and middle names.
    pub fn male_name(&self) -> (&'static str, &'static str, &'static str) {
        self.name_from(MALE_FIRST_NAMES)
    }

    /// A `(first, middle, last)` name with female or neutral first and middle names.
    pub fn female_name(&self) -> (&'static str, &'static str, &'static str) {
        self.name_from(FEMALE_FIRST_NAMES)
    }

    /// `count` full names, each `"First Last"` or `"First M. Last"`.
    pub fn names(&self, count: usize) -> Vec<String> {
        (0..count)
            .map(|_| {
                let (first, middle, last) = self.name();
                if self.flip_coin(50) {
                    // the corpora are ASCII, so the first byte is the initial
                    format!("{} {}. {}", first, &middle[..1], last)
                } else {
                    format!("{} {}", first, last)
                }
            })
            .collect()
    }

    fn name_from(&self, gendered: &'static [&'static str]) -> (&'static str, &'static str, &'static str) {
        let first = self.first_name(gendered);
        let mut middle = self.first_name(gendered);
        while middle == first {
            middle = self.first_name(gendered);
        }
        let last = *self.pick("name", LAST_NAMES);
        (first, middle, last)
    }

    fn first_name(&self, gendered: &'static [&'static str]) -> &'static str {
        let index = self.index(gendered.len() + NEUTRAL_FIRST_NAMES.len());
        match gendered.get(index) {
            Some(&name) => name,
            None => NEUTRAL_FIRST_NAMES[index - gendered.len()],
        }
    }
}

/// Capitalize the first letter of `word`, leaving the rest unchanged.
///
/// ```
/// assert_eq!(testgen::to_upper_first("yadda"), "Yadda");
/// assert_eq!(testgen::to_upper_first("über alles"), "Über alles");
/// assert_eq!(testgen::to_upper_first(""), "");
/// ```
pub fn to_upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Static raw material for words and names. Everything in here is read-only and needs no locking.
mod names;
mod words;

pub(crate) use names::{FEMALE_FIRST_NAMES, LAST_NAMES, MALE_FIRST_NAMES, NEUTRAL_FIRST_NAMES};
pub(crate) use words::{TOP_LEVEL_DOMAINS, URL_SCHEMES, WORDS};

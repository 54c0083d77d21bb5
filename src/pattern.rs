//! Pattern expansion.
//!
//! A pattern is a template string in which every `^` starts a two-character token. The character
//! after the `^` is a class tag, and the token is replaced by one character drawn uniformly from
//! that class. `^^` stands for a literal `^`. Everything else is copied unchanged.
//!
//! | tag | class |
//! |-----|-------|
//! | `0` | digits `0-9` |
//! | `1` | digits `1-9` |
//! | `o` | octal digits `0-7` |
//! | `h` / `H` | hex digits, lower / upper case letters |
//! | `a` / `A` | Latin letters, lower / upper case |
//! | `c` / `C` | consonants, lower / upper case |
//! | `v` / `V` | vowels, lower / upper case |
//! | `z` / `Z` | letters and digits, lower / upper case letters |
//!
//! So `"^1^0.^0^0^0,^0^0 €"` expands to something like `"42.137,05 €"`.
use crate::generator::Generator;
use std::fmt;
use tracing::trace;

const ESCAPE: char = '^';

const DIGITS: &[u8] = b"0123456789";
const NONZERO_DIGITS: &[u8] = b"123456789";
const OCTAL_DIGITS: &[u8] = b"01234567";
const LOWER_HEX: &[u8] = b"0123456789abcdef";
const UPPER_HEX: &[u8] = b"0123456789ABCDEF";
const LOWER_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";
const UPPER_CONSONANTS: &[u8] = b"BCDFGHJKLMNPQRSTVWXYZ";
const LOWER_VOWELS: &[u8] = b"aeiou";
const UPPER_VOWELS: &[u8] = b"AEIOU";
const LOWER_ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The characters a class tag stands for, or `None` if the tag is unknown.
fn class_alphabet(tag: char) -> Option<&'static [u8]> {
    let alphabet = match tag {
        '0' => DIGITS,
        '1' => NONZERO_DIGITS,
        'o' => OCTAL_DIGITS,
        'h' => LOWER_HEX,
        'H' => UPPER_HEX,
        'a' => LOWER_LETTERS,
        'A' => UPPER_LETTERS,
        'c' => LOWER_CONSONANTS,
        'C' => UPPER_CONSONANTS,
        'v' => LOWER_VOWELS,
        'V' => UPPER_VOWELS,
        'z' => LOWER_ALPHANUMERIC,
        'Z' => UPPER_ALPHANUMERIC,
        _ => return None,
    };
    Some(alphabet)
}

/// Error returned from [`Generator::try_pattern`] for a malformed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// A `^` was followed by a character that is not a class tag.
    UnknownClass {
        /// The offending tag.
        tag: char,
        /// Byte offset of the `^` in the template.
        position: usize,
    },

    /// The template ended right after a `^`.
    DanglingEscape {
        /// Byte offset of the `^` in the template.
        position: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::UnknownClass { tag, position } => {
                write!(fmt, "unknown pattern class {:?} at offset {}", tag, position)
            }
            PatternError::DanglingEscape { position } => {
                write!(fmt, "pattern ends with a lone '^' at offset {}", position)
            }
        }
    }
}

impl std::error::Error for PatternError {}

#[derive(Debug, PartialEq)]
enum Token {
    Literal(char),
    Class(&'static [u8]),
}

/// Split a template into tokens. A template is parsed completely before anything is drawn, so a
/// malformed template consumes no randomness.
fn parse(template: &str) -> Result<Vec<Token>, PatternError> {
    let mut tokens = Vec::with_capacity(template.len());
    let mut chars = template.char_indices();
    while let Some((position, c)) = chars.next() {
        if c != ESCAPE {
            tokens.push(Token::Literal(c));
            continue;
        }
        match chars.next() {
            Some((_, ESCAPE)) => tokens.push(Token::Literal(ESCAPE)),
            Some((_, tag)) => {
                let alphabet = class_alphabet(tag).ok_or(PatternError::UnknownClass { tag, position })?;
                tokens.push(Token::Class(alphabet));
            }
            None => return Err(PatternError::DanglingEscape { position }),
        }
    }
    Ok(tokens)
}

impl Generator {
    /// Expand `template`, replacing every `^` token by a random character of its class.
    ///
    /// Panics if the template contains an unknown class tag or ends with a lone `^`.
    pub fn pattern(&self, template: &str) -> String {
        self.try_pattern(template)
            .unwrap_or_else(|err| panic!("invalid pattern {:?}: {}", template, err))
    }

    /// Like [`Generator::pattern`], but returns an error for a malformed template.
    pub fn try_pattern(&self, template: &str) -> Result<String, PatternError> {
        let tokens = parse(template)?;
        trace!(template, "expanding pattern");
        let expanded: String = tokens
            .into_iter()
            .map(|token| match token {
                Token::Literal(c) => c,
                Token::Class(alphabet) => char::from(self.one_byte_of(alphabet)),
            })
            .collect();
        Ok(expanded)
    }
}

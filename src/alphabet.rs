//! Character sets used for substitution and insertion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordhoodError};

/// Lowercase ASCII letters, the alphabet used when none is configured.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// An ordered set of characters eligible for substitution and insertion.
///
/// Duplicate characters collapse to their first occurrence, so iteration
/// order is the order in which characters were first given. Serialized as a
/// string; deserialization goes through [`Alphabet::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `chars`.
    ///
    /// Returns an error if `chars` is empty.
    pub fn new(chars: &str) -> Result<Self> {
        let mut unique: Vec<char> = Vec::with_capacity(chars.len());
        for ch in chars.chars() {
            if !unique.contains(&ch) {
                unique.push(ch);
            }
        }

        if unique.is_empty() {
            return Err(WordhoodError::invalid_alphabet(
                "alphabet must contain at least one character",
            ));
        }

        Ok(Alphabet { chars: unique })
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; an alphabet cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Check that every character of `word` belongs to this alphabet.
    pub fn covers(&self, word: &str) -> bool {
        word.chars().all(|ch| self.contains(ch))
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            chars: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl FromStr for Alphabet {
    type Err = WordhoodError;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = WordhoodError;

    fn try_from(chars: String) -> Result<Self> {
        Alphabet::new(&chars)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.chars.into_iter().collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26);
        assert!(alphabet.contains('a'));
        assert!(alphabet.contains('z'));
        assert!(!alphabet.contains('A'));
        assert_eq!(alphabet.to_string(), DEFAULT_ALPHABET);
    }

    #[test]
    fn test_duplicates_collapse() {
        let alphabet = Alphabet::new("abcabc").unwrap();
        assert_eq!(alphabet.chars(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let err = Alphabet::new("").unwrap_err();
        assert!(matches!(err, WordhoodError::InvalidAlphabet(_)));
    }

    #[test]
    fn test_unicode_alphabet() {
        let alphabet: Alphabet = "äöå".parse().unwrap();
        assert_eq!(alphabet.len(), 3);
        assert!(alphabet.covers("åäö"));
        assert!(!alphabet.covers("ao"));
    }

    #[test]
    fn test_covers_empty_word() {
        assert!(Alphabet::default().covers(""));
    }

    #[test]
    fn test_deserialize_validates() {
        let alphabet: Alphabet = serde_json::from_str("\"abca\"").unwrap();
        assert_eq!(alphabet.chars(), &['a', 'b', 'c']);

        let err = serde_json::from_str::<Alphabet>("\"\"").unwrap_err();
        assert!(err.to_string().contains("at least one character"));
    }

    #[test]
    fn test_serialize_as_string() {
        let alphabet = Alphabet::new("xyz").unwrap();
        assert_eq!(serde_json::to_string(&alphabet).unwrap(), "\"xyz\"");
    }
}

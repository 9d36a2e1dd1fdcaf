//! Single-character edit operations.
//!
//! Each operation class yields its candidates lazily. Candidates are not
//! deduplicated here; repeated characters in the source word produce
//! coinciding candidates that collapse once they are inserted into a set.

use std::iter;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;

/// The three classes of single-character edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOperation {
    Deletion,
    Substitution,
    Insertion,
}

impl EditOperation {
    pub const ALL: [EditOperation; 3] = [
        EditOperation::Deletion,
        EditOperation::Substitution,
        EditOperation::Insertion,
    ];

    /// Number of candidates this operation produces for a word of
    /// `word_len` characters, before deduplication.
    ///
    /// Substitution assumes every character of the word is in the alphabet;
    /// a character outside it has `alphabet_len` replacements instead of
    /// `alphabet_len - 1`.
    pub fn candidate_count(self, word_len: usize, alphabet_len: usize) -> usize {
        match self {
            EditOperation::Deletion => word_len,
            EditOperation::Substitution => word_len * alphabet_len.saturating_sub(1),
            EditOperation::Insertion => (word_len + 1) * alphabet_len,
        }
    }
}

/// Remove the character at each index.
pub fn deletions(chars: &[char]) -> impl Iterator<Item = String> + '_ {
    (0..chars.len()).map(move |i| chars[..i].iter().chain(&chars[i + 1..]).collect())
}

/// Replace the character at each index with every alphabet character that
/// differs from it.
pub fn substitutions<'a>(
    chars: &'a [char],
    alphabet: &'a Alphabet,
) -> impl Iterator<Item = String> + 'a {
    (0..chars.len()).flat_map(move |i| {
        alphabet
            .iter()
            .filter(move |&ch| ch != chars[i])
            .map(move |ch| splice(chars, i, i + 1, ch))
    })
}

/// Insert every alphabet character at each position `0..=len`.
///
/// Inserting a character next to an equal one is allowed, so doubled letters
/// are produced once per adjacent position and collapse later.
pub fn insertions<'a>(
    chars: &'a [char],
    alphabet: &'a Alphabet,
) -> impl Iterator<Item = String> + 'a {
    (0..=chars.len()).flat_map(move |i| alphabet.iter().map(move |ch| splice(chars, i, i, ch)))
}

/// Every deletion, substitution and insertion of `chars`, in that order.
pub fn single_edits<'a>(
    chars: &'a [char],
    alphabet: &'a Alphabet,
) -> impl Iterator<Item = String> + 'a {
    deletions(chars)
        .chain(substitutions(chars, alphabet))
        .chain(insertions(chars, alphabet))
}

/// Build a word from `chars` with `chars[start..end]` replaced by `ch`.
fn splice(chars: &[char], start: usize, end: usize, ch: char) -> String {
    let mut word = String::with_capacity(chars.len() + 1);
    word.extend(
        chars[..start]
            .iter()
            .copied()
            .chain(iter::once(ch))
            .chain(chars[end..].iter().copied()),
    );
    word
}

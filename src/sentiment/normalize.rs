//! Dialogue normalization for lexicon lookup.
//!
//! Text is lowercased, then every punctuation character is deleted outright
//! (not replaced by a separator, so "don't" becomes "dont"), then split on
//! whitespace.

use std::collections::BTreeSet;

/// The ASCII punctuation deleted by default. Backslash is not in the set.
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[]^_`{}|~";

/// Characters removed from dialogue before tokenizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Punctuation {
    chars: BTreeSet<char>,
}

impl Punctuation {
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Punctuation {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION)
    }
}

/// Lowercased dialogue with punctuation removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized(String);

impl Normalized {
    /// Whitespace-delimited tokens, produced lazily.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    pub fn as_str(&self) -> &str {
        self.0.trim()
    }
}

pub fn normalize(text: &str, punctuation: &Punctuation) -> Normalized {
    Normalized(
        text.to_lowercase()
            .chars()
            .filter(|c| !punctuation.contains(*c))
            .collect(),
    )
}

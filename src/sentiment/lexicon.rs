use crate::core::Result;
use std::collections::HashSet;
use std::path::Path;

/// A flat set of words, used for membership tests only.
///
/// Words are stored as given. Dialogue is lowercased before lookup, so a
/// lexicon is expected to hold lowercase entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// One word per line. Surrounding whitespace is dropped, blank lines skipped.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .collect()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let lexicon = Self::parse(&crate::io::read_file(path)?);
        log::debug!("Loaded {} words from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

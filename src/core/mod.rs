pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};

/// Field names of the script layout, in header order.
pub const LINE_NUMBER_FIELD: &str = "line_number";
pub const CHARACTER_FIELD: &str = "character";
pub const DIALOGUE_FIELD: &str = "dialogue";

/// One line of dialogue as it appears in the script file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineRecord {
    pub line_number: i64,
    pub character: String,
    pub dialogue: String,
}

impl LineRecord {
    pub fn new(line_number: i64, character: impl Into<String>, dialogue: impl Into<String>) -> Self {
        Self {
            line_number,
            character: character.into(),
            dialogue: dialogue.into(),
        }
    }
}

/// A line record together with the sentiment assigned to it by the scorer.
///
/// The only way to obtain one is through scoring, so the sentiment is set
/// exactly once and never recomputed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredLine {
    #[serde(flatten)]
    pub record: LineRecord,
    pub sentiment: i64,
}

impl ScoredLine {
    pub(crate) fn new(record: LineRecord, sentiment: i64) -> Self {
        Self { record, sentiment }
    }

    pub fn character(&self) -> &str {
        &self.record.character
    }

    pub fn dialogue(&self) -> &str {
        &self.record.dialogue
    }

    pub fn line_number(&self) -> i64 {
        self.record.line_number
    }

    pub fn polarity(&self) -> Option<Polarity> {
        Polarity::of(self.sentiment)
    }
}

/// Ordered script lines, in order of appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<LineRecord>,
}

impl Script {
    pub fn new(lines: Vec<LineRecord>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<LineRecord> {
        self.lines
    }
}

impl FromIterator<LineRecord> for Script {
    fn from_iter<I: IntoIterator<Item = LineRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A script whose every line carries a sentiment score. Order is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoredScript {
    lines: Vec<ScoredLine>,
}

impl ScoredScript {
    pub(crate) fn new(lines: Vec<ScoredLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[ScoredLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sentiment values in script order.
    pub fn sentiments(&self) -> Vec<i64> {
        self.lines.iter().map(|line| line.sentiment).collect()
    }
}

impl<'a> IntoIterator for &'a ScoredScript {
    type Item = &'a ScoredLine;
    type IntoIter = std::slice::Iter<'a, ScoredLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Direction of a sentiment score. Zero has no polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn of(score: i64) -> Option<Self> {
        match score {
            s if s > 0 => Some(Self::Positive),
            s if s < 0 => Some(Self::Negative),
            _ => None,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

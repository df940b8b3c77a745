//! Per-character grouping of sentiment scores and the statistics built on it.

use super::{average, round_to};
use crate::core::{Error, Polarity, Result, ScoredScript};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Character name to that character's scores, in script order.
///
/// Keys keep first-seen order. Every script line contributes exactly one
/// score to exactly one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterScoreIndex {
    entries: Vec<(String, Vec<i64>)>,
    positions: HashMap<String, usize>,
}

impl CharacterScoreIndex {
    pub fn build(script: &ScoredScript) -> Self {
        let index = script.iter().fold(Self::default(), |mut index, line| {
            index.push(line.character(), line.sentiment);
            index
        });
        debug!(
            characters = index.len(),
            lines = index.total_scores(),
            "Character score index built"
        );
        index
    }

    fn push(&mut self, character: &str, score: i64) {
        match self.positions.get(character) {
            Some(&pos) => self.entries[pos].1.push(score),
            None => {
                self.positions
                    .insert(character.to_string(), self.entries.len());
                self.entries.push((character.to_string(), vec![score]));
            }
        }
    }

    /// Scores for one character. Unknown names are an error.
    pub fn scores(&self, character: &str) -> Result<&[i64]> {
        self.positions
            .get(character)
            .map(|&pos| self.entries[pos].1.as_slice())
            .ok_or_else(|| Error::UnknownCharacter(character.to_string()))
    }

    pub fn contains(&self, character: &str) -> bool {
        self.positions.contains_key(character)
    }

    /// Character names in first-seen order.
    pub fn characters(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i64])> {
        self.entries
            .iter()
            .map(|(name, scores)| (name.as_str(), scores.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of scores across all characters.
    pub fn total_scores(&self) -> usize {
        self.entries.iter().map(|(_, scores)| scores.len()).sum()
    }
}

impl Serialize for CharacterScoreIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, scores) in &self.entries {
            map.serialize_entry(name, scores)?;
        }
        map.end()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CharacterStats {
    pub character: String,
    pub min: i64,
    /// Mean score rounded to 3 decimal places.
    pub avg: f64,
    pub max: i64,
}

impl CharacterStats {
    pub fn from_scores(character: impl Into<String>, scores: &[i64]) -> Result<Self> {
        let character = character.into();
        let (Some(&min), Some(&max)) = (scores.iter().min(), scores.iter().max()) else {
            return Err(Error::EmptyScores(character));
        };
        let values: Vec<f64> = scores.iter().map(|&s| s as f64).collect();

        Ok(Self {
            character,
            min,
            avg: round_to(average(&values), 3),
            max,
        })
    }
}

pub fn stats(index: &CharacterScoreIndex, character: &str) -> Result<CharacterStats> {
    CharacterStats::from_scores(character, index.scores(character)?)
}

/// How many of a character's lines scored above and below zero.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PolarityCounts {
    pub character: String,
    pub positive_lines: usize,
    pub negative_lines: usize,
}

impl PolarityCounts {
    pub fn from_scores(character: impl Into<String>, scores: &[i64]) -> Self {
        let (positive_lines, negative_lines) =
            scores
                .iter()
                .fold((0, 0), |(pos, neg), &score| match Polarity::of(score) {
                    Some(Polarity::Positive) => (pos + 1, neg),
                    Some(Polarity::Negative) => (pos, neg + 1),
                    None => (pos, neg),
                });

        Self {
            character: character.into(),
            positive_lines,
            negative_lines,
        }
    }

    pub fn total(&self) -> usize {
        self.positive_lines + self.negative_lines
    }
}

/// Polarity counts for characters with more than `min_lines` non-zero lines,
/// in first-seen order.
pub fn polarity_counts(index: &CharacterScoreIndex, min_lines: usize) -> Vec<PolarityCounts> {
    index
        .iter()
        .map(|(character, scores)| PolarityCounts::from_scores(character, scores))
        .filter(|counts| counts.total() > min_lines)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ScoreBucket {
    pub score: i64,
    pub count: usize,
}

/// Occurrences of each distinct score, ascending by score.
pub fn score_distribution(scores: &[i64]) -> Vec<ScoreBucket> {
    scores
        .iter()
        .fold(BTreeMap::new(), |mut acc, &score| {
            *acc.entry(score).or_insert(0) += 1;
            acc
        })
        .into_iter()
        .map(|(score, count)| ScoreBucket { score, count })
        .collect()
}

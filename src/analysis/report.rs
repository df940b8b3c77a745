//! Assembly of every derived view handed to the report writers.

use super::aggregate::{
    polarity_counts, score_distribution, stats, CharacterScoreIndex, CharacterStats,
    PolarityCounts, ScoreBucket,
};
use super::extremes::{most_negative, most_positive};
use super::trend::{Annotation, Trend};
use crate::core::{Result, ScoredLine, ScoredScript};
use serde::Serialize;
use tracing::{debug, info_span};

/// Which views to build and how.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportOptions {
    /// Characters listed in the stats table, in display order.
    pub main_characters: Vec<String>,
    /// Pair of characters whose score distributions are compared.
    pub compare: Option<(String, String)>,
    /// Characters need strictly more non-zero lines than this to appear in
    /// the polarity view.
    pub min_polar_lines: usize,
    pub window_size: usize,
    pub annotations: Vec<Annotation>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_lines: usize,
    pub characters: usize,
    pub positive_lines: usize,
    pub negative_lines: usize,
    pub neutral_lines: usize,
}

impl ReportSummary {
    fn from_script(script: &ScoredScript, index: &CharacterScoreIndex) -> Self {
        let positive_lines = script.iter().filter(|l| l.sentiment > 0).count();
        let negative_lines = script.iter().filter(|l| l.sentiment < 0).count();

        Self {
            total_lines: script.len(),
            characters: index.len(),
            positive_lines,
            negative_lines,
            neutral_lines: script.len() - positive_lines - negative_lines,
        }
    }
}

/// One side of a character comparison.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CharacterComparison {
    pub character: String,
    pub scores: Vec<i64>,
    pub distribution: Vec<ScoreBucket>,
}

impl CharacterComparison {
    fn build(index: &CharacterScoreIndex, character: &str) -> Result<Self> {
        let scores = index.scores(character)?.to_vec();
        Ok(Self {
            character: character.to_string(),
            distribution: score_distribution(&scores),
            scores,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SentimentReport {
    pub summary: ReportSummary,
    pub most_positive: Option<ScoredLine>,
    pub most_negative: Option<ScoredLine>,
    pub character_stats: Vec<CharacterStats>,
    pub comparison: Vec<CharacterComparison>,
    pub trend: Trend,
    pub polarity: Vec<PolarityCounts>,
}

impl SentimentReport {
    /// Build every view from a scored script.
    ///
    /// Naming a character that never speaks, in either the stats list or the
    /// comparison pair, fails the whole report.
    pub fn build(script: &ScoredScript, options: &ReportOptions) -> Result<Self> {
        let _span = info_span!("aggregation", lines = script.len()).entered();

        let index = CharacterScoreIndex::build(script);

        let character_stats = options
            .main_characters
            .iter()
            .map(|character| stats(&index, character))
            .collect::<Result<Vec<_>>>()?;

        let comparison = match &options.compare {
            Some((first, second)) => vec![
                CharacterComparison::build(&index, first)?,
                CharacterComparison::build(&index, second)?,
            ],
            None => Vec::new(),
        };

        let trend = {
            let _span = info_span!("trend", window_size = options.window_size).entered();
            Trend::compute(&script.sentiments(), options.window_size, &options.annotations)
        };

        let polarity = polarity_counts(&index, options.min_polar_lines);
        debug!(
            stats = character_stats.len(),
            polar_characters = polarity.len(),
            "Report assembled"
        );

        Ok(Self {
            summary: ReportSummary::from_script(script, &index),
            most_positive: most_positive(script).cloned(),
            most_negative: most_negative(script).cloned(),
            character_stats,
            comparison,
            trend,
            polarity,
        })
    }
}

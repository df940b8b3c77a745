use super::lexicon::Lexicon;
use super::normalize::{normalize, Punctuation};
use crate::core::{LineRecord, ScoredLine, ScoredScript, Script};
use serde::Serialize;
use tracing::{debug, info_span};

/// Lexicon hits found in one line of dialogue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub positive: i64,
    pub negative: i64,
}

impl Tally {
    pub fn score(&self) -> i64 {
        self.positive - self.negative
    }
}

/// Scores dialogue by counting lexicon hits among its normalized tokens.
///
/// A token found in the positive lexicon counts +1 and is not looked up in
/// the negative lexicon, so a word listed in both counts only as positive.
#[derive(Clone, Debug)]
pub struct SentimentScorer {
    positive: Lexicon,
    negative: Lexicon,
    punctuation: Punctuation,
}

impl SentimentScorer {
    pub fn new(positive: Lexicon, negative: Lexicon, punctuation: Punctuation) -> Self {
        Self {
            positive,
            negative,
            punctuation,
        }
    }

    /// Contribution of a single already-normalized token.
    pub fn token_weight(&self, token: &str) -> i64 {
        if self.positive.contains(token) {
            1
        } else if self.negative.contains(token) {
            -1
        } else {
            0
        }
    }

    pub fn tally(&self, dialogue: &str) -> Tally {
        normalize(dialogue, &self.punctuation)
            .tokens()
            .fold(Tally::default(), |mut tally, token| {
                match self.token_weight(token) {
                    1 => tally.positive += 1,
                    -1 => tally.negative += 1,
                    _ => {}
                }
                tally
            })
    }

    pub fn score_text(&self, dialogue: &str) -> i64 {
        self.tally(dialogue).score()
    }

    pub fn score_line(&self, record: LineRecord) -> ScoredLine {
        let sentiment = self.score_text(&record.dialogue);
        ScoredLine::new(record, sentiment)
    }

    /// Score every line, preserving script order.
    pub fn score_script(&self, script: Script) -> ScoredScript {
        let _span = info_span!("scoring", lines = script.len()).entered();

        let scored = ScoredScript::new(
            script
                .into_lines()
                .into_iter()
                .map(|record| self.score_line(record))
                .collect(),
        );

        debug!(
            positive_lines = scored.iter().filter(|l| l.sentiment > 0).count(),
            negative_lines = scored.iter().filter(|l| l.sentiment < 0).count(),
            "Scoring complete"
        );
        scored
    }
}

//! Most positive / most negative line search.
//!
//! The search starts from a baseline of 0 and only a strictly greater (or
//! strictly lesser) score replaces it. Two consequences are part of the
//! reported output and are kept as is:
//!
//! - If no line scores above 0 (or below 0 for the negative search) the
//!   result is `None`, even though some line is the true extreme.
//! - Among equal extreme scores the first line in script order wins.

use crate::core::{Polarity, ScoredLine, ScoredScript};

pub fn extremal_line(script: &ScoredScript, polarity: Polarity) -> Option<&ScoredLine> {
    let mut baseline = 0;
    let mut found = None;

    for line in script {
        let beats = match polarity {
            Polarity::Positive => line.sentiment > baseline,
            Polarity::Negative => line.sentiment < baseline,
        };
        if beats {
            baseline = line.sentiment;
            found = Some(line);
        }
    }

    found
}

pub fn most_positive(script: &ScoredScript) -> Option<&ScoredLine> {
    extremal_line(script, Polarity::Positive)
}

pub fn most_negative(script: &ScoredScript) -> Option<&ScoredLine> {
    extremal_line(script, Polarity::Negative)
}

//! Property-based tests for the scoring pipeline
//!
//! These tests verify invariants that should hold for all inputs:
//! - A line's score is its positive hits minus its negative hits
//! - Normalizing normalized text changes nothing
//! - The character score index partitions the script's scores
//! - The moving average has the same length as its input

use proptest::prelude::*;
use scriptsent::analysis::trend::window_bounds;
use scriptsent::core::LineRecord;
use scriptsent::sentiment::{normalize, Lexicon, Punctuation, SentimentScorer};
use scriptsent::{moving_average, CharacterScoreIndex, Script};

const POSITIVE: &[&str] = &["good", "hope", "brave", "love"];
const NEGATIVE: &[&str] = &["bad", "fear", "doomed", "dark"];
const NEUTRAL: &[&str] = &["the", "ship", "droid", "moon", "blast"];

fn scorer() -> SentimentScorer {
    SentimentScorer::new(
        POSITIVE.iter().copied().collect::<Lexicon>(),
        NEGATIVE.iter().copied().collect::<Lexicon>(),
        Punctuation::default(),
    )
}

/// A word drawn from either lexicon or neither, with optional decoration
fn decorated_word() -> impl Strategy<Value = (String, i64)> {
    let word = prop_oneof![
        proptest::sample::select(POSITIVE).prop_map(|w| (w, 1i64)),
        proptest::sample::select(NEGATIVE).prop_map(|w| (w, -1i64)),
        proptest::sample::select(NEUTRAL).prop_map(|w| (w, 0i64)),
    ];
    (word, any::<bool>(), proptest::sample::select(&["", "!", "...", ",", "?\""][..]))
        .prop_map(|((w, weight), upper, suffix)| {
            let w = if upper { w.to_uppercase() } else { w.to_string() };
            (format!("{w}{suffix}"), weight)
        })
}

fn character() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(&["LUKE", "LEIA", "HAN SOLO", "C3PO", "DARTH VADER"][..])
}

proptest! {
    /// Property: score == count(positive tokens) - count(negative tokens)
    #[test]
    fn prop_score_is_positive_minus_negative(
        words in prop::collection::vec(decorated_word(), 0..40)
    ) {
        let dialogue = words.iter().map(|(w, _)| w.as_str()).collect::<Vec<_>>().join(" ");
        let expected: i64 = words.iter().map(|(_, weight)| weight).sum();

        let scorer = scorer();
        prop_assert_eq!(scorer.score_text(&dialogue), expected);

        let tally = scorer.tally(&dialogue);
        prop_assert_eq!(tally.positive - tally.negative, expected);
    }

    /// Property: normalization is idempotent
    #[test]
    fn prop_normalize_is_idempotent(text in "[ -~]{0,80}") {
        let punctuation = Punctuation::default();
        let once = normalize(&text, &punctuation);
        let twice = normalize(once.as_str(), &punctuation);

        let first: Vec<&str> = once.tokens().collect();
        let second: Vec<&str> = twice.tokens().collect();
        prop_assert_eq!(first, second);
    }

    /// Property: every score lands under exactly one character
    #[test]
    fn prop_index_partitions_scores(
        lines in prop::collection::vec((character(), prop::collection::vec(decorated_word(), 0..8)), 0..60)
    ) {
        let script: Script = lines
            .iter()
            .enumerate()
            .map(|(i, (who, words))| {
                let dialogue = words.iter().map(|(w, _)| w.as_str()).collect::<Vec<_>>().join(" ");
                LineRecord::new(i as i64 + 1, *who, dialogue)
            })
            .collect();
        let scored = scorer().score_script(script);
        let index = CharacterScoreIndex::build(&scored);

        prop_assert_eq!(index.total_scores(), scored.len());

        let mut from_index: Vec<i64> = index.iter().flat_map(|(_, s)| s.iter().copied()).collect();
        let mut from_script = scored.sentiments();
        from_index.sort_unstable();
        from_script.sort_unstable();
        prop_assert_eq!(from_index, from_script);

        for (name, scores) in index.iter() {
            let expected: Vec<i64> = scored
                .iter()
                .filter(|l| l.character() == name)
                .map(|l| l.sentiment)
                .collect();
            prop_assert_eq!(scores.to_vec(), expected);
        }
    }

    /// Property: the moving average preserves length and stays within range
    #[test]
    fn prop_moving_average_length(
        values in prop::collection::vec(-10i64..10, 0..200),
        window in 1usize..50
    ) {
        let raw: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        let smoothed = moving_average(&raw, window);
        prop_assert_eq!(smoothed.len(), raw.len());

        for (i, value) in smoothed.iter().enumerate() {
            let bounds = window_bounds(raw.len(), i, window);
            prop_assert!(bounds.contains(&i));
            let slice = &raw[bounds];
            let min = slice.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = slice.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(*value >= min - 1e-9 && *value <= max + 1e-9);
        }
    }
}

#[test]
fn test_single_value_moving_average() {
    assert_eq!(moving_average(&[5.0], 3), vec![5.0]);
}

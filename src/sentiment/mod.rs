//! Lexicon-based sentiment scoring of dialogue lines.

pub mod lexicon;
pub mod normalize;
pub mod scorer;

pub use lexicon::Lexicon;
pub use normalize::{normalize, Normalized, Punctuation, DEFAULT_PUNCTUATION};
pub use scorer::{SentimentScorer, Tally};

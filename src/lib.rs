// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod output;
pub mod pipeline;
pub mod sentiment;

// Re-export commonly used types
pub use crate::core::{
    Error, LineRecord, Polarity, Result, ScoredLine, ScoredScript, Script,
};

pub use crate::sentiment::{normalize, Lexicon, Punctuation, SentimentScorer, Tally};

pub use crate::analysis::{
    extremal_line, moving_average, most_negative, most_positive, polarity_counts, stats,
    CharacterScoreIndex, CharacterStats, PolarityCounts, SentimentReport, Trend,
};

pub use crate::config::{AnalysisSettings, ScriptsentConfig};

pub use crate::io::{read_script, read_table, CastTable, FieldCast, FieldValue, Record};

pub use crate::output::{create_writer, OutputFormat, OutputWriter};

use crate::analysis::Annotation;
use crate::sentiment::DEFAULT_PUNCTUATION;
use serde::{Deserialize, Serialize};

/// Script file layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Single character separating fields in the script file
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

pub fn default_delimiter() -> char {
    '|'
}

/// Text normalization before lexicon lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Characters deleted from dialogue before tokenizing
    #[serde(default = "default_punctuation")]
    pub punctuation: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            punctuation: default_punctuation(),
        }
    }
}

pub fn default_punctuation() -> String {
    DEFAULT_PUNCTUATION.to_string()
}

/// Moving-average story arc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Narrative markers placed on the trend line
    #[serde(default = "default_annotations")]
    pub annotations: Vec<Annotation>,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            annotations: default_annotations(),
        }
    }
}

pub fn default_window_size() -> usize {
    20
}

pub fn default_annotations() -> Vec<Annotation> {
    vec![
        Annotation::new(289, "Tarkin's Conference"),
        Annotation::new(835, "Rebels Attack"),
    ]
}

/// Which characters the report covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Characters in the min/avg/max table, in display order
    #[serde(default = "default_main_characters")]
    pub main_characters: Vec<String>,

    /// Two characters whose score distributions are compared
    #[serde(default = "default_compare")]
    pub compare: Option<[String; 2]>,

    /// Minimum number of non-zero lines (exclusive) for the polarity view
    #[serde(default = "default_min_polar_lines")]
    pub min_polar_lines: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            main_characters: default_main_characters(),
            compare: default_compare(),
            min_polar_lines: default_min_polar_lines(),
        }
    }
}

pub fn default_main_characters() -> Vec<String> {
    ["DARTH VADER", "LEIA", "C3PO", "LUKE", "OBIWAN", "HAN SOLO"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_compare() -> Option<[String; 2]> {
    Some(["LEIA".to_string(), "LUKE".to_string()])
}

pub fn default_min_polar_lines() -> usize {
    10
}

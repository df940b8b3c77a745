//! The scoring pipeline: load inputs, score every line, derive the report.
//!
//! Inputs are read once, whole, up front. Everything after loading is a pure
//! transformation of in-memory values.

use crate::analysis::report::ReportOptions;
use crate::analysis::SentimentReport;
use crate::config::AnalysisSettings;
use crate::core::{Result, ScoredScript, Script};
use crate::io::read_script;
use crate::sentiment::{Lexicon, SentimentScorer};
use std::path::Path;
use tracing::{info, info_span};

/// Files one analysis run reads.
#[derive(Debug, Clone, Copy)]
pub struct InputPaths<'a> {
    pub script: &'a Path,
    pub positive: &'a Path,
    pub negative: &'a Path,
}

/// Parsed inputs, ready for scoring.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub script: Script,
    pub positive: Lexicon,
    pub negative: Lexicon,
}

pub fn load_inputs(paths: InputPaths<'_>, delimiter: char) -> Result<Inputs> {
    let _span = info_span!("load_inputs").entered();

    let script = read_script(paths.script, delimiter)?;
    let positive = Lexicon::load(paths.positive)?;
    let negative = Lexicon::load(paths.negative)?;
    info!(
        lines = script.len(),
        positive_words = positive.len(),
        negative_words = negative.len(),
        "Inputs loaded"
    );

    Ok(Inputs {
        script,
        positive,
        negative,
    })
}

/// Score a loaded script with the configured punctuation set.
pub fn score(inputs: Inputs, settings: &AnalysisSettings) -> ScoredScript {
    let scorer = SentimentScorer::new(
        inputs.positive,
        inputs.negative,
        settings.punctuation.clone(),
    );
    scorer.score_script(inputs.script)
}

pub fn build_report(script: &ScoredScript, options: &ReportOptions) -> Result<SentimentReport> {
    SentimentReport::build(script, options)
}

/// Run the whole pipeline over files on disk.
pub fn analyze_files(paths: InputPaths<'_>, settings: &AnalysisSettings) -> Result<SentimentReport> {
    let inputs = load_inputs(paths, settings.delimiter)?;
    let scored = score(inputs, settings);
    let report = build_report(&scored, &settings.report)?;
    info!(
        lines = report.summary.total_lines,
        characters = report.summary.characters,
        "Analysis complete"
    );
    Ok(report)
}

//! Report writers.
//!
//! Charts are not drawn; each writer lays out the numbers a chart would be
//! built from.

pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::analysis::SentimentReport;
use crate::formatting::FormattingConfig;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &SentimentReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

/// Text of the extremal line section when the search found nothing.
pub(crate) fn no_line_message(positive: bool) -> &'static str {
    if positive {
        "No line scores above 0"
    } else {
        "No line scores below 0"
    }
}

/// A character's mean score, always with a decimal point (`2.0`, `0.667`).
pub(crate) fn format_average(avg: f64) -> String {
    if avg.fract() == 0.0 {
        format!("{avg:.1}")
    } else {
        avg.to_string()
    }
}


#[cfg(test)]
pub(crate) mod test_support {
    use crate::analysis::report::ReportOptions;
    use crate::analysis::{Annotation, SentimentReport};
    use crate::core::{LineRecord, Script};
    use crate::sentiment::{Lexicon, Punctuation, SentimentScorer};

    pub fn sample_report() -> SentimentReport {
        let scorer = SentimentScorer::new(
            Lexicon::parse("good\nhope\n"),
            Lexicon::parse("bad\ndoomed\n"),
            Punctuation::default(),
        );
        let script: Script = vec![
            LineRecord::new(1, "LUKE", "There's good in him, I have hope."),
            LineRecord::new(2, "HAN SOLO", "I have a bad feeling about this."),
            LineRecord::new(3, "LEIA", "Help me."),
            LineRecord::new(4, "LUKE", "We're doomed, bad news."),
        ]
        .into_iter()
        .collect();

        let options = ReportOptions {
            main_characters: vec!["LUKE".to_string(), "LEIA".to_string()],
            compare: Some(("LUKE".to_string(), "HAN SOLO".to_string())),
            min_polar_lines: 1,
            window_size: 2,
            annotations: vec![Annotation::new(1, "Trench Run")],
        };
        SentimentReport::build(&scorer.score_script(script), &options).unwrap()
    }
}

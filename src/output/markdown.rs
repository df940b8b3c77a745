use super::{format_average, no_line_message, OutputWriter};
use crate::analysis::report::CharacterComparison;
use crate::analysis::SentimentReport;
use crate::core::ScoredLine;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_extremes(report)?;
        self.write_character_stats(report)?;
        self.write_comparison(report)?;
        self.write_trend(report)?;
        self.write_polarity(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "# Script Sentiment Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Lines | {} |", summary.total_lines)?;
        writeln!(self.writer, "| Characters | {} |", summary.characters)?;
        writeln!(self.writer, "| Positive lines | {} |", summary.positive_lines)?;
        writeln!(self.writer, "| Negative lines | {} |", summary.negative_lines)?;
        writeln!(self.writer, "| Neutral lines | {} |", summary.neutral_lines)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_extremes(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        self.write_line_section("Most Positive Line", report.most_positive.as_ref(), true)?;
        self.write_line_section("Most Negative Line", report.most_negative.as_ref(), false)
    }

    fn write_line_section(
        &mut self,
        title: &str,
        line: Option<&ScoredLine>,
        positive: bool,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        match line {
            Some(line) => {
                writeln!(
                    self.writer,
                    "- **{}** (line {}, score {})",
                    line.character(),
                    line.line_number(),
                    line.sentiment
                )?;
                writeln!(self.writer)?;
                writeln!(self.writer, "> {}", line.dialogue())?;
            }
            None => writeln!(self.writer, "_{}_", no_line_message(positive))?,
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_character_stats(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        if report.character_stats.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Sentiment Scores for Main Characters")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Character | Minimum | Average | Maximum |")?;
        writeln!(self.writer, "|-----------|---------|---------|---------|")?;
        for stats in &report.character_stats {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                stats.character,
                stats.min,
                format_average(stats.avg),
                stats.max
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_comparison(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        if report.comparison.is_empty() {
            return Ok(());
        }

        let names: Vec<&str> = report
            .comparison
            .iter()
            .map(|c| c.character.as_str())
            .collect();
        writeln!(self.writer, "## Score Distribution: {}", names.join(" vs "))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Score | {} |", names.join(" | "))?;
        writeln!(self.writer, "|-------|{}", "-----|".repeat(names.len()))?;
        for score in distinct_scores(&report.comparison) {
            let counts: Vec<String> = report
                .comparison
                .iter()
                .map(|c| count_of(c, score).to_string())
                .collect();
            writeln!(self.writer, "| {} | {} |", score, counts.join(" | "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trend(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let trend = &report.trend;
        writeln!(
            self.writer,
            "## Story Arc (moving average, window {})",
            trend.window_size
        )?;
        writeln!(self.writer)?;
        if let Some(((low_at, low), (high_at, high))) = trend.low_high() {
            writeln!(self.writer, "- Lowest point: {low:.3} at line index {low_at}")?;
            writeln!(self.writer, "- Highest point: {high:.3} at line index {high_at}")?;
        }
        for point in &trend.annotations {
            match point.value {
                Some(value) => writeln!(
                    self.writer,
                    "- {}: {:.3} at line index {}",
                    point.label, value, point.position
                )?,
                None => writeln!(
                    self.writer,
                    "- {}: line index {} is past the end of the script",
                    point.label, point.position
                )?,
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_polarity(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        if report.polarity.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Positive and Negative Lines by Character")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Character | Positive | Negative |")?;
        writeln!(self.writer, "|-----------|----------|----------|")?;
        for counts in &report.polarity {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                counts.character, counts.positive_lines, counts.negative_lines
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Every score present in any compared distribution, ascending.
pub(crate) fn distinct_scores(comparison: &[CharacterComparison]) -> Vec<i64> {
    let mut scores: Vec<i64> = comparison
        .iter()
        .flat_map(|c| c.distribution.iter().map(|b| b.score))
        .collect();
    scores.sort_unstable();
    scores.dedup();
    scores
}

pub(crate) fn count_of(comparison: &CharacterComparison, score: i64) -> usize {
    comparison
        .distribution
        .iter()
        .find(|b| b.score == score)
        .map_or(0, |b| b.count)
}

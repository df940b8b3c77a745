use super::markdown::{count_of, distinct_scores};
use super::{format_average, no_line_message, OutputWriter};
use crate::analysis::SentimentReport;
use crate::core::ScoredLine;
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use std::io::Write;

const BAR_WIDTH: usize = 30;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(formatting),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        self.write_summary(report)?;
        self.write_line("Most positive line:", report.most_positive.as_ref(), true)?;
        self.write_line("Most negative line:", report.most_negative.as_ref(), false)?;
        self.write_stats_table(report)?;
        self.write_comparison(report)?;
        self.write_trend(report)?;
        self.write_polarity(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_summary(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "{}", self.formatter.header("Script Sentiment Report"))?;
        writeln!(
            self.writer,
            "  {} lines, {} characters ({} positive, {} negative, {} neutral)",
            summary.total_lines,
            summary.characters,
            summary.positive_lines,
            summary.negative_lines,
            summary.neutral_lines
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_line(
        &mut self,
        title: &str,
        line: Option<&ScoredLine>,
        positive: bool,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.bold(title))?;
        match line {
            Some(line) => {
                writeln!(self.writer, "character: {}", line.character())?;
                writeln!(self.writer, "dialogue: {}", line.dialogue())?;
                let score = line.sentiment.to_string();
                writeln!(
                    self.writer,
                    "score: {}",
                    self.formatter.sentiment(&score, line.sentiment as f64)
                )?;
            }
            None => writeln!(self.writer, "{}", self.formatter.dim(no_line_message(positive)))?,
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_stats_table(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        if report.character_stats.is_empty() {
            return Ok(());
        }

        writeln!(
            self.writer,
            "{}",
            self.formatter.header("Sentiment Scores for Main Characters")
        )?;
        writeln!(
            self.writer,
            "{:15} {:>15} {:>15} {:>15}",
            "Character", "Minimum Score", "Average Score", "Maximum Score"
        )?;
        for stats in &report.character_stats {
            // Pad before styling so escape codes don't disturb the columns
            let min = format!("{:>15}", stats.min);
            let avg = format!("{:>15}", format_average(stats.avg));
            let max = format!("{:>15}", stats.max);
            writeln!(
                self.writer,
                "{:15} {} {} {}",
                stats.character,
                self.formatter.sentiment(&min, stats.min as f64),
                self.formatter.sentiment(&avg, stats.avg),
                self.formatter.sentiment(&max, stats.max as f64)
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
        let title = format!("Comparison of Characters: {}", names.join(" vs "));
        writeln!(self.writer, "{}", self.formatter.header(&title))?;

        let scores = distinct_scores(&report.comparison);
        let peak = report
            .comparison
            .iter()
            .flat_map(|c| c.distribution.iter().map(|b| b.count))
            .max()
            .unwrap_or(0);

        for side in &report.comparison {
            writeln!(
                self.writer,
                "{} ({} lines)",
                self.formatter.bold(&side.character),
                side.scores.len()
            )?;
            for &score in &scores {
                let count = count_of(side, score);
                writeln!(
                    self.writer,
                    "  {:>4} | {:<width$} {}",
                    score,
                    "#".repeat(bar_length(count, peak)),
                    count,
                    width = BAR_WIDTH
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trend(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let trend = &report.trend;
        let title = format!(
            "Moving Average of Sentiment Score (window {})",
            trend.window_size
        );
        writeln!(self.writer, "{}", self.formatter.header(&title))?;

        match trend.low_high() {
            Some(((low_at, low), (high_at, high))) => {
                let low_text = format!("{low:.3}");
                let high_text = format!("{high:.3}");
                writeln!(
                    self.writer,
                    "  lowest:  {} at line {}",
                    self.formatter.sentiment(&low_text, low),
                    low_at
                )?;
                writeln!(
                    self.writer,
                    "  highest: {} at line {}",
                    self.formatter.sentiment(&high_text, high),
                    high_at
                )?;
            }
            None => writeln!(self.writer, "  {}", self.formatter.dim("no lines"))?,
        }

        for point in &trend.annotations {
            match point.value {
                Some(value) => {
                    let text = format!("{value:.3}");
                    writeln!(
                        self.writer,
                        "  {} (line {}): {}",
                        point.label,
                        point.position,
                        self.formatter.sentiment(&text, value)
                    )?;
                }
                None => writeln!(
                    self.writer,
                    "  {} (line {}): {}",
                    point.label,
                    point.position,
                    self.formatter.dim("past end of script")
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

        writeln!(
            self.writer,
            "{}",
            self.formatter
                .header("Number of Positive and Negative Lines by Character")
        )?;
        writeln!(
            self.writer,
            "{:15} {:>10} {:>10}",
            "Character", "Positive", "Negative"
        )?;
        for counts in &report.polarity {
            writeln!(
                self.writer,
                "{:15} {:>10} {:>10}",
                counts.character, counts.positive_lines, counts.negative_lines
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn bar_length(count: usize, peak: usize) -> usize {
    if peak == 0 {
        0
    } else {
        (count * BAR_WIDTH).div_ceil(peak)
    }
}

use serde::{Deserialize, Serialize};

use super::sections::{InputConfig, ReportConfig, ScoringConfig, TrendConfig};
use crate::analysis::report::ReportOptions;
use crate::core::{Error, Result};
use crate::sentiment::Punctuation;

/// Root configuration structure for scriptsent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScriptsentConfig {
    /// Script file layout
    #[serde(default)]
    pub input: Option<InputConfig>,

    /// Dialogue normalization
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Moving-average trend configuration
    #[serde(default)]
    pub trend: Option<TrendConfig>,

    /// Report contents
    #[serde(default)]
    pub report: Option<ReportConfig>,
}

impl ScriptsentConfig {
    pub fn input(&self) -> InputConfig {
        self.input.clone().unwrap_or_default()
    }

    pub fn scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn trend(&self) -> TrendConfig {
        self.trend.clone().unwrap_or_default()
    }

    pub fn report(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    /// Reject values no analysis can run with.
    pub fn validate(&self) -> Result<()> {
        if self.trend().window_size == 0 {
            return Err(Error::configuration("trend.window_size must be at least 1"));
        }
        if self.input().delimiter.is_whitespace() {
            return Err(Error::configuration(
                "input.delimiter must not be a whitespace character",
            ));
        }
        Ok(())
    }

    /// Resolve every section into the values one analysis run uses.
    pub fn settings(&self) -> AnalysisSettings {
        let trend = self.trend();
        let report = self.report();

        AnalysisSettings {
            delimiter: self.input().delimiter,
            punctuation: Punctuation::new(&self.scoring().punctuation),
            report: ReportOptions {
                main_characters: report.main_characters,
                compare: report.compare.map(|[first, second]| (first, second)),
                min_polar_lines: report.min_polar_lines,
                window_size: trend.window_size,
                annotations: trend.annotations,
            },
        }
    }
}

/// Immutable settings for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub delimiter: char,
    pub punctuation: Punctuation,
    pub report: ReportOptions,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        ScriptsentConfig::default().settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Annotation;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_settings() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.delimiter, '|');
        assert_eq!(settings.punctuation, Punctuation::default());
        assert_eq!(settings.report.window_size, 20);
        assert_eq!(settings.report.min_polar_lines, 10);
        assert_eq!(settings.report.main_characters.len(), 6);
        assert_eq!(
            settings.report.compare,
            Some(("LEIA".to_string(), "LUKE".to_string()))
        );
        assert_eq!(
            settings.report.annotations[0],
            Annotation::new(289, "Tarkin's Conference")
        );
    }

    #[test]
    fn test_zero_window_is_invalid() {
        let config: ScriptsentConfig = toml::from_str("[trend]\nwindow_size = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_whitespace_delimiter_is_invalid() {
        let config: ScriptsentConfig = toml::from_str("[input]\ndelimiter = \"\\t\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: ScriptsentConfig =
            toml::from_str("[report]\nmain_characters = [\"LUKE\"]\n").unwrap();
        let settings = config.settings();
        assert_eq!(settings.report.main_characters, vec!["LUKE".to_string()]);
        assert_eq!(settings.report.min_polar_lines, 10);
        assert_eq!(settings.report.window_size, 20);
    }
}

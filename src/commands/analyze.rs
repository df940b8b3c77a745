use crate::analysis::SentimentReport;
use crate::config::{self, AnalysisSettings, ScriptsentConfig};
use crate::formatting::FormattingConfig;
use crate::output::{create_writer, OutputFormat, OutputWriter};
use crate::pipeline::{analyze_files, InputPaths};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub script: PathBuf,
    pub positive: PathBuf,
    pub negative: PathBuf,
    pub config: Option<PathBuf>,
    pub format: crate::cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub window: Option<usize>,
    pub characters: Option<Vec<String>>,
    pub compare: Option<Vec<String>>,
    pub min_polar_lines: Option<usize>,
    pub formatting_config: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = load_file_config(config.config.as_deref())?;
    let settings = apply_overrides(file_config.settings(), &config)?;

    let report = analyze_files(
        InputPaths {
            script: &config.script,
            positive: &config.positive,
            negative: &config.negative,
        },
        &settings,
    )
    .with_context(|| format!("Failed to analyze {}", config.script.display()))?;

    write_report(
        &report,
        config.format.into(),
        config.output.as_deref(),
        config.formatting_config,
    )
}

fn load_file_config(explicit: Option<&Path>) -> Result<ScriptsentConfig> {
    match explicit {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let current = std::env::current_dir().context("Failed to get current directory")?;
            Ok(config::load_config(&current))
        }
    }
}

/// Command-line values win over configuration values.
pub fn apply_overrides(
    mut settings: AnalysisSettings,
    config: &AnalyzeConfig,
) -> Result<AnalysisSettings> {
    if let Some(window) = config.window {
        if window == 0 {
            anyhow::bail!("--window must be at least 1");
        }
        settings.report.window_size = window;
    }
    if let Some(characters) = config.characters.clone().filter(|c| !c.is_empty()) {
        settings.report.main_characters = characters;
    }
    if let Some(pair) = &config.compare {
        settings.report.compare = Some(compare_pair(pair)?);
    }
    if let Some(min_polar_lines) = config.min_polar_lines {
        settings.report.min_polar_lines = min_polar_lines;
    }
    Ok(settings)
}

fn compare_pair(names: &[String]) -> Result<(String, String)> {
    match names {
        [first, second] => Ok((first.clone(), second.clone())),
        _ => anyhow::bail!(
            "--compare takes exactly two characters, got {}",
            names.len()
        ),
    }
}

pub fn write_report(
    report: &SentimentReport,
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = create_writer(format, Box::new(file), FormattingConfig::plain());
            writer.write_report(report)?;
            log::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            {
                let mut writer = create_writer(format, Box::new(&mut handle), formatting);
                writer.write_report(report)?;
            }
            handle.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat as CliFormat;

    fn analyze_config() -> AnalyzeConfig {
        AnalyzeConfig {
            script: PathBuf::from("script.txt"),
            positive: PathBuf::from("positive.txt"),
            negative: PathBuf::from("negative.txt"),
            config: None,
            format: CliFormat::Terminal,
            output: None,
            window: None,
            characters: None,
            compare: None,
            min_polar_lines: None,
            formatting_config: FormattingConfig::plain(),
        }
    }

    #[test]
    fn test_no_overrides_keeps_settings() {
        let settings = apply_overrides(AnalysisSettings::default(), &analyze_config()).unwrap();
        assert_eq!(settings, AnalysisSettings::default());
    }

    #[test]
    fn test_overrides_replace_values() {
        let mut config = analyze_config();
        config.window = Some(5);
        config.characters = Some(vec!["LUKE".to_string()]);
        config.compare = Some(vec!["LUKE".to_string(), "LEIA".to_string()]);
        config.min_polar_lines = Some(3);

        let settings = apply_overrides(AnalysisSettings::default(), &config).unwrap();
        assert_eq!(settings.report.window_size, 5);
        assert_eq!(settings.report.main_characters, vec!["LUKE".to_string()]);
        assert_eq!(
            settings.report.compare,
            Some(("LUKE".to_string(), "LEIA".to_string()))
        );
        assert_eq!(settings.report.min_polar_lines, 3);
    }

    #[test]
    fn test_compare_needs_two_names() {
        let mut config = analyze_config();
        config.compare = Some(vec!["LUKE".to_string()]);
        assert!(apply_overrides(AnalysisSettings::default(), &config).is_err());
    }
}

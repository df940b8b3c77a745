use anyhow::Result;
use clap::Parser;
use scriptsent::cli::{Cli, Commands};
use scriptsent::commands::AnalyzeConfig;
use scriptsent::formatting::{ColorMode, FormattingConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            script,
            positive,
            negative,
            config,
            format,
            output,
            window,
            characters,
            compare,
            min_polar_lines,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);
            let config = AnalyzeConfig {
                script,
                positive,
                negative,
                config,
                format,
                output,
                window: window.map(|w| w as usize),
                characters,
                compare,
                min_polar_lines,
                formatting_config: create_formatting_config(plain),
            };
            scriptsent::commands::handle_analyze(config)
        }
        Commands::Init { force } => {
            init_logging(0);
            scriptsent::commands::init_config(force)
        }
    }
}

// Pure function to map -v count onto a default filter level
fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// Side effect: install the global subscriber (RUST_LOG wins over -v)
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}

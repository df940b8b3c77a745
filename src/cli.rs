use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scriptsent")]
#[command(about = "Lexicon-based sentiment analysis of movie scripts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every line of a script and report per-character sentiment
    Analyze {
        /// Script file (`line_number|character|dialogue`)
        script: PathBuf,

        /// Positive word list, one word per line
        #[arg(long = "positive", short = 'p')]
        positive: PathBuf,

        /// Negative word list, one word per line
        #[arg(long = "negative", short = 'n')]
        negative: PathBuf,

        /// Configuration file (skips .scriptsent.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Moving-average window size
        #[arg(long = "window", value_parser = clap::value_parser!(u64).range(1..))]
        window: Option<u64>,

        /// Characters for the min/avg/max table
        #[arg(long = "characters", value_delimiter = ',')]
        characters: Option<Vec<String>>,

        /// Two characters whose score distributions are compared
        #[arg(long = "compare", value_delimiter = ',')]
        compare: Option<Vec<String>>,

        /// Characters need more than this many non-zero lines for the polarity view
        #[arg(long = "min-polar-lines")]
        min_polar_lines: Option<usize>,

        /// Disable colored output
        #[arg(long = "plain")]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::output::OutputFormat::Terminal,
        }
    }
}

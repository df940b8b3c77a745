// Section types
mod sections;

// Core configuration types
mod core;
mod loader;

pub use self::core::{AnalysisSettings, ScriptsentConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use sections::{
    default_annotations, default_compare, default_delimiter, default_main_characters,
    default_min_polar_lines, default_punctuation, default_window_size, InputConfig,
    ReportConfig, ScoringConfig, TrendConfig,
};

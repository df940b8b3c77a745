//! CLI command implementations.
//!
//! - **analyze**: score a script and write the sentiment report
//! - **init**: write a default `.scriptsent.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;

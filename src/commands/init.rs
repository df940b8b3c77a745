use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r##"# scriptsent configuration

[input]
# Field separator of the script file
delimiter = "|"

[scoring]
# Characters deleted from dialogue before matching against the lexicons
punctuation = "!\"#$%&'()*+,-./:;<=>?@[]^_`{}|~"

[trend]
window_size = 20
annotations = [
    { position = 289, label = "Tarkin's Conference" },
    { position = 835, label = "Rebels Attack" },
]

[report]
main_characters = ["DARTH VADER", "LEIA", "C3PO", "LUKE", "OBIWAN", "HAN SOLO"]
compare = ["LEIA", "LUKE"]
# Characters need more than this many non-zero lines to be listed
min_polar_lines = 10
"##;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, ScriptsentConfig};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_built_in_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed.settings(), ScriptsentConfig::default().settings());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        init_config_in(dir.path(), false).unwrap();
        assert!(init_config_in(dir.path(), false).is_err());
        assert!(init_config_in(dir.path(), true).is_ok());
    }
}

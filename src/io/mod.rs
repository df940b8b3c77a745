pub mod script;
pub mod table;

pub use script::{read_script, script_from_records};
pub use table::{parse_table, read_table, CastTable, FieldCast, FieldValue, Record};

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a whole input file. Any failure is fatal for the run.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::read(path, e))
}

pub fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    fs::write(path, content)?;
    Ok(())
}

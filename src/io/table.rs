//! Delimiter-separated tables with a header row.
//!
//! The first line names the fields; every following line is one record.
//! Lines are trimmed of surrounding whitespace and split on a single
//! delimiter character. There is no quoting or escaping, so a delimiter
//! inside a value shifts every later field.
//!
//! A line with fewer fields than the header yields a partial record. A
//! line with more fields than the header is rejected.

use crate::core::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Conversion applied to a raw field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FieldCast {
    Integer,
    Float,
    #[default]
    Text,
}

impl FieldCast {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
        }
    }

    fn apply(&self, field: &str, raw: &str, line: usize) -> Result<FieldValue> {
        let cast_error = || Error::Cast {
            field: field.to_string(),
            value: raw.to_string(),
            cast: self.name(),
            line,
        };

        match self {
            Self::Integer => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| cast_error()),
            Self::Float => raw
                .trim()
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| cast_error()),
            Self::Text => Ok(FieldValue::Text(raw.to_string())),
        }
    }
}

/// A typed field value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Field name to cast mapping. Fields without an entry stay text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CastTable {
    casts: HashMap<String, FieldCast>,
}

impl CastTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, cast: FieldCast) -> Self {
        self.casts.insert(field.into(), cast);
        self
    }

    pub fn cast_for(&self, field: &str) -> FieldCast {
        self.casts.get(field).copied().unwrap_or_default()
    }

    /// Casts for the `line_number|character|dialogue` script layout.
    pub fn script() -> Self {
        use crate::core::{CHARACTER_FIELD, DIALOGUE_FIELD, LINE_NUMBER_FIELD};

        Self::new()
            .with(LINE_NUMBER_FIELD, FieldCast::Integer)
            .with(CHARACTER_FIELD, FieldCast::Text)
            .with(DIALOGUE_FIELD, FieldCast::Text)
    }
}

/// One data line, fields in header order.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    line: usize,
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// 1-based line number of the record in its source text.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse table text. `source` is only used in error messages.
pub fn parse_table(
    text: &str,
    delimiter: char,
    casts: &CastTable,
    source: &Path,
) -> Result<Vec<Record>> {
    let mut lines = text.lines();
    let header: Vec<String> = match lines.next() {
        Some(line) => line.trim().split(delimiter).map(str::to_string).collect(),
        None => return Ok(Vec::new()),
    };

    lines
        .enumerate()
        .map(|(idx, raw)| parse_record(raw, idx + 2, &header, delimiter, casts, source))
        .collect()
}

fn parse_record(
    raw: &str,
    line: usize,
    header: &[String],
    delimiter: char,
    casts: &CastTable,
    source: &Path,
) -> Result<Record> {
    let pieces: Vec<&str> = raw.trim().split(delimiter).collect();
    if pieces.len() > header.len() {
        return Err(Error::ColumnCount {
            path: source.to_path_buf(),
            line,
            expected: header.len(),
            found: pieces.len(),
        });
    }

    let fields = header
        .iter()
        .zip(pieces)
        .map(|(name, piece)| {
            let value = casts.cast_for(name).apply(name, piece, line)?;
            Ok((name.clone(), value))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Record { line, fields })
}

/// Read and parse a table file.
pub fn read_table(path: &Path, delimiter: char, casts: &CastTable) -> Result<Vec<Record>> {
    let text = super::read_file(path)?;
    let records = parse_table(&text, delimiter, casts, path)?;
    log::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

use super::table::{read_table, CastTable, FieldValue, Record};
use crate::core::{
    Error, LineRecord, Result, Script, CHARACTER_FIELD, DIALOGUE_FIELD, LINE_NUMBER_FIELD,
};
use std::path::Path;

/// Read a `line_number|character|dialogue` script file.
pub fn read_script(path: &Path, delimiter: char) -> Result<Script> {
    let records = read_table(path, delimiter, &CastTable::script())?;
    script_from_records(&records)
}

/// Convert parsed records into script lines, keeping their order.
pub fn script_from_records(records: &[Record]) -> Result<Script> {
    records.iter().map(line_from_record).collect()
}

fn line_from_record(record: &Record) -> Result<LineRecord> {
    let field = required(record, LINE_NUMBER_FIELD)?;
    let Some(line_number) = field.as_integer() else {
        return Err(Error::Cast {
            field: LINE_NUMBER_FIELD.to_string(),
            value: field.to_string(),
            cast: "integer",
            line: record.line(),
        });
    };

    Ok(LineRecord {
        line_number,
        character: required(record, CHARACTER_FIELD)?.to_string(),
        dialogue: required(record, DIALOGUE_FIELD)?.to_string(),
    })
}

fn required<'a>(record: &'a Record, field: &str) -> Result<&'a FieldValue> {
    record.get(field).ok_or_else(|| Error::MissingField {
        field: field.to_string(),
        line: record.line(),
    })
}

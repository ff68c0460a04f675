//! Ingestion of StatLine-style CSV exports into raw records, for offline
//! payloads that did not arrive as JSON.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::record::{RawRecord, RawValue};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read statistics export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid statistics export: {0}")]
    Csv(#[from] csv::Error),
    #[error("statistics export is missing a value row")]
    MissingValueRow,
}

/// Read a StatLine export (semicolon-delimited, header row plus one value
/// row per area; the first value row is taken) into a raw record.
pub fn raw_record_from_csv<R: Read>(reader: R) -> Result<RawRecord, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let row = match csv_reader.records().next() {
        Some(row) => row?,
        None => return Err(ImportError::MissingValueRow),
    };

    let mut record = RawRecord::new();
    for (key, field) in headers.iter().zip(row.iter()) {
        record.insert(key, field_value(field));
    }
    Ok(record)
}

pub fn raw_record_from_path<P: AsRef<Path>>(path: P) -> Result<RawRecord, ImportError> {
    let file = File::open(path)?;
    raw_record_from_csv(file)
}

/// StatLine exports write decimals with a comma; the `'.'` no-data sentinel
/// must survive as text so the parsers can apply the null policy.
fn field_value(field: &str) -> RawValue {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return RawValue::Null;
    }

    let candidate = trimmed.replace(',', ".");
    match candidate.parse::<f64>() {
        Ok(number) if number.is_finite() => RawValue::Number(number),
        _ => RawValue::Text(trimmed.to_string()),
    }
}

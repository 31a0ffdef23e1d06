//! CSV record reader for the node and edge files
//!
//! The store writes fields without quoting, so the reader runs with quoting
//! disabled too: a `"` is an ordinary character and every written name
//! loads back unchanged. Rows may have any number of fields; callers decide
//! what a short or long row means.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::CoactorError;

/// A data row with its 1-based line number in the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CsvRecord {
    pub line: usize,
    pub fields: Vec<String>,
}

impl CsvRecord {
    /// First two fields, or an error naming the offending line
    pub fn pair(&self, path: &Path) -> Result<(String, String), CoactorError> {
        match self.fields.as_slice() {
            [first, second, ..] => Ok((first.clone(), second.clone())),
            _ => Err(CoactorError::CsvRowError {
                path: path.to_path_buf(),
                line: self.line,
                message: format!("expected 2 fields, found {}", self.fields.len()),
            }),
        }
    }
}

/// Read every data row, skipping the header and blank lines
pub(crate) fn read_records<R: Read>(reader: R, path: &Path) -> Result<Vec<CsvRecord>, CoactorError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| CoactorError::CsvParseError {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record
            .position()
            .map_or(0, |position| position.line() as usize);

        records.push(CsvRecord {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(records)
}

pub(crate) fn read_records_from_file(path: &Path) -> Result<Vec<CsvRecord>, CoactorError> {
    let file = File::open(path).map_err(|source| CoactorError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    read_records(BufReader::new(file), path)
}

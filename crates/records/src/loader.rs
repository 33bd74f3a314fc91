use super::*;
use agglo_core::*;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Reads a headered CSV of grocery records from disk.
///
/// The first line is a header and is skipped without inspection.
/// Every following row must hold an integer id and exactly
/// [`N_ATTRIBUTES`] finite numeric values, and ids must be unique.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Record>, RecordError> {
    let path = path.as_ref();
    log::info!("{:<32}{:<32}", "loading records", path.display());
    let file = std::fs::File::open(path).map_err(|e| RecordError::io(path, e))?;
    let records = read(file)?;
    log::info!("{:<32}{:<32}", "loaded records", records.len());
    Ok(records)
}

/// Parses records from any reader. See [`load`].
pub fn read(reader: impl Read) -> Result<Vec<Record>, RecordError> {
    let mut ids = HashSet::new();
    let mut records = Vec::new();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    for row in reader.records() {
        let ref row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let record = parse(row, line)?;
        if !ids.insert(record.id()) {
            return Err(RecordError::DuplicateId {
                line,
                id: record.id(),
            });
        }
        records.push(record);
    }
    Ok(records)
}

/// Converts one CSV row into a record, validating its width.
fn parse(row: &csv::StringRecord, line: u64) -> Result<Record, RecordError> {
    let expected = 1 + N_ATTRIBUTES;
    if row.len() != expected {
        return Err(RecordError::Width {
            line,
            expected,
            actual: row.len(),
        });
    }
    let id = row[0]
        .parse::<Id>()
        .map_err(|_| RecordError::parse(line, ID_COLUMN, &row[0]))?;
    let attributes = row
        .iter()
        .skip(1)
        .zip(ATTRIBUTES)
        .map(|(value, column)| {
            value
                .parse::<Energy>()
                .ok()
                .filter(|x| x.is_finite())
                .ok_or_else(|| RecordError::parse(line, column, value))
        })
        .collect::<Result<Vec<Energy>, RecordError>>()?;
    Ok(Record::new(id, attributes))
}

//! CSV decoding of the upstream export.

use csv::ReaderBuilder;

use crate::tracker::RawRecord;

use super::errors::SourceResult;

/// Decode CSV text into one [`RawRecord`] per row.
///
/// The header row supplies the column names, with any BOM removed. Values
/// are trimmed. Rows shorter than the header get empty strings for the
/// missing columns; extra cells are dropped.
pub fn decode_csv(text: &str) -> SourceResult<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRecord = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).unwrap_or("").trim().to_string();
                (header.clone(), value)
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

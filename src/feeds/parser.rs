//! Tolerant CSV parsing for sheet exports.
//!
//! The stok export prepends a handful of banner and metadata lines before
//! the real table, so the parser first locates the true header row by
//! sentinel and discards everything above it. Parsing itself is
//! best-effort: row-level irregularities are logged and skipped over, not
//! turned into errors.

use std::collections::HashMap;

use csv::{ReaderBuilder, Trim};
use tracing::warn;

use crate::error::FeedError;
use crate::models::{Dataset, FeedTable, Row};

/// Literal prefix that marks the real header row of the stok export.
const STOK_HEADER_SENTINEL: &str = "Brand,";

/// Parse a raw feed body into headers plus rows.
///
/// For [`Dataset::Stok`] the lines before the sentinel header are
/// discarded first; if the sentinel never appears, the whole body is
/// parsed from the top as a fallback. [`Dataset::Harga`] always treats the
/// first row as the header.
pub fn parse_feed(dataset: Dataset, text: &str) -> Result<FeedTable, FeedError> {
    let body = match dataset {
        Dataset::Stok => match header_offset(text) {
            Some(offset) => &text[offset..],
            None => {
                warn!("stok feed has no `{STOK_HEADER_SENTINEL}` header row, parsing from the top");
                text
            }
        },
        Dataset::Harga => text,
    };

    parse_csv(dataset, body)
}

/// Byte offset of the first line starting with the stok header sentinel.
fn header_offset(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split('\n') {
        if line.starts_with(STOK_HEADER_SENTINEL) {
            return Some(offset);
        }
        offset += line.len() + 1;
    }
    None
}

fn parse_csv(dataset: Dataset, body: &str) -> Result<FeedTable, FeedError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| FeedError::Parse { dataset, source })?
        .iter()
        .map(|header| header.to_string())
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!("skipping unreadable {dataset} record: {err}");
                continue;
            }
        };

        // Sheet exports pad with fully blank lines; drop them.
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        if record.len() != headers.len() {
            warn!(
                "{dataset} record {} has {} fields, header has {}",
                rows.len() + 1,
                record.len(),
                headers.len()
            );
        }

        let mut row: Row = HashMap::with_capacity(headers.len());
        for (i, field) in record.iter().enumerate() {
            // Fields beyond the header width have no label to live under.
            if let Some(header) = headers.get(i) {
                row.insert(header.clone(), field.to_string());
            }
        }
        rows.push(row);
    }

    Ok(FeedTable { headers, rows })
}

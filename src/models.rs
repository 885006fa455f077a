//! Core data types shared across the crate.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Identifier for one of the two sheet-backed datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Price list.
    Harga,
    /// Stock list.
    Stok,
}

impl Dataset {
    /// Every known dataset, in display order.
    pub const ALL: [Dataset; 2] = [Dataset::Harga, Dataset::Stok];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Harga => "harga",
            Dataset::Stok => "stok",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "harga" => Ok(Dataset::Harga),
            "stok" => Ok(Dataset::Stok),
            other => Err(format!("unknown dataset: {other}")),
        }
    }
}

/// A single parsed row: column label to raw cell text.
///
/// Keys are a subset of the dataset's current header list; a missing key
/// means the source row was shorter than the header. Values are kept as
/// raw text, no numeric or date coercion.
pub type Row = HashMap<String, String>;

/// Parsed snapshot of one feed: ordered headers plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

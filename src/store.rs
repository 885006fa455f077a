//! In-memory store of the most recent parsed snapshot per dataset.

use chrono::{DateTime, Utc};

use crate::error::FeedError;
use crate::models::{Dataset, FeedTable, Row};

/// Latest snapshot for a single dataset.
#[derive(Debug, Clone, Default)]
pub struct DatasetEntry {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub loaded: bool,
    /// When the snapshot was last replaced successfully.
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Holds the most recent snapshot for every dataset.
///
/// [`invalidate`](DatasetStore::invalidate) only clears the loaded flag;
/// the stale snapshot stays readable until the next successful replace.
/// Callers must check [`is_loaded`](DatasetStore::is_loaded) before
/// trusting `rows`.
#[derive(Debug, Default)]
pub struct DatasetStore {
    harga: DatasetEntry,
    stok: DatasetEntry,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, dataset: Dataset) -> &DatasetEntry {
        match dataset {
            Dataset::Harga => &self.harga,
            Dataset::Stok => &self.stok,
        }
    }

    fn entry_mut(&mut self, dataset: Dataset) -> &mut DatasetEntry {
        match dataset {
            Dataset::Harga => &mut self.harga,
            Dataset::Stok => &mut self.stok,
        }
    }

    pub fn is_loaded(&self, dataset: Dataset) -> bool {
        self.entry(dataset).loaded
    }

    pub fn get(&self, dataset: Dataset) -> &DatasetEntry {
        self.entry(dataset)
    }

    /// The loaded snapshot for a dataset, refusing stale data.
    ///
    /// Unlike [`get`](DatasetStore::get), this fails with
    /// [`FeedError::NotReady`] while the dataset is invalidated or was
    /// never loaded.
    pub fn snapshot(&self, dataset: Dataset) -> Result<&DatasetEntry, FeedError> {
        let entry = self.entry(dataset);
        if entry.loaded {
            Ok(entry)
        } else {
            Err(FeedError::NotReady(dataset))
        }
    }

    /// Replace the whole snapshot after a successful ingest. Never merges.
    pub fn replace(&mut self, dataset: Dataset, table: FeedTable) {
        let entry = self.entry_mut(dataset);
        entry.headers = table.headers;
        entry.rows = table.rows;
        entry.loaded = true;
        entry.refreshed_at = Some(Utc::now());
    }

    /// Mark a dataset as needing a re-fetch without dropping the snapshot.
    pub fn invalidate(&mut self, dataset: Dataset) {
        self.entry_mut(dataset).loaded = false;
    }
}

//! Loading orchestration and the periodic refresh cycle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::FeedError;
use crate::feeds::{self, FeedClient};
use crate::models::Dataset;
use crate::store::DatasetStore;

/// Fetch and parse a dataset, replacing its snapshot in the store.
pub async fn load_dataset(
    client: &FeedClient,
    store: &RwLock<DatasetStore>,
    dataset: Dataset,
) -> Result<(), FeedError> {
    let text = client.fetch(dataset).await?;
    let table = feeds::parse_feed(dataset, &text)?;
    info!("{dataset} data loaded: {} rows", table.rows.len());
    store.write().await.replace(dataset, table);
    Ok(())
}

/// Ensure a dataset has a loaded snapshot, fetching lazily if it does not.
///
/// Concurrent callers racing on the same unloaded dataset may both fetch;
/// the last replace wins with a consistent snapshot either way.
pub async fn ensure_loaded(
    client: &FeedClient,
    store: &RwLock<DatasetStore>,
    dataset: Dataset,
) -> Result<(), FeedError> {
    if store.read().await.is_loaded(dataset) {
        return Ok(());
    }
    load_dataset(client, store, dataset).await
}

/// Run the auto-refresh cycle until the task is dropped.
///
/// Every tick invalidates both snapshots first, then re-fetches only the
/// active dataset. A failed fetch leaves the entry invalidated so readers
/// see "not ready" instead of silently reusing stale rows; the cycle
/// itself keeps ticking.
pub async fn run(
    client: FeedClient,
    store: Arc<RwLock<DatasetStore>>,
    active: Arc<RwLock<Dataset>>,
    every: Duration,
) {
    let mut ticker = tokio::time::interval(every);
    // The first tick completes immediately; the cycle starts one interval in.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let dataset = *active.read().await;
        {
            let mut store = store.write().await;
            store.invalidate(Dataset::Harga);
            store.invalidate(Dataset::Stok);
        }

        match load_dataset(&client, &store, dataset).await {
            Ok(()) => info!("auto-refresh: {dataset} data refreshed"),
            Err(err) => warn!("auto-refresh: reloading {dataset} failed: {err}"),
        }
    }
}

//! Error taxonomy for feed ingestion.

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::Dataset;

/// Everything that can go wrong between a feed URL and a usable snapshot.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport-level failure talking to the feed endpoint.
    #[error("fetching {dataset} feed failed: {source}")]
    Fetch {
        dataset: Dataset,
        #[source]
        source: reqwest::Error,
    },

    /// The feed endpoint answered with a non-success status.
    #[error("{dataset} feed returned HTTP {status}")]
    Status { dataset: Dataset, status: StatusCode },

    /// The feed body could not be read as CSV at all. Row-level
    /// irregularities are tolerated and logged instead.
    #[error("parsing {dataset} feed failed: {source}")]
    Parse {
        dataset: Dataset,
        #[source]
        source: csv::Error,
    },

    /// A dataset was read before any successful load.
    #[error("dataset {0} is not loaded yet")]
    NotReady(Dataset),
}

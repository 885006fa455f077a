//! Request handlers for the dashboard.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{templates, AppState};
use crate::models::Dataset;
use crate::present;
use crate::refresh;
use crate::search;

const STYLESHEET: &str = include_str!("assets/style.css");
const SCRIPT: &str = include_str!("assets/app.js");

/// Per-mode search box placeholder.
fn placeholder_for(dataset: Dataset) -> &'static str {
    match dataset {
        Dataset::Harga => "Ketik untuk mencari harga... (contoh: SS30)",
        Dataset::Stok => "Ketik untuk mencari stok... (contoh: SS30)",
    }
}

#[derive(Debug, Deserialize)]
pub struct ModeParams {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    q: String,
}

impl ModeParams {
    /// Unknown or missing modes fall back to the default dataset rather
    /// than failing the request; the UI only ever sends the two known ones.
    fn dataset(&self) -> Dataset {
        self.mode
            .as_deref()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or(Dataset::Harga)
    }
}

/// Search outcome as consumed by the browser script.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// One of `empty`, `no-results`, `results`.
    pub status: &'static str,
    pub query: String,
    pub count: usize,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub refreshed_at: Option<String>,
}

impl SearchResponse {
    fn empty() -> Self {
        Self {
            status: "empty",
            query: String::new(),
            count: 0,
            headers: Vec::new(),
            rows: Vec::new(),
            refreshed_at: None,
        }
    }

    fn no_results(query: String) -> Self {
        Self {
            status: "no-results",
            query,
            count: 0,
            headers: Vec::new(),
            rows: Vec::new(),
            refreshed_at: None,
        }
    }
}

/// Dashboard page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(templates::dashboard(&state.settings))
}

/// Run a search against the active dataset.
///
/// A dataset that is not loaded yet is fetched lazily first. Any
/// ingestion failure degrades to `no-results` (and is logged); the
/// dashboard stays interactive no matter what the feed does.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<ModeParams>,
) -> Json<SearchResponse> {
    let dataset = params.dataset();
    *state.active.write().await = dataset;

    let query = params.q.trim().to_string();
    if query.is_empty() {
        return Json(SearchResponse::empty());
    }

    if let Err(err) = refresh::ensure_loaded(&state.client, &state.store, dataset).await {
        warn!("loading {dataset} for search failed: {err}");
        return Json(SearchResponse::no_results(query));
    }

    let store = state.store.read().await;
    let entry = match store.snapshot(dataset) {
        Ok(entry) => entry,
        // The refresh cycle can invalidate between the load above and
        // this read; stale rows are never served.
        Err(err) => {
            warn!("reading {dataset} after load failed: {err}");
            return Json(SearchResponse::no_results(query));
        }
    };
    let matches = search::search(&entry.rows, &query, state.settings.min_query_length);
    if matches.is_empty() {
        return Json(SearchResponse::no_results(query));
    }

    let table = present::present(&matches, &entry.headers, dataset, &query);
    Json(SearchResponse {
        status: "results",
        count: matches.len(),
        headers: table.headers,
        rows: table.rows,
        refreshed_at: entry.refreshed_at.map(|at| at.to_rfc3339()),
        query,
    })
}

/// Client configuration for one mode.
#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub mode: String,
    pub placeholder: String,
    pub debounce_ms: u64,
    pub min_query_length: usize,
    pub refresh_interval_secs: u64,
}

/// Record a mode switch and hand the script its knobs for that mode.
///
/// The switched-to dataset is preloaded in the background so the first
/// search against it is warm.
pub async fn meta(
    State(state): State<AppState>,
    Query(params): Query<ModeParams>,
) -> Json<MetaResponse> {
    let dataset = params.dataset();
    *state.active.write().await = dataset;

    let preload = state.clone();
    tokio::spawn(async move {
        if let Err(err) = refresh::ensure_loaded(&preload.client, &preload.store, dataset).await {
            warn!("preloading {dataset} failed: {err}");
        }
    });

    Json(MetaResponse {
        mode: dataset.to_string(),
        placeholder: placeholder_for(dataset).to_string(),
        debounce_ms: state.settings.debounce_ms,
        min_query_length: state.settings.min_query_length,
        refresh_interval_secs: state.settings.refresh_interval_secs,
    })
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT,
    )
}

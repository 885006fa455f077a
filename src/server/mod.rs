//! Web server for the search dashboard.
//!
//! Serves the dashboard page, embedded static assets, and the JSON search
//! API the browser script talks to. All core logic (parse, search,
//! present) runs server-side; the script only handles input debouncing,
//! view-state switching, and table injection.

mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Settings;
use crate::feeds::FeedClient;
use crate::models::Dataset;
use crate::refresh;
use crate::store::DatasetStore;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<DatasetStore>>,
    /// Dataset of the most recent page/search request; the refresh cycle
    /// only re-fetches this one.
    pub active: Arc<RwLock<Dataset>>,
    pub client: FeedClient,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            store: Arc::new(RwLock::new(DatasetStore::new())),
            active: Arc::new(RwLock::new(Dataset::Harga)),
            client: FeedClient::new(&settings),
            settings: Arc::new(settings),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);

    // Warm the default dataset so the first search does not block on the
    // feed, then start the refresh cycle.
    let preload = state.clone();
    tokio::spawn(async move {
        if let Err(err) =
            refresh::ensure_loaded(&preload.client, &preload.store, Dataset::Harga).await
        {
            tracing::warn!("preloading harga failed: {err}");
        }
    });
    tokio::spawn(refresh::run(
        state.client.clone(),
        state.store.clone(),
        state.active.clone(),
        state.settings.refresh_interval(),
    ));

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

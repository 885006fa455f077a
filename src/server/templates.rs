//! HTML templates for the dashboard.

use serde_json::json;

use crate::config::Settings;

/// Render the dashboard page.
///
/// The page is a static shell; the browser script drives the four view
/// states (loading, empty, no-results, results) and fills the table from
/// the search API.
pub fn dashboard(settings: &Settings) -> String {
    let config = json!({
        "debounceMs": settings.debounce_ms,
        "minQueryLength": settings.min_query_length,
        "refreshIntervalSecs": settings.refresh_interval_secs,
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Harga &amp; Stok Material</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header id="main-header">
        <div class="brand">Harga &amp; Stok Material</div>
        <div class="mode-toggle">
            <button class="toggle-btn active" data-mode="harga">HARGA</button>
            <button class="toggle-btn" data-mode="stok">STOK</button>
        </div>
        <div class="status-line">
            <span>Mode: <strong id="currentMode">HARGA</strong></span>
            <span>Refresh dalam <span id="refreshCountdown"></span>s</span>
        </div>
    </header>
    <main>
        <input type="text" id="searchInput" autocomplete="off"
               placeholder="Ketik untuk mencari harga... (contoh: SS30)">
        <div id="loadingIndicator" class="state hidden">Memuat data...</div>
        <div id="emptyState" class="state">Mulai ketik untuk mencari.</div>
        <div id="noResults" class="state hidden">Tidak ada hasil untuk &quot;<span id="searchQuery"></span>&quot;</div>
        <div id="resultsTable" class="hidden">
            <div class="results-meta"><span id="resultsCount">0</span> hasil</div>
            <table>
                <thead id="tableHeader"></thead>
                <tbody id="tableBody"></tbody>
            </table>
        </div>
    </main>
    <script>
        window.DASHBOARD_CONFIG = {config};
    </script>
    <script src="/static/app.js"></script>
</body>
</html>"#
    )
}

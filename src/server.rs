use crate::cache::SnapshotCache;
use crate::page::{self, PageSnapshot};
use crate::render;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use chrono::Utc;
use league_api::SourceData;
use league_api::client::LeagueApi;
use std::sync::Arc;
use tracing::{error, warn};

/// Shared application state: the upstream client plus the one cache slot.
/// Constructed once at startup and passed to the handler explicitly.
pub struct Hub {
    api: LeagueApi,
    cache: SnapshotCache,
}

impl Hub {
    pub fn new() -> Self {
        Self { api: LeagueApi::new(), cache: SnapshotCache::new() }
    }

    /// The page model for the current request: cached while fresh, otherwise
    /// recomputed from all four upstreams under the cache lock. Runs on a
    /// detached task: a client disconnect must not cancel in-flight upstream
    /// fetches or release the cache lock mid-recompute.
    pub async fn page(self: Arc<Self>) -> PageSnapshot {
        let hub = self;
        let task = tokio::spawn(async move {
            let api = hub.api.clone();
            hub.cache
                .get_or_refresh(move || async move {
                    let sources = api.fetch_all().await;
                    log_source_failures(&sources);
                    page::build_snapshot(sources, Utc::now())
                })
                .await
        });

        match task.await {
            Ok(page) => page,
            Err(e) => {
                error!("page task failed: {e}");
                PageSnapshot::default()
            }
        }
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

// A dead upstream blanks its page section, nothing more; keep a trace of it.
fn log_source_failures(sources: &SourceData) {
    if let Err(e) = &sources.roster {
        warn!("roster fetch failed: {e}");
    }
    if let Err(e) = &sources.schedule {
        warn!("schedule fetch failed: {e}");
    }
    if let Err(e) = &sources.standings {
        warn!("standings fetch failed: {e}");
    }
    if let Err(e) = &sources.forecast {
        warn!("forecast fetch failed: {e}");
    }
}

pub fn router(hub: Arc<Hub>) -> Router {
    Router::new().route("/", get(home)).with_state(hub)
}

async fn home(State(hub): State<Arc<Hub>>) -> Response {
    let data = hub.page().await;
    page_response(&data)
}

/// Rendering is the only failure surfaced to the client, as plain text.
fn page_response(data: &PageSnapshot) -> Response {
    match render::render_page(data) {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Template Error: {e}")).into_response(),
    }
}

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use kinoteka_browse::{ListState, SortKey, transform};
use kinoteka_core::ItemKind;

use crate::error::AppError;
use crate::state::AppState;
use crate::views;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(library_page))
        .route("/item/{id}", get(item_page))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Raw list-page query parameters. Every field is optional and malformed
/// values fall back to defaults, never to an error.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub kind: Option<String>,
    pub sort: Option<String>,
    // Kept as a string so a malformed value falls back instead of
    // rejecting the whole request.
    pub page: Option<String>,
}

impl ListQuery {
    pub fn into_state(self) -> ListState {
        ListState::new(
            self.q.unwrap_or_default(),
            self.kind.as_deref().and_then(ItemKind::parse),
            self.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
            self.page.and_then(|p| p.parse().ok()).unwrap_or(1),
        )
    }
}

async fn library_page(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let items = state.source.fetch_library(state.library_limit).await?;
    let list_state = query.into_state();
    let page = transform(&items, &list_state);
    Ok(Html(views::library_page(&list_state, &page)))
}

async fn item_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id: u64 = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid item id: {id}")))?;
    let item = state.source.fetch_item(id).await?;
    Ok(Html(views::item_page(&item)))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

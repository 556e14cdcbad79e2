//! Axum route handlers for the checklist API.

use crate::dashboard;
use crate::history::{self, HistoryAggregator};
use crate::items::ItemStore;
use crate::notes::NoteStore;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use checklist_types::*;
use std::sync::Arc;
use std::time::Instant;

pub struct AppState {
    pub items: ItemStore,
    pub notes: NoteStore,
    pub start_time: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            items: ItemStore::new(),
            notes: NoteStore::new(),
            start_time: Instant::now(),
        }
    }

    pub fn history(&self) -> HistoryAggregator<'_> {
        HistoryAggregator::new(&self.items, &self.notes)
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", axum::routing::patch(update_item).delete(delete_item))
        .route("/history", get(history_summary))
        .route("/history/:date", get(history_detail).patch(upsert_note))
        .route("/rpc/status", get(status))
        .with_state(state)
        .layer(cors)
}

// GET /items
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<RpcResponse<Vec<ChecklistItem>>>) {
    (StatusCode::OK, Json(RpcResponse::ok(state.items.list())))
}

// POST /items
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateItemRequest>,
) -> (StatusCode, Json<RpcResponse<ChecklistItem>>) {
    match state.items.create(&req.title) {
        Ok(item) => (StatusCode::CREATED, Json(RpcResponse::ok(item))),
        Err(e) => (e.status_code(), Json(RpcResponse::err(e.to_string()))),
    }
}

// PATCH /items/:id
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateItemRequest>,
) -> (StatusCode, Json<RpcResponse<ChecklistItem>>) {
    match state.items.update(&id, req.title.as_deref(), req.done) {
        Ok(item) => (StatusCode::OK, Json(RpcResponse::ok(item))),
        Err(e) => (e.status_code(), Json(RpcResponse::err(e.to_string()))),
    }
}

// DELETE /items/:id
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<RpcResponse<bool>>) {
    match state.items.delete(&id) {
        Ok(removed) => (StatusCode::OK, Json(RpcResponse::ok(removed))),
        Err(e) => (e.status_code(), Json(RpcResponse::err(e.to_string()))),
    }
}

// GET /history
pub async fn history_summary(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<RpcResponse<Vec<HistorySummary>>>) {
    (StatusCode::OK, Json(RpcResponse::ok(state.history().summary())))
}

// GET /history/:date
pub async fn history_detail(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> (StatusCode, Json<RpcResponse<DayDetail>>) {
    if let Err(e) = history::validate_date_key(&date) {
        return (e.status_code(), Json(RpcResponse::err(e.to_string())));
    }
    (
        StatusCode::OK,
        Json(RpcResponse::ok(state.history().detail_for_date(&date))),
    )
}

// PATCH /history/:date
pub async fn upsert_note(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
    Json(req): Json<UpsertNoteRequest>,
) -> (StatusCode, Json<RpcResponse<DailyNote>>) {
    if let Err(e) = history::validate_date_key(&date) {
        return (e.status_code(), Json(RpcResponse::err(e.to_string())));
    }

    let note = req.note.as_deref().map(str::trim).unwrap_or_default();
    let note = state.notes.upsert(&date, note);
    (StatusCode::OK, Json(RpcResponse::ok(DailyNote { date, note })))
}

// GET /rpc/status
pub async fn status(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<RpcResponse<ServiceStatus>>) {
    (
        StatusCode::OK,
        Json(RpcResponse::ok(ServiceStatus {
            running: true,
            uptime_secs: state.start_time.elapsed().as_secs(),
            total_items: state.items.len(),
            completed_items: state.items.completed_count(),
            notes: state.notes.len(),
        })),
    )
}

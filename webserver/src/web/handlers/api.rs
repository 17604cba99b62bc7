//! REST API handlers
//!
//! Request bodies are rejected with the same JSON error shape the planner
//! errors use, so clients only have one error format to handle.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};

use planner::DeletionReport;
use shared::{process_debug, DailyRequest, DailyResponse, ItemId, OutfitRecord, ProcessId, WeeklyRequest, WeeklyResponse};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> WebServerResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| WebServerError::InvalidRequest {
            details: rejection.body_text(),
        })
}

/// Get service status - /api/status
pub async fn get_status(State(state): State<AppState>) -> Json<Value> {
    let settings = state.planner.settings();
    Json(json!({
        "status": "ok",
        "data": {
            "server_status": "running",
            "uptime_seconds": state.uptime_seconds(),
            "horizon_days": settings.horizon_days,
            "max_alternatives": settings.max_alternatives,
            "unknown_items": settings.unknown_items.to_string(),
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Outfit history - GET /api/outfits
pub async fn list_outfits(State(state): State<AppState>) -> WebServerResult<Json<Vec<OutfitRecord>>> {
    Ok(Json(state.planner.list_outfits().await?))
}

/// Daily outfit - POST /api/outfits/daily
pub async fn plan_daily(
    State(state): State<AppState>,
    payload: Result<Json<DailyRequest>, JsonRejection>,
) -> WebServerResult<Json<DailyResponse>> {
    let request = body(payload)?;
    process_debug!(ProcessId::current(), "📨 Daily request with strategy {}", request.strategy);
    Ok(Json(state.planner.plan_daily(request).await?))
}

/// Weekly plan - POST /api/outfits/weekly
pub async fn plan_weekly(
    State(state): State<AppState>,
    payload: Result<Json<WeeklyRequest>, JsonRejection>,
) -> WebServerResult<Json<WeeklyResponse>> {
    let request = body(payload)?;
    Ok(Json(state.planner.plan_weekly(request).await?))
}

/// Delete a wardrobe item - DELETE /api/items/:id
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebServerResult<Json<DeletionReport>> {
    Ok(Json(state.planner.delete_item(&ItemId::from(id)).await?))
}

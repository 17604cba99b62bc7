//! Router construction

pub mod handlers;

use axum::routing::{delete, get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use handlers::api;

/// Build the Axum router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(api::get_status))
        .route("/api/outfits", get(api::list_outfits))
        .route("/api/outfits/daily", post(api::plan_daily))
        .route("/api/outfits/weekly", post(api::plan_weekly))
        .route("/api/items/:id", delete(api::delete_item))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(state)
}

//! HTTP surface for the outfit planner
//!
//! Exposes daily and weekly planning, outfit history and wardrobe item
//! deletion as a small JSON API over a shared planner instance.

pub mod error;
pub mod state;
pub mod web;

pub use error::{WebServerError, WebServerResult};
pub use state::AppState;
pub use web::build_router;

//! API routes for the eco-report server.

pub mod report;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/eco-report", get(report::eco_report))
}

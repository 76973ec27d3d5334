//! The eco-report endpoint.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use eco_core::cities;

use crate::report::build_report;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// City registry key; unknown values fall back to the default city.
    pub city: Option<String>,
    /// Range token; unknown values fall back to 7 days.
    pub range: Option<String>,
}

pub async fn eco_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let profile = cities::resolve(query.city.as_deref().unwrap_or(cities::DEFAULT_CITY_KEY));
    let range = query.range.unwrap_or_else(|| "7days".to_string());

    match build_report(&state, profile, &range).await {
        Ok(report) => Json(report).into_response(),
        Err(err) => {
            tracing::error!("eco report failed for {}: {}", profile.name, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": err.to_string(),
                    "city": profile.name,
                })),
            )
                .into_response()
        }
    }
}

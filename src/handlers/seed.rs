//! HTTP handler for the seed/bootstrap utility

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::error::AppResult;
use crate::services::seed::SeedService;
use crate::AppState;

/// Response for the seed endpoint
#[derive(Serialize)]
pub struct SeedResponse {
    pub message: String,
    pub company_id: i64,
}

/// Destructively reset storage and insert the demo fixture
pub async fn seed_database(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<SeedResponse>)> {
    let service = SeedService::new(state.db);
    let company_id = service.reset_and_seed().await?;
    Ok((
        StatusCode::CREATED,
        Json(SeedResponse {
            message: "Database seeded with test data".to_string(),
            company_id,
        }),
    ))
}

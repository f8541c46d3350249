use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::request::MatchRequestRow;
use crate::requests::history::{clamp_limit, get_by_id, list_recent};
use crate::requests::stats::{load_request_stats, RequestStats};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/requests
pub async fn handle_list_requests(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<MatchRequestRow>>, AppError> {
    let rows = list_recent(&state.db, clamp_limit(params.limit)).await?;
    Ok(Json(rows))
}

/// GET /api/v1/requests/stats
pub async fn handle_request_stats(
    State(state): State<AppState>,
) -> Result<Json<RequestStats>, AppError> {
    Ok(Json(load_request_stats(&state.db).await?))
}

/// GET /api/v1/requests/:id
pub async fn handle_get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchRequestRow>, AppError> {
    let row = get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match request {id} not found")))?;
    Ok(Json(row))
}

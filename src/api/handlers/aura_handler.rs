//! Aura API Handlers
//!
//! Read endpoints over per-user aura records.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{
        app_state::AppState,
        dto::aura_dto::{AuraResponse, ListAuraParams, ListAuraResponse},
    },
    error::AppError,
};

/// Get a user's aura record
///
/// GET /api/v1/aura/:user_id
pub async fn get_aura(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting aura for user: {}", user_id);

    let record = state
        .aura_aggregator
        .get(&user_id)
        .await?
        .filter(|r| r.has_aura())
        .ok_or_else(|| AppError::NotFound(format!("No recorded aura for user: {}", user_id)))?;

    Ok(Json(AuraResponse::from(record)))
}

/// List aura records ordered by points
///
/// GET /api/v1/aura
pub async fn list_aura(
    State(state): State<AppState>,
    Query(params): Query<ListAuraParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.unwrap_or(20).clamp(1, 100);
    let start = params.start.unwrap_or(0);
    debug!("Listing aura records, limit: {}, start: {}", limit, start);

    let records = state.aura_aggregator.list(limit, start).await?;
    let total = state.repositories.aura.count().await?;

    let response = ListAuraResponse {
        records: records.into_iter().map(AuraResponse::from).collect(),
        total,
    };

    Ok(Json(response))
}

//! Experience-granting routes

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{ApiResult, DbResultExt, OptionExt};
use crate::state::AppState;
use common::models::UserProgression;

#[derive(Deserialize)]
pub struct GrantExperienceRequest {
    pub amount: i64,
}

/// Grant experience to a user; creates the progression row on first grant
pub async fn grant(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(body): Json<GrantExperienceRequest>,
) -> ApiResult<Json<UserProgression>> {
    db::users::get_by_id(&state.pool, user_id)
        .await
        .db_err()?
        .not_found(format!("User {} not found", user_id))?;

    let progression = state
        .progression
        .grant_experience(user_id, body.amount)
        .await?;

    Ok(Json(progression))
}

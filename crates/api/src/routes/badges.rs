//! Badge routes

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiResult, DbResultExt, OptionExt};
use crate::state::AppState;
use common::models::{BadgeType, BadgeView, UserRole};
use engine::badges::resolve_awards;

#[derive(Deserialize)]
pub struct AwardBadgeRequest {
    pub badge_type: BadgeType,
}

#[derive(Serialize)]
pub struct AwardBadgeResponse {
    pub awarded: bool,
}

/// Award a badge to a user if not already held
pub async fn award(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(body): Json<AwardBadgeRequest>,
) -> ApiResult<Json<AwardBadgeResponse>> {
    db::users::get_by_id(&state.pool, user_id)
        .await
        .db_err()?
        .not_found(format!("User {} not found", user_id))?;

    let awarded = state
        .progression
        .check_and_award_badge(user_id, body.badge_type)
        .await?;

    Ok(Json(AwardBadgeResponse { awarded }))
}

/// List a user's badges, newest first, resolved against the catalog
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<BadgeView>>> {
    let awards = db::badges::list_for_user(&state.pool, user_id)
        .await
        .db_err()?;

    Ok(Json(resolve_awards(awards)))
}

/// Run all threshold badge checks for a user, returning newly awarded types
pub async fn check(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<BadgeType>>> {
    let user = db::users::get_by_id(&state.pool, user_id)
        .await
        .db_err()?
        .not_found(format!("User {} not found", user_id))?;

    let mut awarded = state.progression.check_feedback_badges(user_id).await?;
    awarded.extend(state.progression.check_community_badges(user_id).await?);
    if user.role == UserRole::Instructor {
        awarded.extend(state.progression.check_instructor_badges(user_id).await?);
    }

    Ok(Json(awarded))
}

//! Dashboard routes

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::error::{ApiResult, DbResultExt, OptionExt};
use crate::state::AppState;
use common::models::{InstructorDashboard, StudentDashboard};

pub async fn student(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<StudentDashboard>> {
    db::users::get_by_id(&state.pool, user_id)
        .await
        .db_err()?
        .not_found(format!("User {} not found", user_id))?;

    let dashboard = state.dashboards.student_dashboard(user_id).await?;

    Ok(Json(dashboard))
}

pub async fn instructor(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<InstructorDashboard>> {
    db::users::get_by_id(&state.pool, user_id)
        .await
        .db_err()?
        .not_found(format!("User {} not found", user_id))?;

    let dashboard = state.dashboards.instructor_dashboard(user_id).await?;

    Ok(Json(dashboard))
}

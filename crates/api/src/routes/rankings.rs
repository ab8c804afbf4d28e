//! Ranking routes

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::{RankingResponse, RankingType};

#[derive(Deserialize)]
pub struct RankingsQuery {
    #[serde(rename = "type", default = "default_type")]
    pub ranking_type: RankingType,
    /// Trailing window in days
    #[serde(default = "default_period_days")]
    pub period_days: i64,
    /// Caller's user id for the my_ranking lookup
    pub user_id: Option<i64>,
}

fn default_type() -> RankingType {
    RankingType::StudentActivity
}

fn default_period_days() -> i64 {
    30
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RankingsQuery>,
) -> ApiResult<Json<RankingResponse>> {
    let response = state
        .rankings
        .get_rankings(query.ranking_type, query.period_days, query.user_id)
        .await?;

    Ok(Json(response))
}

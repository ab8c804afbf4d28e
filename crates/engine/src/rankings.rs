//! Leaderboard composition

use chrono::{Duration, Utc};
use common::models::{RankingDetails, RankingEntry, RankingResponse, RankingType};
use db::rankings::{InstructorActivityRow, StudentActivityRow};
use sqlx::PgPool;

use crate::scoring;

/// Leaderboards are capped at the top 50 entries
pub const RANKING_CAP: usize = 50;

/// Score, order, and cap student activity rows into ranked entries.
///
/// Zero scorers are dropped; the sort is stable so ties keep storage order.
pub fn compose_student_entries(rows: Vec<StudentActivityRow>) -> Vec<RankingEntry> {
    let mut scored: Vec<(i64, StudentActivityRow)> = rows
        .into_iter()
        .map(|r| {
            (
                scoring::student_score(r.feedback_count, r.post_count, r.comment_count, r.like_count),
                r,
            )
        })
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(RANKING_CAP)
        .enumerate()
        .map(|(idx, (score, r))| RankingEntry {
            rank: idx as i32 + 1,
            user_id: r.user_id,
            name: r.name,
            nickname: r.nickname,
            profile_image: r.profile_image,
            level: r.level,
            score,
            details: RankingDetails {
                feedback_count: r.feedback_count,
                post_count: r.post_count,
                like_count: r.like_count,
                comment_count: Some(r.comment_count),
                student_count: None,
            },
        })
        .collect()
}

/// Score, order, and cap instructor activity rows into ranked entries
pub fn compose_instructor_entries(rows: Vec<InstructorActivityRow>) -> Vec<RankingEntry> {
    let mut scored: Vec<(i64, InstructorActivityRow)> = rows
        .into_iter()
        .map(|r| {
            (
                scoring::instructor_score(r.student_count, r.feedback_count, r.post_count, r.like_count),
                r,
            )
        })
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(RANKING_CAP)
        .enumerate()
        .map(|(idx, (score, r))| RankingEntry {
            rank: idx as i32 + 1,
            user_id: r.user_id,
            name: r.name,
            nickname: r.nickname,
            profile_image: r.profile_image,
            level: r.level,
            score,
            details: RankingDetails {
                feedback_count: r.feedback_count,
                post_count: r.post_count,
                like_count: r.like_count,
                comment_count: None,
                student_count: Some(r.student_count),
            },
        })
        .collect()
}

/// Find the caller inside the capped slice, if present
pub fn find_my_ranking(entries: &[RankingEntry], user_id: Option<i64>) -> Option<RankingEntry> {
    let user_id = user_id?;
    entries.iter().find(|e| e.user_id == user_id).cloned()
}

/// Produces leaderboards
pub struct RankingService {
    pool: PgPool,
}

impl RankingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Compose a leaderboard over the trailing `period_days` window.
    ///
    /// `my_ranking` is only populated when the caller appears within the
    /// top-50 cap; no global rank is computed outside it.
    pub async fn get_rankings(
        &self,
        ranking_type: RankingType,
        period_days: i64,
        current_user_id: Option<i64>,
    ) -> Result<RankingResponse, common::Error> {
        if period_days <= 0 {
            return Err(common::Error::InvalidInput(format!(
                "period_days must be positive, got {}",
                period_days
            )));
        }

        let since = Utc::now() - Duration::days(period_days);

        let rankings = match ranking_type {
            RankingType::InstructorPopular => {
                let rows = db::rankings::instructor_activity(&self.pool, since)
                    .await
                    .map_err(|e| common::Error::Database(e.to_string()))?;
                compose_instructor_entries(rows)
            }
            // STUDENT_ACTIVITY, FEEDBACK_RECEIVER, and COMMUNITY_CONTRIBUTOR
            // share the student score source
            _ => {
                let rows = db::rankings::student_activity(&self.pool, since)
                    .await
                    .map_err(|e| common::Error::Database(e.to_string()))?;
                compose_student_entries(rows)
            }
        };

        let my_ranking = find_my_ranking(&rankings, current_user_id);

        Ok(RankingResponse {
            ranking_type,
            period_days,
            rankings,
            my_ranking,
        })
    }
}

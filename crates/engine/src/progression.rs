//! Experience granting and badge awarding

use chrono::Utc;
use common::models::{BadgeType, UserProgression};
use sqlx::PgPool;
use tracing::info;

use crate::badges::badge_display;
use crate::leveling;

/// Badge persistence operations behind the award flow.
///
/// The Postgres implementation delegates to the badge_awards table; tests
/// substitute an in-memory set with the same conflict semantics.
pub(crate) trait BadgeStore {
    async fn has_badge(&self, user_id: i64, badge_type: &str) -> Result<bool, common::Error>;
    async fn award(
        &self,
        user_id: i64,
        badge_type: &str,
        description: &str,
    ) -> Result<bool, common::Error>;
}

impl BadgeStore for PgPool {
    async fn has_badge(&self, user_id: i64, badge_type: &str) -> Result<bool, common::Error> {
        db::badges::has_badge(self, user_id, badge_type)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))
    }

    async fn award(
        &self,
        user_id: i64,
        badge_type: &str,
        description: &str,
    ) -> Result<bool, common::Error> {
        db::badges::award(self, user_id, badge_type, description)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))
    }
}

/// Award a badge if not already held, returns true if newly awarded.
///
/// The existence check is advisory; the store's insert-on-conflict handling
/// is what makes concurrent identical calls safe.
pub(crate) async fn try_award<S: BadgeStore>(
    store: &S,
    user_id: i64,
    badge: BadgeType,
) -> Result<bool, common::Error> {
    if store.has_badge(user_id, badge.as_str()).await? {
        return Ok(false);
    }

    let (_, description) = badge_display(badge.as_str());
    let created = store.award(user_id, badge.as_str(), description).await?;

    if created {
        info!("Badge awarded: {} for user {}", badge.as_str(), user_id);
    }
    Ok(created)
}

/// Grants experience and awards badges
pub struct ProgressionService {
    pool: PgPool,
}

impl ProgressionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Grant experience to a user, updating level and streak state.
    ///
    /// The progression row is created lazily on the first grant. Negative
    /// amounts are rejected; a zero amount still counts as activity for the
    /// streak.
    pub async fn grant_experience(
        &self,
        user_id: i64,
        amount: i64,
    ) -> Result<UserProgression, common::Error> {
        if amount < 0 {
            return Err(common::Error::InvalidInput(format!(
                "experience amount must not be negative, got {}",
                amount
            )));
        }

        let mut prog = match db::progression::get(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?
        {
            Some(p) => p,
            None => db::progression::create_default(&self.pool, user_id)
                .await
                .map_err(|e| common::Error::Database(e.to_string()))?,
        };

        prog.experience = leveling::apply_experience(prog.experience, amount);

        let new_level = leveling::level_for_experience(prog.experience);
        let mut reached_legend = false;
        if new_level > prog.level {
            info!("User {} leveled up: {} -> {}", user_id, prog.level, new_level);
            prog.level = new_level;
            reached_legend = new_level >= leveling::LEGEND_LEVEL;
        }

        let today = Utc::now().date_naive();
        let streak = leveling::advance_streak(
            prog.current_streak,
            prog.longest_streak,
            prog.last_activity_date,
            today,
        );
        prog.current_streak = streak.current;
        prog.longest_streak = streak.longest;
        prog.last_activity_date = Some(today);

        db::progression::update(&self.pool, &prog)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        if reached_legend {
            self.check_and_award_badge(user_id, BadgeType::Legend)
                .await?;
        }

        // Only the topmost satisfied streak tier is checked per grant
        if prog.current_streak >= 100 {
            self.check_and_award_badge(user_id, BadgeType::Streak100)
                .await?;
        } else if prog.current_streak >= 30 {
            self.check_and_award_badge(user_id, BadgeType::Streak30)
                .await?;
        } else if prog.current_streak >= 7 {
            self.check_and_award_badge(user_id, BadgeType::Streak7)
                .await?;
        }

        Ok(prog)
    }

    /// Award a badge if not already held, returns true if newly awarded.
    ///
    /// The existence check is advisory; the unique constraint on
    /// (user_id, badge_type) is what makes concurrent calls safe.
    pub async fn check_and_award_badge(
        &self,
        user_id: i64,
        badge: BadgeType,
    ) -> Result<bool, common::Error> {
        try_award(&self.pool, user_id, badge).await
    }

    /// Check feedback-count badge tiers for a student
    pub async fn check_feedback_badges(
        &self,
        user_id: i64,
    ) -> Result<Vec<BadgeType>, common::Error> {
        let count = db::feedback::count_received(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let mut awarded = Vec::new();
        for (threshold, badge) in [
            (1, BadgeType::FirstFeedback),
            (10, BadgeType::Feedback10),
            (50, BadgeType::Feedback50),
            (100, BadgeType::Feedback100),
        ] {
            if count >= threshold && self.check_and_award_badge(user_id, badge).await? {
                awarded.push(badge);
            }
        }

        Ok(awarded)
    }

    /// Check post and comment badge tiers
    pub async fn check_community_badges(
        &self,
        user_id: i64,
    ) -> Result<Vec<BadgeType>, common::Error> {
        let counts = db::community::counts_for_user(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let mut awarded = Vec::new();
        if counts.posts >= 10 && self.check_and_award_badge(user_id, BadgeType::Post10).await? {
            awarded.push(BadgeType::Post10);
        }
        if counts.comments >= 50
            && self
                .check_and_award_badge(user_id, BadgeType::Comment50)
                .await?
        {
            awarded.push(BadgeType::Comment50);
        }

        Ok(awarded)
    }

    /// Check instructor-reach badge tiers
    pub async fn check_instructor_badges(
        &self,
        user_id: i64,
    ) -> Result<Vec<BadgeType>, common::Error> {
        let today = Utc::now().date_naive();
        let (students, _) = db::lectures::distinct_student_counts(&self.pool, user_id, today)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let mut awarded = Vec::new();
        if students >= 10
            && self
                .check_and_award_badge(user_id, BadgeType::Students10)
                .await?
        {
            awarded.push(BadgeType::Students10);
        }
        if students >= 50
            && self
                .check_and_award_badge(user_id, BadgeType::Students50)
                .await?
        {
            awarded.push(BadgeType::Students50);
        }

        Ok(awarded)
    }
}

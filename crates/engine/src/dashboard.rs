//! Dashboard aggregation
//!
//! Pure read-and-compose over the activity tables; nothing here mutates
//! state, and absent progression rows are rendered as defaults without
//! being created.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use common::models::{
    CommunityActivity, FeedbackStats, InstructorCommunityStats, InstructorDashboard,
    InstructorFeedbackStats, InstructorLectureDetail, InstructorLectureStats, LectureDetail,
    LectureStats, PopularPost, StudentDashboard, StudentPerformance, UserProgression,
    WorkoutStats,
};
use db::community::PostLikeRow;
use sqlx::PgPool;

use crate::badges::resolve_awards;
use crate::leveling;

/// Days covered by the "recent" feedback count
const RECENT_WINDOW_DAYS: i64 = 30;

/// Like-count threshold for a post to qualify as popular
const POPULAR_LIKE_THRESHOLD: i64 = 10;

/// How many popular posts the instructor dashboard surfaces
const POPULAR_POST_LIMIT: usize = 5;

/// A lecture is active while it has no end date or has not yet ended
pub fn is_lecture_active(end_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    end_date.map_or(true, |d| d >= today)
}

/// Popular-post selection: filter by like threshold, take the first five in
/// input order. Deliberately not re-sorted by likes.
pub fn select_popular_posts(rows: Vec<PostLikeRow>) -> Vec<PopularPost> {
    rows.into_iter()
        .filter(|r| r.like_count >= POPULAR_LIKE_THRESHOLD)
        .take(POPULAR_POST_LIMIT)
        .map(|r| PopularPost {
            post_id: r.post_id,
            title: r.title,
            like_count: r.like_count,
        })
        .collect()
}

/// Integer average of total over the number of distinct active months
pub fn avg_per_month(total: i64, months: usize) -> i64 {
    if months == 0 {
        0
    } else {
        total / months as i64
    }
}

fn default_progression(user_id: i64, now: DateTime<Utc>) -> UserProgression {
    UserProgression {
        user_id,
        level: 1,
        experience: 0,
        current_streak: 0,
        longest_streak: 0,
        last_activity_date: None,
        updated_at: now,
    }
}

/// Composes dashboard views
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Student-facing summary of feedback, lectures, community activity,
    /// level state, and badges
    pub async fn student_dashboard(
        &self,
        user_id: i64,
    ) -> Result<StudentDashboard, common::Error> {
        let now = Utc::now();
        let today = now.date_naive();
        let recent_since = now - Duration::days(RECENT_WINDOW_DAYS);

        let counts = db::feedback::counts_received(&self.pool, user_id, recent_since)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;
        let monthly = db::feedback::monthly_received(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let feedback_stats = FeedbackStats {
            total: counts.total,
            personal: counts.personal,
            group: counts.group,
            recent: counts.recent,
            monthly,
        };

        let enrollments = db::lectures::enrollments_for_student(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let active = enrollments
            .iter()
            .filter(|e| is_lecture_active(e.end_date, today))
            .count() as i64;
        let first_enrolled_at = enrollments.first().map(|e| e.joined_at.date_naive());
        let days_since_first = first_enrolled_at.map(|d| (today - d).num_days());

        let lecture_stats = LectureStats {
            total: enrollments.len() as i64,
            active,
            first_enrolled_at,
            days_since_first,
            lectures: enrollments
                .into_iter()
                .map(|e| LectureDetail {
                    lecture_id: e.lecture_id,
                    title: e.title,
                    instructor_name: e.instructor_name,
                    active: is_lecture_active(e.end_date, today),
                })
                .collect(),
        };

        let community = db::community::counts_for_user(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;
        let posts_by_category = db::community::posts_by_category(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;
        let workout = db::community::workout_totals(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        // Omitted entirely when no workout-record posts exist
        let workout_stats = (workout.records > 0).then(|| WorkoutStats {
            records: workout.records,
            total_count: workout.total_count,
            total_distance: workout.total_distance,
            total_duration: workout.total_duration,
        });

        let community_activity = CommunityActivity {
            posts: community.posts,
            comments: community.comments,
            likes_received: community.likes_received,
            bookmarks_received: community.bookmarks_received,
            posts_by_category,
            workout_stats,
        };

        let prog = db::progression::get(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?
            .unwrap_or_else(|| default_progression(user_id, now));
        let level_info = leveling::level_info(&prog);

        let awards = db::badges::list_for_user(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        Ok(StudentDashboard {
            feedback_stats,
            lecture_stats,
            community_activity,
            level_info,
            badges: resolve_awards(awards),
        })
    }

    /// Instructor-facing summary of lectures, feedback given, community
    /// reach, and per-student performance
    pub async fn instructor_dashboard(
        &self,
        user_id: i64,
    ) -> Result<InstructorDashboard, common::Error> {
        let now = Utc::now();
        let today = now.date_naive();
        let recent_since = now - Duration::days(RECENT_WINDOW_DAYS);

        let lectures = db::lectures::lectures_for_instructor(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;
        let (total_students, active_students) =
            db::lectures::distinct_student_counts(&self.pool, user_id, today)
                .await
                .map_err(|e| common::Error::Database(e.to_string()))?;

        let active_lectures = lectures
            .iter()
            .filter(|l| is_lecture_active(l.end_date, today))
            .count() as i64;

        let lecture_stats = InstructorLectureStats {
            total_lectures: lectures.len() as i64,
            active_lectures,
            total_students,
            active_students,
            lectures: lectures
                .into_iter()
                .map(|l| InstructorLectureDetail {
                    lecture_id: l.lecture_id,
                    title: l.title,
                    member_count: l.member_count,
                    created_at: l.created_at,
                    active: is_lecture_active(l.end_date, today),
                })
                .collect(),
        };

        let counts = db::feedback::counts_given(&self.pool, user_id, recent_since)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;
        let monthly = db::feedback::monthly_given(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let feedback_stats = InstructorFeedbackStats {
            total: counts.total,
            personal: counts.personal,
            group: counts.group,
            recent: counts.recent,
            avg_per_month: avg_per_month(counts.total, monthly.len()),
            monthly,
        };

        let community = db::community::counts_for_user(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;
        let tip_posts = db::community::count_posts_in_category(&self.pool, user_id, "TIP")
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;
        let posts = db::community::posts_with_like_counts(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let community_stats = InstructorCommunityStats {
            total_posts: community.posts,
            likes_received: community.likes_received,
            comments_received: community.comments_received,
            tip_posts,
            popular_posts: select_popular_posts(posts),
        };

        // One aggregation query per student; acceptable at lesson-group scale
        let students = db::lectures::distinct_students(&self.pool, user_id)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let mut student_performance = Vec::with_capacity(students.len());
        for s in students {
            let (feedback_count, last_feedback_at) =
                db::feedback::student_summary_for_instructor(&self.pool, user_id, s.user_id)
                    .await
                    .map_err(|e| common::Error::Database(e.to_string()))?;
            student_performance.push(StudentPerformance {
                user_id: s.user_id,
                name: s.name,
                joined_at: s.joined_at,
                lecture_title: s.lecture_title,
                feedback_count,
                last_feedback_at,
            });
        }
        student_performance.sort_by(|a, b| b.feedback_count.cmp(&a.feedback_count));

        Ok(InstructorDashboard {
            lecture_stats,
            feedback_stats,
            community_stats,
            student_performance,
        })
    }
}

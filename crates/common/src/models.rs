//! Domain models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A platform user (student or instructor)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Student,
    Instructor,
}

/// Per-user progression state, created lazily on the first experience grant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgression {
    pub user_id: i64,
    pub level: i32,
    pub experience: i64,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_activity_date: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

/// The closed set of badge types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BadgeType {
    #[serde(rename = "STREAK_7")]
    Streak7,
    #[serde(rename = "STREAK_30")]
    Streak30,
    #[serde(rename = "STREAK_100")]
    Streak100,
    #[serde(rename = "FIRST_FEEDBACK")]
    FirstFeedback,
    #[serde(rename = "FEEDBACK_10")]
    Feedback10,
    #[serde(rename = "FEEDBACK_50")]
    Feedback50,
    #[serde(rename = "FEEDBACK_100")]
    Feedback100,
    #[serde(rename = "POST_10")]
    Post10,
    #[serde(rename = "COMMENT_50")]
    Comment50,
    #[serde(rename = "STUDENTS_10")]
    Students10,
    #[serde(rename = "STUDENTS_50")]
    Students50,
    #[serde(rename = "LEGEND")]
    Legend,
}

impl BadgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeType::Streak7 => "STREAK_7",
            BadgeType::Streak30 => "STREAK_30",
            BadgeType::Streak100 => "STREAK_100",
            BadgeType::FirstFeedback => "FIRST_FEEDBACK",
            BadgeType::Feedback10 => "FEEDBACK_10",
            BadgeType::Feedback50 => "FEEDBACK_50",
            BadgeType::Feedback100 => "FEEDBACK_100",
            BadgeType::Post10 => "POST_10",
            BadgeType::Comment50 => "COMMENT_50",
            BadgeType::Students10 => "STUDENTS_10",
            BadgeType::Students50 => "STUDENTS_50",
            BadgeType::Legend => "LEGEND",
        }
    }
}

/// An awarded badge, at most one per (user, badge type)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeAward {
    pub user_id: i64,
    pub badge_type: String,
    pub description: String,
    pub earned_at: DateTime<Utc>,
}

/// A badge award resolved against the display catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeView {
    pub badge_type: String,
    pub name: String,
    pub description: String,
    pub earned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedbackType {
    Personal,
    Group,
}

/// Month-bucketed activity count, `month` formatted as `YYYY-MM`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyCount {
    pub month: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Received-feedback stats for the student dashboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedbackStats {
    pub total: i64,
    pub personal: i64,
    pub group: i64,
    pub recent: i64,
    pub monthly: Vec<MonthlyCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureDetail {
    pub lecture_id: i64,
    pub title: String,
    pub instructor_name: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LectureStats {
    pub total: i64,
    pub active: i64,
    pub first_enrolled_at: Option<NaiveDate>,
    pub days_since_first: Option<i64>,
    pub lectures: Vec<LectureDetail>,
}

/// Aggregated workout data from WORKOUT_RECORD posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutStats {
    pub records: i64,
    pub total_count: i64,
    pub total_distance: i64,
    pub total_duration: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CommunityActivity {
    pub posts: i64,
    pub comments: i64,
    pub likes_received: i64,
    pub bookmarks_received: i64,
    pub posts_by_category: Vec<CategoryCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_stats: Option<WorkoutStats>,
}

/// Level info re-expressed within the current 100-point level band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelInfo {
    pub current_level: i32,
    pub current_level_exp: i64,
    pub exp_to_next_level: i64,
    pub progress: i64,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub level_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDashboard {
    pub feedback_stats: FeedbackStats,
    pub lecture_stats: LectureStats,
    pub community_activity: CommunityActivity,
    pub level_info: LevelInfo,
    pub badges: Vec<BadgeView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorLectureDetail {
    pub lecture_id: i64,
    pub title: String,
    pub member_count: i64,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InstructorLectureStats {
    pub total_lectures: i64,
    pub active_lectures: i64,
    pub total_students: i64,
    pub active_students: i64,
    pub lectures: Vec<InstructorLectureDetail>,
}

/// Given-feedback stats for the instructor dashboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InstructorFeedbackStats {
    pub total: i64,
    pub personal: i64,
    pub group: i64,
    pub recent: i64,
    pub monthly: Vec<MonthlyCount>,
    pub avg_per_month: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularPost {
    pub post_id: i64,
    pub title: String,
    pub like_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InstructorCommunityStats {
    pub total_posts: i64,
    pub likes_received: i64,
    pub comments_received: i64,
    pub tip_posts: i64,
    pub popular_posts: Vec<PopularPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentPerformance {
    pub user_id: i64,
    pub name: String,
    pub joined_at: DateTime<Utc>,
    pub lecture_title: String,
    pub feedback_count: i64,
    pub last_feedback_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorDashboard {
    pub lecture_stats: InstructorLectureStats,
    pub feedback_stats: InstructorFeedbackStats,
    pub community_stats: InstructorCommunityStats,
    pub student_performance: Vec<StudentPerformance>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankingType {
    StudentActivity,
    InstructorPopular,
    CommunityContributor,
    FeedbackReceiver,
}

/// Per-type activity counts backing a ranking entry's score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RankingDetails {
    pub feedback_count: i64,
    pub post_count: i64,
    pub like_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<i64>,
}

/// Leaderboard entry, computed fresh per ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: i32,
    pub user_id: i64,
    pub name: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub level: i32,
    pub score: i64,
    pub details: RankingDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    pub ranking_type: RankingType,
    pub period_days: i64,
    pub rankings: Vec<RankingEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_ranking: Option<RankingEntry>,
}

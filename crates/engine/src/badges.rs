//! Badge display catalog

use common::models::{BadgeAward, BadgeView};

/// Fallback display pair for badge type strings not in the catalog
pub const GENERIC_BADGE: (&str, &str) = ("특별 배지", "특별한 활동으로 획득한 배지예요");

/// Display name and description for a badge type string.
///
/// Unknown types resolve to the generic pair rather than failing, so stale
/// rows written under a retired type still render.
pub fn badge_display(badge_type: &str) -> (&'static str, &'static str) {
    match badge_type {
        "STREAK_7" => ("일주일 개근", "7일 연속으로 활동했어요"),
        "STREAK_30" => ("한 달 개근", "30일 연속으로 활동했어요"),
        "STREAK_100" => ("백일 개근", "100일 연속으로 활동했어요"),
        "FIRST_FEEDBACK" => ("첫 피드백", "첫 피드백을 받았어요"),
        "FEEDBACK_10" => ("피드백 수집가", "피드백을 10회 받았어요"),
        "FEEDBACK_50" => ("피드백 애호가", "피드백을 50회 받았어요"),
        "FEEDBACK_100" => ("피드백 마니아", "피드백을 100회 받았어요"),
        "POST_10" => ("커뮤니티 활동가", "게시글을 10개 작성했어요"),
        "COMMENT_50" => ("소통왕", "댓글을 50개 작성했어요"),
        "STUDENTS_10" => ("인기 강사", "수강생 10명을 지도했어요"),
        "STUDENTS_50" => ("스타 강사", "수강생 50명을 지도했어요"),
        "LEGEND" => ("수영 레전드", "레벨 50에 도달했어요"),
        _ => GENERIC_BADGE,
    }
}

/// Resolve stored awards against the catalog
pub fn resolve_awards(awards: Vec<BadgeAward>) -> Vec<BadgeView> {
    awards
        .into_iter()
        .map(|a| {
            let (name, description) = badge_display(&a.badge_type);
            BadgeView {
                badge_type: a.badge_type,
                name: name.to_string(),
                description: description.to_string(),
                earned_at: a.earned_at,
            }
        })
        .collect()
}

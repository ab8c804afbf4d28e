#[cfg(test)]
mod tests {
    use crate::badges::*;
    use chrono::Utc;
    use common::models::{BadgeAward, BadgeType};

    #[test]
    fn test_every_badge_type_has_catalog_entry() {
        let all = [
            BadgeType::Streak7,
            BadgeType::Streak30,
            BadgeType::Streak100,
            BadgeType::FirstFeedback,
            BadgeType::Feedback10,
            BadgeType::Feedback50,
            BadgeType::Feedback100,
            BadgeType::Post10,
            BadgeType::Comment50,
            BadgeType::Students10,
            BadgeType::Students50,
            BadgeType::Legend,
        ];
        for badge in all {
            let (name, description) = badge_display(badge.as_str());
            assert_ne!((name, description), GENERIC_BADGE, "missing: {}", badge.as_str());
        }
    }

    #[test]
    fn test_unknown_badge_type_falls_back_to_generic() {
        assert_eq!(badge_display("RETIRED_BADGE"), GENERIC_BADGE);
        assert_eq!(badge_display(""), GENERIC_BADGE);
    }

    #[test]
    fn test_streak_badge_display() {
        let (name, _) = badge_display("STREAK_7");
        assert_eq!(name, "일주일 개근");
    }

    #[test]
    fn test_resolve_awards_uses_catalog() {
        let awards = vec![
            BadgeAward {
                user_id: 1,
                badge_type: "LEGEND".to_string(),
                description: "stale stored text".to_string(),
                earned_at: Utc::now(),
            },
            BadgeAward {
                user_id: 1,
                badge_type: "NO_SUCH_TYPE".to_string(),
                description: String::new(),
                earned_at: Utc::now(),
            },
        ];

        let views = resolve_awards(awards);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].name, "수영 레전드");
        assert_eq!(views[0].description, "레벨 50에 도달했어요");
        assert_eq!(views[1].name, GENERIC_BADGE.0);
    }
}

#[cfg(test)]
mod tests {
    use crate::leveling::*;
    use chrono::{NaiveDate, Utc};
    use common::models::UserProgression;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_progression(level: i32, experience: i64) -> UserProgression {
        UserProgression {
            user_id: 1,
            level,
            experience,
            current_streak: 3,
            longest_streak: 5,
            last_activity_date: None,
            updated_at: Utc::now(),
        }
    }

    // level_for_experience tests
    #[test]
    fn test_level_at_zero_experience() {
        assert_eq!(level_for_experience(0), 1);
    }

    #[test]
    fn test_level_just_below_boundary() {
        assert_eq!(level_for_experience(99), 1);
    }

    #[test]
    fn test_level_at_boundary() {
        assert_eq!(level_for_experience(100), 2);
    }

    #[test]
    fn test_level_150_experience() {
        // New user granted 150 exp lands at level 2
        assert_eq!(level_for_experience(150), 2);
    }

    #[test]
    fn test_level_high_experience() {
        assert_eq!(level_for_experience(4900), 50);
        assert_eq!(level_for_experience(5000), 51);
    }

    // apply_experience tests
    #[test]
    fn test_apply_experience_adds() {
        assert_eq!(apply_experience(100, 50), 150);
        assert_eq!(apply_experience(0, 0), 0);
    }

    #[test]
    fn test_apply_experience_saturates_on_huge_grant() {
        assert_eq!(apply_experience(i64::MAX - 1, i64::MAX), i64::MAX);
        assert_eq!(apply_experience(i64::MAX, 1), i64::MAX);
    }

    // level_name boundary tests, six bands inclusive at the lower edge
    #[test]
    fn test_level_name_tier0_upper_edge() {
        assert_eq!(level_name(9), "초보 수영러");
    }

    #[test]
    fn test_level_name_tier1_lower_edge() {
        assert_eq!(level_name(10), "중급 수영러");
    }

    #[test]
    fn test_level_name_tier4_upper_edge() {
        assert_eq!(level_name(49), "수영 전문가");
    }

    #[test]
    fn test_level_name_tier5_lower_edge() {
        assert_eq!(level_name(50), "수영 레전드");
    }

    #[test]
    fn test_level_name_middle_bands() {
        assert_eq!(level_name(1), "초보 수영러");
        assert_eq!(level_name(20), "상급 수영러");
        assert_eq!(level_name(39), "수영 마스터");
        assert_eq!(level_name(120), "수영 레전드");
    }

    // advance_streak tests
    #[test]
    fn test_streak_first_ever_activity() {
        let update = advance_streak(0, 0, None, date(2026, 3, 10));
        assert_eq!(update.current, 1);
        assert_eq!(update.longest, 1);
    }

    #[test]
    fn test_streak_consecutive_day_increments() {
        let update = advance_streak(3, 5, Some(date(2026, 3, 9)), date(2026, 3, 10));
        assert_eq!(update.current, 4);
        assert_eq!(update.longest, 5);
    }

    #[test]
    fn test_streak_consecutive_day_bumps_longest() {
        let update = advance_streak(5, 5, Some(date(2026, 3, 9)), date(2026, 3, 10));
        assert_eq!(update.current, 6);
        assert_eq!(update.longest, 6);
    }

    #[test]
    fn test_streak_same_day_unchanged() {
        let update = advance_streak(3, 5, Some(date(2026, 3, 10)), date(2026, 3, 10));
        assert_eq!(update.current, 3);
        assert_eq!(update.longest, 5);
    }

    #[test]
    fn test_streak_broken_resets_current_only() {
        let update = advance_streak(3, 5, Some(date(2026, 3, 8)), date(2026, 3, 10));
        assert_eq!(update.current, 1);
        assert_eq!(update.longest, 5);
    }

    #[test]
    fn test_streak_long_gap_resets() {
        let update = advance_streak(30, 30, Some(date(2026, 1, 1)), date(2026, 3, 10));
        assert_eq!(update.current, 1);
        assert_eq!(update.longest, 30);
    }

    #[test]
    fn test_streak_clock_skew_treated_as_same_day() {
        // last_activity_date in the future leaves both counters untouched
        let update = advance_streak(3, 5, Some(date(2026, 3, 12)), date(2026, 3, 10));
        assert_eq!(update.current, 3);
        assert_eq!(update.longest, 5);
    }

    // level_info tests
    #[test]
    fn test_level_info_level_one() {
        let info = level_info(&make_progression(1, 50));
        assert_eq!(info.current_level, 1);
        assert_eq!(info.current_level_exp, 50);
        assert_eq!(info.exp_to_next_level, 50);
        assert_eq!(info.progress, 50);
        assert_eq!(info.level_name, "초보 수영러");
    }

    #[test]
    fn test_level_info_within_level_band() {
        let info = level_info(&make_progression(2, 150));
        assert_eq!(info.current_level_exp, 50);
        assert_eq!(info.progress, 50);
    }

    #[test]
    fn test_level_info_fresh_band() {
        let info = level_info(&make_progression(2, 100));
        assert_eq!(info.current_level_exp, 0);
        assert_eq!(info.progress, 0);
    }

    #[test]
    fn test_level_info_carries_streaks() {
        let info = level_info(&make_progression(1, 0));
        assert_eq!(info.current_streak, 3);
        assert_eq!(info.longest_streak, 5);
    }
}

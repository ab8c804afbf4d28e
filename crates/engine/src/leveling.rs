//! Pure level, tier, and streak computation

use chrono::NaiveDate;
use common::models::{LevelInfo, UserProgression};

/// Each level spans a 100-point experience band
pub const EXP_PER_LEVEL: i64 = 100;

/// Reaching this level triggers the LEGEND badge check
pub const LEGEND_LEVEL: i32 = 50;

/// Level derived from total experience: floor(exp / 100) + 1
pub fn level_for_experience(experience: i64) -> i32 {
    (experience / EXP_PER_LEVEL) as i32 + 1
}

/// Add a grant to an experience balance, saturating instead of overflowing
/// on caller-supplied extremes
pub fn apply_experience(experience: i64, amount: i64) -> i64 {
    experience.saturating_add(amount)
}

/// Human-readable tier name, six fixed bands inclusive at the lower edge
pub fn level_name(level: i32) -> &'static str {
    match level {
        ..=9 => "초보 수영러",
        10..=19 => "중급 수영러",
        20..=29 => "상급 수영러",
        30..=39 => "수영 마스터",
        40..=49 => "수영 전문가",
        _ => "수영 레전드",
    }
}

/// Streak counters after an activity today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub current: i32,
    pub longest: i32,
}

/// Advance streak counters for an activity on `today`.
///
/// Day difference 1 extends the streak, 0 leaves it unchanged, more than 1
/// resets the current streak. A last-activity date in the future (clock
/// skew) is treated as same-day. `longest` never decreases.
pub fn advance_streak(
    current: i32,
    longest: i32,
    last_activity: Option<NaiveDate>,
    today: NaiveDate,
) -> StreakUpdate {
    match last_activity {
        None => StreakUpdate {
            current: 1,
            longest: longest.max(1),
        },
        Some(last) => {
            let diff = (today - last).num_days();
            if diff == 1 {
                let current = current + 1;
                StreakUpdate {
                    current,
                    longest: longest.max(current),
                }
            } else if diff > 1 {
                StreakUpdate { current: 1, longest }
            } else {
                StreakUpdate { current, longest }
            }
        }
    }
}

/// Re-express progression as level info within the current 100-point band
pub fn level_info(prog: &UserProgression) -> LevelInfo {
    let level = prog.level as i64;
    let current_level_exp = prog.experience - (level - 1) * EXP_PER_LEVEL;
    let exp_to_next_level = level * EXP_PER_LEVEL - current_level_exp;
    let progress = current_level_exp * 100 / EXP_PER_LEVEL;

    LevelInfo {
        current_level: prog.level,
        current_level_exp,
        exp_to_next_level,
        progress,
        current_streak: prog.current_streak,
        longest_streak: prog.longest_streak,
        level_name: level_name(prog.level).to_string(),
    }
}

//! Streak calculation.
//!
//! A streak counts consecutive due-and-completed days. Days that are not due
//! are skipped, so a Mon/Wed/Fri habit is not penalized on Tuesday. Today is
//! forgiving: while the day is still running, an incomplete today neither
//! breaks the streak nor counts toward it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::date_range;
use crate::commitment::Commitment;
use crate::ledger::is_completed;
use crate::schedule::is_due;

/// Current and best streak for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

/// Streak ending at `today` (or at yesterday if today is still open).
///
/// Walks backward from `today` and stops at the first due day that was not
/// completed, other than `today` itself, or at the creation day.
pub fn current_streak(commitment: &Commitment, today: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = today;

    while day >= commitment.created_at {
        if is_due(commitment, day) {
            if is_completed(commitment, day) {
                count += 1;
            } else if day != today {
                break;
            }
        }
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

/// Longest streak between the creation day and `today`, same rules as
/// [`current_streak`]. Always at least the current streak.
pub fn longest_streak(commitment: &Commitment, today: NaiveDate) -> u32 {
    if today < commitment.created_at {
        return 0;
    }

    let span = (today - commitment.created_at).num_days() as usize + 1;
    let mut longest = 0;
    let mut run = 0;
    for day in date_range(today, span) {
        if !is_due(commitment, day) {
            continue;
        }
        if is_completed(commitment, day) {
            run += 1;
            longest = longest.max(run);
        } else if day != today {
            run = 0;
        }
    }
    longest
}

pub fn streak_summary(commitment: &Commitment, today: NaiveDate) -> StreakSummary {
    StreakSummary {
        current: current_streak(commitment, today),
        longest: longest_streak(commitment, today),
    }
}

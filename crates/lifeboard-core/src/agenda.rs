//! Per-commitment aggregate read by every dashboard layout.
//!
//! Views render an [`AgendaEntry`] however they like; none of them compute
//! due/done/streak state on their own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::commitment::Commitment;
use crate::ledger::is_completed;
use crate::progress::{weekly_progress, window_summary, DayProgress, WindowSummary};
use crate::schedule::is_due;
use crate::streak::{streak_summary, StreakSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEntry {
    pub id: String,
    pub name: String,
    pub due_today: bool,
    pub done_today: bool,
    pub streak: StreakSummary,
    pub window: Vec<DayProgress>,
    pub window_summary: WindowSummary,
}

impl AgendaEntry {
    pub fn for_commitment(
        commitment: &Commitment,
        today: NaiveDate,
        window_length: usize,
    ) -> Self {
        let window = weekly_progress(commitment, today, window_length);
        let window_summary = window_summary(&window);
        Self {
            id: commitment.id().to_string(),
            name: commitment.name.clone(),
            due_today: is_due(commitment, today),
            done_today: is_completed(commitment, today),
            streak: streak_summary(commitment, today),
            window,
            window_summary,
        }
    }

    /// Due today and not done yet.
    pub fn needs_attention(&self) -> bool {
        self.due_today && !self.done_today
    }
}

/// One entry per commitment, in input order.
pub fn build_agenda(
    commitments: &[Commitment],
    today: NaiveDate,
    window_length: usize,
) -> Vec<AgendaEntry> {
    commitments
        .iter()
        .map(|c| AgendaEntry::for_commitment(c, today, window_length))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduledDays;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_agenda_entries() {
        let water = Commitment::with_id("water", "Water", d(2024, 1, 1))
            .with_completed_dates([d(2024, 1, 8), d(2024, 1, 9)]);
        // 2024-01-09 is a Tuesday
        let gym = Commitment::with_id("gym", "Gym", d(2024, 1, 1))
            .with_schedule(ScheduledDays::from_indices([1, 3, 5]))
            .with_completed_dates([d(2024, 1, 8)]);

        let agenda = build_agenda(&[water, gym], d(2024, 1, 9), 7);
        assert_eq!(agenda.len(), 2);

        assert_eq!(agenda[0].id, "water");
        assert!(agenda[0].due_today);
        assert!(agenda[0].done_today);
        assert_eq!(agenda[0].streak.current, 2);
        assert!(!agenda[0].needs_attention());

        assert_eq!(agenda[1].id, "gym");
        assert!(!agenda[1].due_today);
        assert_eq!(agenda[1].streak.current, 1);
        assert_eq!(agenda[1].window.len(), 7);
        assert!(agenda[1].window.last().unwrap().is_today);
    }

    #[test]
    fn test_needs_attention() {
        let habit = Commitment::new("Read", d(2024, 1, 1));
        let entry = AgendaEntry::for_commitment(&habit, d(2024, 1, 2), 7);
        assert!(entry.needs_attention());
        assert_eq!(entry.window_summary.due, 2);
    }
}

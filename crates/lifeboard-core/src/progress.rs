//! Rolling compliance window for dashboards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::date_range;
use crate::commitment::Commitment;
use crate::ledger::is_completed;
use crate::schedule::is_due;

/// Window length used by every dashboard unless configured otherwise.
pub const DEFAULT_WINDOW_LENGTH: usize = 7;

/// One day of a compliance window.
///
/// `is_due` and `completed` are independent so a view can tell "not
/// scheduled" apart from "scheduled but missed". Both are `false` on days
/// before the commitment existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayProgress {
    pub date: NaiveDate,
    pub is_before_creation: bool,
    pub is_due: bool,
    pub completed: bool,
    pub is_today: bool,
}

/// How a single day should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Before the commitment existed; render as absent
    Hidden,
    /// Due and completed
    Done,
    /// Due in the past and not completed
    Missed,
    /// Due today and not completed yet
    Pending,
    /// Not scheduled
    Rest,
    /// Completed on a day that was not scheduled
    Extra,
}

impl DayProgress {
    pub fn status(&self) -> DayStatus {
        if self.is_before_creation {
            return DayStatus::Hidden;
        }
        match (self.is_due, self.completed) {
            (true, true) => DayStatus::Done,
            (true, false) if self.is_today => DayStatus::Pending,
            (true, false) => DayStatus::Missed,
            (false, true) => DayStatus::Extra,
            (false, false) => DayStatus::Rest,
        }
    }

    /// Single-character glyph for plain-text rendering.
    pub fn glyph(&self) -> char {
        match self.status() {
            DayStatus::Hidden => ' ',
            DayStatus::Done => '●',
            DayStatus::Missed => '✕',
            DayStatus::Pending => '○',
            DayStatus::Rest => '·',
            DayStatus::Extra => '+',
        }
    }
}

/// Per-day records for the `window_length` days ending at `end_date`.
///
/// `end_date` is the reference "today": its record, and only it, has
/// `is_today` set.
pub fn weekly_progress(
    commitment: &Commitment,
    end_date: NaiveDate,
    window_length: usize,
) -> Vec<DayProgress> {
    date_range(end_date, window_length)
        .map(|date| {
            let is_before_creation = date < commitment.created_at;
            DayProgress {
                date,
                is_before_creation,
                is_due: !is_before_creation && is_due(commitment, date),
                completed: !is_before_creation && is_completed(commitment, date),
                is_today: date == end_date,
            }
        })
        .collect()
}

/// Totals over a window, e.g. for a "3/5 this week" badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    /// Due days on or after creation
    pub due: u32,
    /// Due days that were completed
    pub completed: u32,
}

impl WindowSummary {
    /// Completion ratio in `0.0..=1.0`, `None` when nothing was due.
    pub fn rate(&self) -> Option<f64> {
        (self.due > 0).then(|| f64::from(self.completed) / f64::from(self.due))
    }
}

pub fn window_summary(days: &[DayProgress]) -> WindowSummary {
    days.iter()
        .filter(|day| !day.is_before_creation && day.is_due)
        .fold(WindowSummary::default(), |mut acc, day| {
            acc.due += 1;
            if day.completed {
                acc.completed += 1;
            }
            acc
        })
}

//! Schedule matching: which days a commitment is due on.
//!
//! [`is_due`] is the only definition of "due" in the crate. The streak
//! calculator, the weekly window and the agenda all go through it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::calendar::weekday_index;
use crate::commitment::Commitment;

const ALL_DAYS_MASK: u8 = 0b0111_1111;

/// Set of weekdays (0=Sunday ... 6=Saturday) a commitment is active on.
///
/// Always normalized: out-of-range indices are dropped, and both the empty
/// set and the full set become the single "every day" value. Serialized as
/// `null` for every day, otherwise as a sorted array of indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Vec<Number>>", into = "Option<Vec<u8>>")]
pub struct ScheduledDays {
    mask: u8,
}

impl ScheduledDays {
    /// Due on every day of the week.
    pub const fn every_day() -> Self {
        Self {
            mask: ALL_DAYS_MASK,
        }
    }

    /// Build from user-entered weekday indices.
    ///
    /// Indices outside `0..=6` are ignored rather than rejected.
    pub fn from_indices<I>(indices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        let mut mask = 0u8;
        for raw in indices {
            let raw = raw.into();
            match u8::try_from(raw) {
                Ok(day) if day <= 6 => mask |= 1 << day,
                _ => tracing::warn!("ignoring out-of-range weekday index {}", raw),
            }
        }
        if mask == 0 {
            Self::every_day()
        } else {
            Self { mask }
        }
    }

    /// True when no weekday is excluded.
    pub fn is_every_day(&self) -> bool {
        self.mask == ALL_DAYS_MASK
    }

    /// Whether the given Sunday-based weekday index is active.
    pub fn contains(&self, weekday: u8) -> bool {
        weekday <= 6 && self.mask & (1 << weekday) != 0
    }

    /// Active weekday indices in ascending order.
    pub fn indices(&self) -> Vec<u8> {
        (0..=6).filter(|day| self.contains(*day)).collect()
    }

    /// Number of active weekdays (1..=7).
    pub fn days_per_week(&self) -> u32 {
        self.mask.count_ones()
    }
}

impl Default for ScheduledDays {
    fn default() -> Self {
        Self::every_day()
    }
}

impl From<Option<Vec<Number>>> for ScheduledDays {
    fn from(value: Option<Vec<Number>>) -> Self {
        match value {
            Some(days) => Self::from_indices(days.iter().filter_map(whole_number)),
            None => Self::every_day(),
        }
    }
}

/// Any whole JSON number as `i64`. Values beyond `i64` saturate, so they
/// still land outside the weekday range and get dropped.
fn whole_number(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 => Some(value as i64),
        _ => {
            tracing::warn!("ignoring non-integer weekday index {}", number);
            None
        }
    }
}

impl From<ScheduledDays> for Option<Vec<u8>> {
    fn from(value: ScheduledDays) -> Self {
        if value.is_every_day() {
            None
        } else {
            Some(value.indices())
        }
    }
}

/// Whether `commitment` requires action on `date`.
///
/// Days before the commitment was created are never due.
pub fn is_due(commitment: &Commitment, date: NaiveDate) -> bool {
    if date < commitment.created_at {
        return false;
    }
    commitment.scheduled_days.contains(weekday_index(date))
}

/// The commitments from `commitments` that are due on `date`.
pub fn due_on(commitments: &[Commitment], date: NaiveDate) -> Vec<&Commitment> {
    commitments.iter().filter(|c| is_due(c, date)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn mon_wed_fri() -> Commitment {
        Commitment::new("Gym", d(2024, 1, 1))
            .with_schedule(ScheduledDays::from_indices([1, 3, 5]))
    }

    #[test]
    fn test_empty_and_full_sets_normalize_to_every_day() {
        let empty = ScheduledDays::from_indices(Vec::<i64>::new());
        let full = ScheduledDays::from_indices([0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(empty, ScheduledDays::every_day());
        assert_eq!(full, ScheduledDays::every_day());
        assert!(full.is_every_day());
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let days = ScheduledDays::from_indices([1, 7, -1, 99, 3]);
        assert_eq!(days.indices(), vec![1, 3]);

        // Nothing valid left means every day
        let garbage = ScheduledDays::from_indices([8, 9]);
        assert!(garbage.is_every_day());
    }

    #[test]
    fn test_serde_representation() {
        let days = ScheduledDays::from_indices([5, 1, 3, 3]);
        assert_eq!(serde_json::to_string(&days).unwrap(), "[1,3,5]");
        assert_eq!(
            serde_json::to_string(&ScheduledDays::every_day()).unwrap(),
            "null"
        );

        let parsed: ScheduledDays = serde_json::from_str("[0,1,2,3,4,5,6]").unwrap();
        assert!(parsed.is_every_day());
        let parsed: ScheduledDays = serde_json::from_str("[2, 12]").unwrap();
        assert_eq!(parsed.indices(), vec![2]);
    }

    #[test]
    fn test_deserialize_tolerates_any_number() {
        let parsed: ScheduledDays =
            serde_json::from_str("[1, 18446744073709551615, -9223372036854775808]").unwrap();
        assert_eq!(parsed.indices(), vec![1]);

        let parsed: ScheduledDays = serde_json::from_str("[3.0, 4.5, 1e300]").unwrap();
        assert_eq!(parsed.indices(), vec![3]);

        let parsed: ScheduledDays = serde_json::from_str("[18446744073709551615]").unwrap();
        assert!(parsed.is_every_day());
    }

    #[test]
    fn test_not_due_before_creation() {
        let habit = Commitment::new("Read", d(2024, 1, 10));
        assert!(!is_due(&habit, d(2024, 1, 9)));
        assert!(is_due(&habit, d(2024, 1, 10)));
    }

    #[test]
    fn test_due_only_on_scheduled_weekdays() {
        let habit = mon_wed_fri();
        // 2024-01-08 Mon, 09 Tue, 10 Wed, 12 Fri, 14 Sun
        assert!(is_due(&habit, d(2024, 1, 8)));
        assert!(!is_due(&habit, d(2024, 1, 9)));
        assert!(is_due(&habit, d(2024, 1, 10)));
        assert!(is_due(&habit, d(2024, 1, 12)));
        assert!(!is_due(&habit, d(2024, 1, 14)));
    }

    #[test]
    fn test_due_on_filters_list() {
        let every_day = Commitment::new("Water", d(2024, 1, 1));
        let gym = mon_wed_fri();
        let later = Commitment::new("Journal", d(2024, 2, 1));
        let all = vec![every_day, gym, later];

        let tuesday: Vec<_> = due_on(&all, d(2024, 1, 9))
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(tuesday, vec!["Water"]);

        let wednesday: Vec<_> = due_on(&all, d(2024, 1, 10))
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(wednesday, vec!["Water", "Gym"]);
    }
}

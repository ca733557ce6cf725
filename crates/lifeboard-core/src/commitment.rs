//! The commitment (habit) value type.
//!
//! A [`Commitment`] is a snapshot: engine functions take it by reference and
//! the only mutation primitive, [`toggle_completion`](crate::ledger::toggle_completion),
//! returns a new value instead of editing in place.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::ScheduledDays;
use crate::streak;

/// A recurring item tracked for daily compliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    pub(crate) id: String,
    /// Display label
    pub name: String,
    pub(crate) created_at: NaiveDate,
    #[serde(default)]
    pub(crate) scheduled_days: ScheduledDays,
    /// Serialized as a sorted array of `YYYY-MM-DD` keys.
    #[serde(default)]
    pub(crate) completed_dates: BTreeSet<NaiveDate>,
    /// Display cache, valid only for `streak_as_of`.
    #[serde(default)]
    pub(crate) current_streak: u32,
    #[serde(default)]
    pub(crate) streak_as_of: Option<NaiveDate>,
}

impl Commitment {
    /// Create a commitment with a fresh id, due every day, with an empty ledger.
    pub fn new(name: impl Into<String>, created_at: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, created_at)
    }

    /// Create a commitment with a caller-supplied id.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, created_at: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at,
            scheduled_days: ScheduledDays::every_day(),
            completed_dates: BTreeSet::new(),
            current_streak: 0,
            streak_as_of: None,
        }
    }

    /// Builder: restrict the commitment to the given weekdays.
    pub fn with_schedule(mut self, days: ScheduledDays) -> Self {
        self.set_schedule(days);
        self
    }

    /// Builder: seed the ledger with already-completed days.
    ///
    /// Days before `created_at` are dropped.
    pub fn with_completed_dates<I>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let created_at = self.created_at;
        self.completed_dates
            .extend(dates.into_iter().filter(|day| *day >= created_at));
        self.invalidate_streak();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    pub fn scheduled_days(&self) -> ScheduledDays {
        self.scheduled_days
    }

    /// Change the active weekdays. Invalidates the streak cache.
    pub fn set_schedule(&mut self, days: ScheduledDays) {
        self.scheduled_days = days;
        self.invalidate_streak();
    }

    /// Completed days in ascending order.
    pub fn completed_dates(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        self.completed_dates.iter().copied()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_dates.len()
    }

    /// The cached streak value. Zero while the cache is stale.
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Day the cached streak was computed for, `None` if stale.
    pub fn streak_as_of(&self) -> Option<NaiveDate> {
        self.streak_as_of
    }

    /// The cached streak, only if it was computed for `today`.
    pub fn cached_streak(&self, today: NaiveDate) -> Option<u32> {
        (self.streak_as_of == Some(today)).then_some(self.current_streak)
    }

    /// Recompute the cached streak for `today` and return it.
    pub fn refresh_streak(&mut self, today: NaiveDate) -> u32 {
        let value = streak::current_streak(self, today);
        tracing::debug!(
            "streak for {} as of {}: {}",
            self.id,
            today,
            value
        );
        self.current_streak = value;
        self.streak_as_of = Some(today);
        value
    }

    pub(crate) fn invalidate_streak(&mut self) {
        self.current_streak = 0;
        self.streak_as_of = None;
    }

    /// Restore invariants on a snapshot read from outside.
    ///
    /// Drops completed days before `created_at` and recomputes the streak
    /// cache for the day it claims to be valid for. A cached value with no
    /// such day is discarded. Returns the number of dropped days.
    pub fn sanitize(&mut self) -> usize {
        let before = self.completed_dates.len();
        let created_at = self.created_at;
        self.completed_dates.retain(|day| *day >= created_at);
        let dropped = before - self.completed_dates.len();
        if dropped > 0 {
            tracing::warn!(
                "dropped {} completion(s) before creation day {} for commitment {}",
                dropped,
                created_at,
                self.id
            );
        }

        if let Some(as_of) = self.streak_as_of {
            let stored = self.current_streak;
            let actual = self.refresh_streak(as_of);
            if stored != actual {
                tracing::warn!(
                    "cached streak for {} was {} but recomputes to {}",
                    self.id,
                    stored,
                    actual
                );
            }
        } else if self.current_streak != 0 {
            tracing::warn!(
                "discarding cached streak {} for {} with no reference day",
                self.current_streak,
                self.id
            );
            self.invalidate_streak();
        }
        dropped
    }
}

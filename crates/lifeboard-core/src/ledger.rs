//! Completion ledger queries and the single toggle primitive.
//!
//! The ledger does not look at the schedule: off-schedule days may be logged.
//! Only the streak calculator cares whether a completed day was due.

use chrono::NaiveDate;

use crate::commitment::Commitment;

/// Whether `date` was marked fulfilled. Pre-creation days never are.
pub fn is_completed(commitment: &Commitment, date: NaiveDate) -> bool {
    date >= commitment.created_at && commitment.completed_dates.contains(&date)
}

/// Flip the completion of `date`, returning the updated commitment.
///
/// Toggling the same day twice restores the original ledger. A day before
/// the commitment was created is left untouched. The returned value's
/// streak cache is stale until [`Commitment::refresh_streak`] runs.
pub fn toggle_completion(commitment: &Commitment, date: NaiveDate) -> Commitment {
    let mut next = commitment.clone();
    if date < next.created_at {
        tracing::debug!(
            "ignoring toggle of {} before creation day {} for {}",
            date,
            next.created_at,
            next.id
        );
        return next;
    }

    let now_completed = if next.completed_dates.remove(&date) {
        false
    } else {
        next.completed_dates.insert(date);
        true
    };
    tracing::debug!(
        "toggled {} on {}: completed={}",
        next.id,
        date,
        now_completed
    );
    next.invalidate_streak();
    next
}

/// Toggle `date` and refresh the streak cache for `today`.
pub fn toggle_completion_at(
    commitment: &Commitment,
    date: NaiveDate,
    today: NaiveDate,
) -> Commitment {
    let mut next = toggle_completion(commitment, date);
    next.refresh_streak(today);
    next
}

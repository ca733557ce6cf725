//! Calendar helpers shared by every part of the engine.
//!
//! Everything here works on [`NaiveDate`], i.e. a day on the device's local
//! calendar. Instants are converted with [`local_day`] at the edge, never
//! inside the engine.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone};

use crate::error::{CoreError, Result};

/// Format used for date-keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` key of a calendar day.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key back into a calendar day.
///
/// # Errors
/// Returns [`CoreError::InvalidDateKey`] when the input is not exactly ten
/// characters or does not name a real day.
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    let key = key.trim();
    if key.len() != 10 {
        return Err(CoreError::InvalidDateKey(key.to_string()));
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| CoreError::InvalidDateKey(key.to_string()))
}

/// Calendar day of `instant` in its own time zone.
///
/// Pass a `DateTime<Local>` to get the device's local day.
pub fn local_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Today's date on the device's local calendar.
///
/// Front-ends call this once and thread the result through the engine.
pub fn today_local() -> NaiveDate {
    local_day(&Local::now())
}

/// Sunday-based weekday index (0=Sunday ... 6=Saturday).
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// `length` consecutive days ending at `end_inclusive`, oldest first.
pub fn date_range(end_inclusive: NaiveDate, length: usize) -> DateRange {
    if length == 0 {
        return DateRange {
            front: end_inclusive,
            remaining: 0,
        };
    }

    let back = (length - 1) as u64;
    match end_inclusive.checked_sub_days(Days::new(back)) {
        Some(front) => DateRange {
            front,
            remaining: length,
        },
        None => {
            // Clamp at the first representable day.
            let span = (end_inclusive - NaiveDate::MIN).num_days() as usize;
            DateRange {
                front: NaiveDate::MIN,
                remaining: span + 1,
            }
        }
    }
}

/// Iterator over a run of consecutive calendar days.
///
/// Cloning yields an independent iterator, so a range can be walked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    front: NaiveDate,
    remaining: usize,
}

impl DateRange {
    /// First day of the range, if any.
    pub fn first_day(&self) -> Option<NaiveDate> {
        (self.remaining > 0).then_some(self.front)
    }

    /// Last day of the range, if any.
    pub fn last_day(&self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        self.front
            .checked_add_days(Days::new((self.remaining - 1) as u64))
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            match self.front.succ_opt() {
                Some(next) => self.front = next,
                None => self.remaining = 0,
            }
        }
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for DateRange {
    fn next_back(&mut self) -> Option<NaiveDate> {
        let day = self.last_day()?;
        self.remaining -= 1;
        Some(day)
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_key_is_zero_padded() {
        assert_eq!(date_key(d(2024, 1, 5)), "2024-01-05");
        assert_eq!(date_key(d(2024, 12, 31)), "2024-12-31");
    }

    #[test]
    fn test_parse_date_key() {
        assert_eq!(parse_date_key("2024-02-29").unwrap(), d(2024, 2, 29));
        assert_eq!(parse_date_key(" 2024-01-05 ").unwrap(), d(2024, 1, 5));
        assert!(parse_date_key("2023-02-29").is_err());
        assert!(parse_date_key("2024-1-5").is_err());
        assert!(parse_date_key("yesterday").is_err());
    }

    #[test]
    fn test_weekday_index_is_sunday_based() {
        // 2024-01-07 is a Sunday
        assert_eq!(weekday_index(d(2024, 1, 7)), 0);
        assert_eq!(weekday_index(d(2024, 1, 8)), 1);
        assert_eq!(weekday_index(d(2024, 1, 13)), 6);
    }

    #[test]
    fn test_local_day_uses_instant_offset() {
        // 23:30 UTC on Jan 5 is already Jan 6 at UTC+2
        let utc = Utc.with_ymd_and_hms(2024, 1, 5, 23, 30, 0).unwrap();
        let plus_two = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(local_day(&utc), d(2024, 1, 5));
        assert_eq!(local_day(&plus_two), d(2024, 1, 6));
    }

    #[test]
    fn test_date_range_oldest_first() {
        let days: Vec<_> = date_range(d(2024, 3, 2), 4).collect();
        assert_eq!(
            days,
            vec![d(2024, 2, 28), d(2024, 2, 29), d(2024, 3, 1), d(2024, 3, 2)]
        );
    }

    #[test]
    fn test_date_range_empty_and_single() {
        assert_eq!(date_range(d(2024, 1, 1), 0).count(), 0);
        assert_eq!(
            date_range(d(2024, 1, 1), 1).collect::<Vec<_>>(),
            vec![d(2024, 1, 1)]
        );
    }

    #[test]
    fn test_date_range_is_restartable() {
        let range = date_range(d(2024, 1, 10), 7);
        let first: Vec<_> = range.clone().collect();
        let second: Vec<_> = range.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn test_date_range_reverse_and_len() {
        let range = date_range(d(2024, 1, 10), 3);
        assert_eq!(range.len(), 3);
        assert_eq!(range.first_day(), Some(d(2024, 1, 8)));
        assert_eq!(range.last_day(), Some(d(2024, 1, 10)));
        let rev: Vec<_> = range.rev().collect();
        assert_eq!(rev, vec![d(2024, 1, 10), d(2024, 1, 9), d(2024, 1, 8)]);
    }
}

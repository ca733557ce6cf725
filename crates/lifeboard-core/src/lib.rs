//! # Lifeboard Core Library
//!
//! This library provides the recurring-commitment engine behind the Lifeboard
//! life organizer. Every dashboard layout reads the same functions; none of
//! them re-derive "due", "done" or "streak" on their own.
//!
//! ## Architecture
//!
//! - **Calendar**: date-keys, Sunday-based weekday indices, day ranges
//! - **Schedule**: the single "is this commitment due today?" predicate
//! - **Ledger**: completion membership and the one toggle primitive
//! - **Streak**: current/longest compliance runs with a forgiving today
//! - **Progress**: rolling per-day compliance window for display
//! - **Storage**: TOML configuration and JSON snapshot loading
//!
//! All engine functions are pure and take "today" as a parameter; nothing
//! outside [`calendar::today_local`] reads the clock.
//!
//! ## Key Components
//!
//! - [`Commitment`]: the habit snapshot value
//! - [`is_due`], [`is_completed`], [`toggle_completion`]
//! - [`current_streak`], [`weekly_progress`], [`build_agenda`]
//! - [`Config`]: Application configuration management

pub mod agenda;
pub mod calendar;
pub mod commitment;
pub mod error;
pub mod ledger;
pub mod progress;
pub mod schedule;
pub mod storage;
pub mod streak;

pub use agenda::{build_agenda, AgendaEntry};
pub use calendar::{date_key, date_range, parse_date_key, today_local, weekday_index, DateRange};
pub use commitment::Commitment;
pub use error::{ConfigError, CoreError, Result};
pub use ledger::{is_completed, toggle_completion, toggle_completion_at};
pub use progress::{
    weekly_progress, window_summary, DayProgress, DayStatus, WindowSummary, DEFAULT_WINDOW_LENGTH,
};
pub use schedule::{due_on, is_due, ScheduledDays};
pub use storage::Config;
pub use streak::{current_streak, longest_streak, streak_summary, StreakSummary};

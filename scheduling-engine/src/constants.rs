//! Constants surface shared with callers that compose their own validation messages.

/// Hours in a single shift (day or night).
pub const SHIFT_DURATION: i64 = 12;

/// Minimum rest, in hours, required after a day shift before the next shift.
pub const DAY_SHIFT_REST: i64 = 24;

/// Minimum rest, in hours, required after a night shift before the next shift.
pub const NIGHT_SHIFT_REST: i64 = 48;

/// Reserved for a future 24-hour shift type; unused by the day/night shifts this engine
/// schedules today.
pub const SHIFT_24H_REST: i64 = 72;

/// Hard cap on a doctor's worked hours over any rolling 7-day window.
pub const MAX_WEEKLY_HOURS: i64 = 48;

/// Base norm hours a doctor is expected to work per working day.
pub const BASE_NORM_HOURS_PER_DAY: i64 = 7;

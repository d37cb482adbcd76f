use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use shared::{DomainError, DomainResult};
use std::fmt;

/// A single normalized civil-calendar date. All scheduling arithmetic goes through this type
/// instead of mixing wall-clock parsing with ISO string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> DomainResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidInput(format!("invalid date {year}-{month}-{day}")))
    }

    pub fn parse_iso(s: &str) -> DomainResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DomainError::InvalidInput(format!("invalid ISO date: {s}")))
    }

    pub fn to_iso(self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn add_days(self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    pub fn is_weekend(self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    /// Number of whole days between `self` and `other` (`other - self`).
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// A `CivilInstant` for this date at the given hour (0-23).
    pub fn at_hour(self, hour: u32) -> CivilInstant {
        CivilInstant(NaiveDateTime::new(
            self.0,
            NaiveTime::from_hms_opt(hour, 0, 0).expect("hour in 0..24"),
        ))
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

impl TryFrom<String> for CivilDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_iso(&value)
    }
}

impl From<CivilDate> for String {
    fn from(value: CivilDate) -> Self {
        value.to_iso()
    }
}

/// A point in civil time: a date plus an hour-of-day, used only for rest-constraint
/// arithmetic. Never exposed at the JSON boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilInstant(NaiveDateTime);

impl CivilInstant {
    /// Whole hours elapsed from `self` to `later`. Negative if `later` precedes `self`.
    pub fn hours_until(self, later: Self) -> i64 {
        (later.0 - self.0).num_hours()
    }
}

/// Enumerate every day of month `month` (0-indexed) of `year`, in ascending order.
pub fn days_in_month(month: u32, year: i32) -> DomainResult<Vec<CivilDate>> {
    if month > 11 {
        return Err(DomainError::InvalidInput(format!(
            "month must be 0..=11, got {month}"
        )));
    }
    let first = CivilDate::from_ymd(year, month + 1, 1)?;
    let next_month_first = if month == 11 {
        CivilDate::from_ymd(year + 1, 1, 1)?
    } else {
        CivilDate::from_ymd(year, month + 2, 1)?
    };
    let day_count = first.days_until(next_month_first);
    let mut days = Vec::with_capacity(day_count as usize);
    let mut cursor = first;
    for _ in 0..day_count {
        days.push(cursor);
        cursor = cursor.succ().expect("date within a real month");
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_has_31_days() {
        let days = days_in_month(0, 2026).unwrap();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].to_iso(), "2026-01-01");
        assert_eq!(days[30].to_iso(), "2026-01-31");
    }

    #[test]
    fn february_crosses_into_march_correctly() {
        let days = days_in_month(1, 2026).unwrap();
        assert_eq!(days.len(), 28);
    }

    #[test]
    fn december_rolls_into_next_year() {
        let days = days_in_month(11, 2026).unwrap();
        assert_eq!(days.len(), 31);
        assert_eq!(days[30].to_iso(), "2026-12-31");
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(days_in_month(12, 2026).is_err());
    }

    #[test]
    fn hours_until_spans_day_shift_and_night_shift_ends() {
        let d = CivilDate::from_ymd(2026, 1, 9).unwrap();
        let next = d.succ().unwrap();
        // day shift ends 20:00 d, next day slot starts 08:00 d+1 => 12h
        assert_eq!(d.at_hour(20).hours_until(next.at_hour(8)), 12);
        // night shift ends 08:00 d+1, next night slot starts 20:00 d+1 => 12h
        assert_eq!(next.at_hour(8).hours_until(next.at_hour(20)), 12);
    }
}

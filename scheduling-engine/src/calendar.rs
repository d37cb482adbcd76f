use crate::date::{days_in_month, CivilDate};
use crate::model::NationalHoliday;
use shared::DomainResult;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy)]
pub struct CalendarDay {
    pub date: CivilDate,
    pub is_weekend: bool,
    pub is_holiday: bool,
    pub is_working_day: bool,
}

fn holiday_set(holidays: &[NationalHoliday]) -> HashSet<CivilDate> {
    holidays.iter().map(|h| h.date).collect()
}

/// Enumerate every day of `month`/`year` with its weekend/holiday/working-day classification.
pub fn month_calendar(
    month: u32,
    year: i32,
    holidays: &[NationalHoliday],
) -> DomainResult<Vec<CalendarDay>> {
    let holiday_dates = holiday_set(holidays);
    let days = days_in_month(month, year)?
        .into_iter()
        .map(|date| {
            let is_weekend = date.is_weekend();
            let is_holiday = holiday_dates.contains(&date);
            CalendarDay {
                date,
                is_weekend,
                is_holiday,
                is_working_day: !is_weekend && !is_holiday,
            }
        })
        .collect();
    Ok(days)
}

/// Count the working days (weekday, non-holiday) in `month`/`year`.
pub fn working_days_in_month(
    month: u32,
    year: i32,
    holidays: &[NationalHoliday],
) -> DomainResult<usize> {
    Ok(month_calendar(month, year, holidays)?
        .iter()
        .filter(|d| d.is_working_day)
        .count())
}

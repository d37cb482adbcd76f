//! Static, stateless operations that answer planning questions without running a full
//! assignment loop. Each delegates to the count-based arithmetic in [`crate::norm`] and
//! [`crate::bridge`] after shaping the caller's lists into the counts those modules expect.

use crate::bridge::doctor_bridge_days;
use crate::calendar::month_calendar;
use crate::date::CivilDate;
use crate::model::{Doctor, LeaveDay, LeaveValidation, NationalHoliday, ScheduleConflict, Shift};
use crate::norm;
use crate::validator;
use shared::DomainResult;
use std::collections::BTreeSet;

/// Predicts whether a proposed leave plan still lets every doctor reach their quantized base
/// norm, given the roster size and staffing targets for `month`/`year`.
pub fn validate_leave_days(
    leave_days: &[LeaveDay],
    doctors: &[Doctor],
    month: u32,
    year: i32,
    shifts_per_day: u32,
    shifts_per_night: u32,
    holidays: &[NationalHoliday],
) -> DomainResult<LeaveValidation> {
    let calendar = month_calendar(month, year, holidays)?;
    let proposed_leave_days = leave_days
        .iter()
        .filter(|l| calendar.iter().any(|c| c.date == l.date))
        .count() as u32;

    norm::validate_leave_days_counts(
        doctors.len() as u32,
        month,
        year,
        shifts_per_day,
        shifts_per_night,
        proposed_leave_days,
        holidays,
    )
}

/// The largest number of total leave days a roster of `doctor_count` doctors can absorb in
/// `month`/`year` while everyone still meets their (leave-free) base norm.
pub fn calculate_possible_leave_days(
    month: u32,
    year: i32,
    doctor_count: u32,
    shifts_per_day: u32,
    shifts_per_night: u32,
    holidays: &[NationalHoliday],
) -> DomainResult<u32> {
    norm::calculate_possible_leave_days_counts(
        month,
        year,
        doctor_count,
        shifts_per_day,
        shifts_per_night,
        holidays,
    )
}

/// The dates `doctor_id` is blacked out from scheduling because they bridge two declared leave
/// dates across only non-working days (§4.3 in the core module).
pub fn compute_doctor_bridge_days(
    doctor_id: &str,
    leave_days: &[LeaveDay],
    month: u32,
    year: i32,
    holidays: &[NationalHoliday],
) -> DomainResult<BTreeSet<CivilDate>> {
    doctor_bridge_days(doctor_id, leave_days, month, year, holidays)
}

/// Count of working (non-weekend, non-holiday) days in `month`/`year`.
pub fn working_days_in_month(month: u32, year: i32, holidays: &[NationalHoliday]) -> DomainResult<usize> {
    crate::calendar::working_days_in_month(month, year, holidays)
}

/// Scans any shift list for staffing and rest-constraint conflicts, independent of whether
/// the list was produced by [`crate::Engine::generate_schedule`]. See §4.5 in the core module.
pub fn detect_conflicts(
    shifts: &[Shift],
    doctors: &[Doctor],
    shifts_per_day: u32,
    shifts_per_night: u32,
) -> Vec<ScheduleConflict> {
    validator::detect_conflicts(shifts, doctors, shifts_per_day, shifts_per_night)
}

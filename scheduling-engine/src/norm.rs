use crate::calendar::working_days_in_month;
use crate::constants::{BASE_NORM_HOURS_PER_DAY, SHIFT_DURATION};
use crate::model::{message_keys, LeaveValidation, NationalHoliday};
use shared::DomainResult;

/// `BASE_NORM_HOURS_PER_DAY x (working_days_in_month - leave_days_count)`.
pub fn base_norm_hours(working_days_in_month: i64, leave_days_count: i64) -> i64 {
    BASE_NORM_HOURS_PER_DAY * (working_days_in_month - leave_days_count).max(0)
}

/// Base norm hours divided by shift duration, rounded up to whole shifts.
pub fn target_shifts(base_norm_hours: i64) -> u32 {
    if base_norm_hours <= 0 {
        return 0;
    }
    base_norm_hours.div_ceil(SHIFT_DURATION) as u32
}

/// Predicts whether a proposed leave plan leaves enough labour slots to meet every doctor's
/// quantized norm, without generating a schedule. Operates on plain counts; see
/// `crate::validators::validate_leave_days` for the list-shaped public entry point.
#[allow(clippy::too_many_arguments)]
pub(crate) fn validate_leave_days_counts(
    doctor_count: u32,
    month: u32,
    year: i32,
    shifts_per_day: u32,
    shifts_per_night: u32,
    proposed_leave_days: u32,
    holidays: &[NationalHoliday],
) -> DomainResult<LeaveValidation> {
    let working_days = working_days_in_month(month, year, holidays)? as i64;
    let days_in_month = crate::date::days_in_month(month, year)?.len() as i64;

    let total_slot_hours = days_in_month * (shifts_per_day as i64 + shifts_per_night as i64) * SHIFT_DURATION;
    let total_required_hours = (doctor_count as i64) * BASE_NORM_HOURS_PER_DAY * working_days
        - (proposed_leave_days as i64) * BASE_NORM_HOURS_PER_DAY;

    let deficit = total_required_hours - total_slot_hours;
    let required_leave_days = if deficit > 0 {
        deficit.div_ceil(BASE_NORM_HOURS_PER_DAY)
    } else {
        0
    };
    let is_valid = required_leave_days == 0;

    let message = if is_valid {
        message_keys::LEAVE_PLAN_FEASIBLE.to_string()
    } else {
        message_keys::LEAVE_PLAN_INFEASIBLE.to_string()
    };

    Ok(LeaveValidation {
        is_valid,
        required_leave_days,
        message,
    })
}

/// The largest number of total leave days the roster can absorb while every doctor still
/// meets their (leave-free) base norm, clamped to >= 0.
pub(crate) fn calculate_possible_leave_days_counts(
    month: u32,
    year: i32,
    doctor_count: u32,
    shifts_per_day: u32,
    shifts_per_night: u32,
    holidays: &[NationalHoliday],
) -> DomainResult<u32> {
    let working_days = working_days_in_month(month, year, holidays)? as i64;
    let days_in_month = crate::date::days_in_month(month, year)?.len() as i64;

    let total_slot_hours = days_in_month * (shifts_per_day as i64 + shifts_per_night as i64) * SHIFT_DURATION;
    let base_norm_hours_per_doctor = base_norm_hours(working_days, 0);

    let possible = (total_slot_hours - (doctor_count as i64) * base_norm_hours_per_doctor)
        / BASE_NORM_HOURS_PER_DAY;

    Ok(possible.max(0) as u32)
}

use crate::date::CivilDate;
use crate::model::{message_keys, ConflictKind, Doctor, DoctorId, DoctorStats, ScheduleConflict, Shift, ShiftType};
use crate::rules::satisfies_rest;
use std::collections::{BTreeSet, HashMap};

const SHIFT_DURATION: i64 = crate::constants::SHIFT_DURATION;

fn date_bounds(shifts: &[Shift]) -> Option<(CivilDate, CivilDate)> {
    let mut dates = shifts.iter().map(|s| s.shift_date);
    let first = dates.next()?;
    let (min, max) = dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d)));
    Some((min, max))
}

fn push_staffing_conflict(
    conflicts: &mut Vec<ScheduleConflict>,
    date: CivilDate,
    assigned: u32,
    required: u32,
) {
    use std::cmp::Ordering;
    match assigned.cmp(&required) {
        Ordering::Less => conflicts.push(ScheduleConflict {
            kind: ConflictKind::Understaffed,
            date,
            doctor_id: None,
            message_key: message_keys::UNDERSTAFFED.to_string(),
        }),
        Ordering::Greater => conflicts.push(ScheduleConflict {
            kind: ConflictKind::Overstaffed,
            date,
            doctor_id: None,
            message_key: message_keys::OVERSTAFFED.to_string(),
        }),
        Ordering::Equal => {}
    }
}

fn staffing_conflicts(
    dates: impl Iterator<Item = CivilDate>,
    shifts: &[Shift],
    shifts_per_day: u32,
    shifts_per_night: u32,
) -> Vec<ScheduleConflict> {
    let mut conflicts = Vec::new();
    for date in dates {
        let day_count = shifts
            .iter()
            .filter(|s| s.shift_date == date && s.shift_type == ShiftType::Day)
            .count() as u32;
        let night_count = shifts
            .iter()
            .filter(|s| s.shift_date == date && s.shift_type == ShiftType::Night)
            .count() as u32;
        push_staffing_conflict(&mut conflicts, date, day_count, shifts_per_day);
        push_staffing_conflict(&mut conflicts, date, night_count, shifts_per_night);
    }
    conflicts
}

fn rest_violations(shifts: &[Shift], doctors: &[Doctor]) -> Vec<ScheduleConflict> {
    let mut conflicts = Vec::new();
    for doctor in doctors {
        let mut doctor_shifts: Vec<&Shift> = shifts.iter().filter(|s| s.doctor_id == doctor.id).collect();
        doctor_shifts.sort_by_key(|s| (s.shift_date, s.shift_type.start_hour()));

        for pair in doctor_shifts.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if !satisfies_rest(prev.shift_date, prev.shift_type, next.shift_date, next.shift_type) {
                conflicts.push(ScheduleConflict {
                    kind: ConflictKind::RestViolation,
                    date: next.shift_date,
                    doctor_id: Some(doctor.id.clone()),
                    message_key: message_keys::REST_VIOLATION.to_string(),
                });
            }
        }
    }
    conflicts
}

fn date_range(min: CivilDate, max: CivilDate) -> impl Iterator<Item = CivilDate> {
    std::iter::successors(Some(min), move |d| (*d != max).then(|| d.succ()).flatten())
}

/// Scans a shift list for staffing conflicts (too few or too many doctors on a date/shift
/// type) and rest-constraint violations (two consecutive shifts for the same doctor without
/// the minimum idle time between them). Operates purely on the list given; it does not assume
/// the list came from [`crate::engine::Engine::generate_schedule`], so it re-derives the dates
/// to check from the shifts themselves rather than from a calendar.
pub(crate) fn detect_conflicts(
    shifts: &[Shift],
    doctors: &[Doctor],
    shifts_per_day: u32,
    shifts_per_night: u32,
) -> Vec<ScheduleConflict> {
    let mut conflicts = match date_bounds(shifts) {
        Some((min, max)) => staffing_conflicts(date_range(min, max), shifts, shifts_per_day, shifts_per_night),
        None => Vec::new(),
    };
    conflicts.extend(rest_violations(shifts, doctors));
    conflicts
}

/// Same as [`detect_conflicts`], but checks staffing over every date in `calendar_dates`
/// rather than the range spanned by `shifts` — so a date left entirely unfilled (zero shifts
/// assigned, e.g. the assignment loop ran dry) is still reported `understaffed`. Used by
/// [`crate::engine::Engine::generate_schedule`], which always knows its own calendar.
pub(crate) fn detect_conflicts_for_calendar(
    calendar_dates: &[CivilDate],
    shifts: &[Shift],
    doctors: &[Doctor],
    shifts_per_day: u32,
    shifts_per_night: u32,
) -> Vec<ScheduleConflict> {
    let mut conflicts = staffing_conflicts(calendar_dates.iter().copied(), shifts, shifts_per_day, shifts_per_night);
    conflicts.extend(rest_violations(shifts, doctors));
    conflicts
}

/// Per-doctor totals plus whether each doctor's worked hours meet their quantized base norm.
pub(crate) fn doctor_stats(
    shifts: &[Shift],
    doctors: &[Doctor],
    doctor_leave_dates: &HashMap<DoctorId, BTreeSet<CivilDate>>,
    base_norm_hours: &HashMap<DoctorId, i64>,
) -> Vec<DoctorStats> {
    doctors
        .iter()
        .map(|doctor| {
            let doctor_shifts: Vec<&Shift> = shifts.iter().filter(|s| s.doctor_id == doctor.id).collect();
            let day_shifts = doctor_shifts.iter().filter(|s| s.shift_type == ShiftType::Day).count() as u32;
            let total_shifts = doctor_shifts.len() as u32;
            let night_shifts = total_shifts - day_shifts;
            let total_hours_worked = total_shifts as i64 * SHIFT_DURATION;
            let leave_days = doctor_leave_dates.get(&doctor.id).map(|d| d.len() as u32).unwrap_or(0);
            let norm_hours = base_norm_hours.get(&doctor.id).copied().unwrap_or(0);

            DoctorStats {
                doctor_id: doctor.id.clone(),
                total_hours_worked,
                total_shifts,
                day_shifts,
                night_shifts,
                leave_days,
                base_norm_hours: norm_hours,
                meets_base_norm: total_hours_worked >= norm_hours,
            }
        })
        .collect()
}

/// One opaque warning key per doctor who fell short of their quantized base norm.
pub(crate) fn norm_warnings(stats: &[DoctorStats]) -> Vec<String> {
    stats
        .iter()
        .filter(|s| !s.meets_base_norm)
        .map(|s| format!("{}:{}", message_keys::NORM_WARNING, s.doctor_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DoctorAffiliation;

    fn doctor(id: &str) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: id.to_string(),
            affiliation: DoctorAffiliation::Floating,
            preferences: None,
        }
    }

    fn shift(doctor_id: &str, date: &str, shift_type: ShiftType) -> Shift {
        Shift::new(doctor_id.to_string(), CivilDate::parse_iso(date).unwrap(), shift_type)
    }

    #[test]
    fn flags_an_understaffed_day() {
        let shifts = vec![shift("d1", "2026-01-05", ShiftType::Day)];
        let conflicts = detect_conflicts(&shifts, &[doctor("d1")], 2, 1);
        assert!(conflicts
            .iter()
            .any(|c| c.kind == ConflictKind::Understaffed && c.date == CivilDate::parse_iso("2026-01-05").unwrap()));
    }

    #[test]
    fn flags_an_overstaffed_day() {
        let shifts = vec![
            shift("d1", "2026-01-05", ShiftType::Day),
            shift("d2", "2026-01-05", ShiftType::Day),
        ];
        let conflicts = detect_conflicts(&shifts, &[doctor("d1"), doctor("d2")], 1, 0);
        assert!(conflicts.iter().any(|c| c.kind == ConflictKind::Overstaffed));
    }

    #[test]
    fn flags_a_rest_violation_between_consecutive_day_shifts() {
        let shifts = vec![
            shift("d1", "2026-01-05", ShiftType::Day),
            shift("d1", "2026-01-06", ShiftType::Day),
        ];
        let conflicts = detect_conflicts(&shifts, &[doctor("d1")], 1, 0);
        assert!(conflicts.iter().any(|c| c.kind == ConflictKind::RestViolation));
    }

    #[test]
    fn no_conflicts_for_a_fully_and_correctly_staffed_single_day() {
        let shifts = vec![shift("d1", "2026-01-05", ShiftType::Day)];
        let conflicts = detect_conflicts(&shifts, &[doctor("d1")], 1, 0);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn warns_when_a_doctor_falls_short_of_their_base_norm() {
        let stats = vec![DoctorStats {
            doctor_id: "d1".into(),
            total_hours_worked: 12,
            total_shifts: 1,
            day_shifts: 1,
            night_shifts: 0,
            leave_days: 0,
            base_norm_hours: 154,
            meets_base_norm: false,
        }];
        let warnings = norm_warnings(&stats);
        assert_eq!(warnings, vec![format!("{}:d1", message_keys::NORM_WARNING)]);
    }
}

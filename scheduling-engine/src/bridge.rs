use crate::calendar::month_calendar;
use crate::date::CivilDate;
use crate::model::{DoctorId, LeaveDay, NationalHoliday};
use shared::DomainResult;
use std::collections::BTreeSet;

/// Per-doctor set of dates blacked out because they fall between two declared-leave dates
/// across only non-working days. Bridge days do not reduce the base norm.
pub(crate) fn doctor_bridge_days(
    doctor_id: &str,
    leave_days: &[LeaveDay],
    month: u32,
    year: i32,
    holidays: &[NationalHoliday],
) -> DomainResult<BTreeSet<CivilDate>> {
    let calendar = month_calendar(month, year, holidays)?;

    let leave_dates: BTreeSet<CivilDate> = leave_days
        .iter()
        .filter(|l| l.doctor_id == doctor_id)
        .map(|l| l.date)
        .filter(|date| calendar.iter().any(|c| c.date == *date))
        .collect();

    let mut bridges = BTreeSet::new();
    let mut leave_iter = leave_dates.iter().peekable();

    while let Some(&d1) = leave_iter.next() {
        let Some(&&d2) = leave_iter.peek() else {
            break;
        };

        let between: Vec<CivilDate> = calendar
            .iter()
            .filter(|c| c.date > d1 && c.date < d2)
            .map(|c| c.date)
            .collect();

        if between.is_empty() {
            // Adjacent leave dates with nothing in between; no bridge to derive.
            continue;
        }

        let all_non_working = calendar
            .iter()
            .filter(|c| c.date > d1 && c.date < d2)
            .all(|c| c.is_weekend || c.is_holiday);

        if all_non_working {
            bridges.extend(between);
        }
    }

    Ok(bridges)
}

pub(crate) fn doctor_bridge_day_map(
    doctors: &[DoctorId],
    leave_days: &[LeaveDay],
    month: u32,
    year: i32,
    holidays: &[NationalHoliday],
) -> DomainResult<std::collections::HashMap<DoctorId, BTreeSet<CivilDate>>> {
    doctors
        .iter()
        .map(|id| Ok((id.clone(), doctor_bridge_days(id, leave_days, month, year, holidays)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave(doctor_id: &str, date: &str) -> LeaveDay {
        LeaveDay {
            doctor_id: doctor_id.to_string(),
            date: CivilDate::parse_iso(date).unwrap(),
        }
    }

    #[test]
    fn friday_and_monday_leave_bridges_the_weekend() {
        // Jan 9, 2026 is a Friday; Jan 12 is the following Monday.
        let leave_days = vec![leave("d1", "2026-01-09"), leave("d1", "2026-01-12")];
        let bridges = doctor_bridge_days("d1", &leave_days, 0, 2026, &[]).unwrap();
        let expected: BTreeSet<CivilDate> = ["2026-01-10", "2026-01-11"]
            .iter()
            .map(|s| CivilDate::parse_iso(s).unwrap())
            .collect();
        assert_eq!(bridges, expected);
    }

    #[test]
    fn single_leave_day_adjacent_to_weekend_has_no_bridge() {
        let leave_days = vec![leave("d1", "2026-01-09")];
        let bridges = doctor_bridge_days("d1", &leave_days, 0, 2026, &[]).unwrap();
        assert!(bridges.is_empty());
    }

    #[test]
    fn holiday_plus_weekend_between_two_leave_days_bridges_all_three() {
        // Thu Jan 8 (holiday) + Fri Jan 9 (holiday) + Sat/Sun between Wed Jan 7 leave and Mon
        // Jan 12 leave.
        let holidays = vec![NationalHoliday {
            date: CivilDate::parse_iso("2026-01-09").unwrap(),
            description: Some("Bridge public holiday".to_string()),
        }];
        let leave_days = vec![leave("d1", "2026-01-08"), leave("d1", "2026-01-12")];
        let bridges = doctor_bridge_days("d1", &leave_days, 0, 2026, &holidays).unwrap();
        let expected: BTreeSet<CivilDate> = ["2026-01-09", "2026-01-10", "2026-01-11"]
            .iter()
            .map(|s| CivilDate::parse_iso(s).unwrap())
            .collect();
        assert_eq!(bridges, expected);
    }

    #[test]
    fn working_day_between_leave_dates_blocks_the_bridge() {
        let leave_days = vec![leave("d1", "2026-01-05"), leave("d1", "2026-01-09")];
        let bridges = doctor_bridge_days("d1", &leave_days, 0, 2026, &[]).unwrap();
        assert!(bridges.is_empty());
    }

    #[test]
    fn leave_outside_target_month_is_ignored() {
        let leave_days = vec![leave("d1", "2025-12-31"), leave("d1", "2026-01-02")];
        let bridges = doctor_bridge_days("d1", &leave_days, 0, 2026, &[]).unwrap();
        assert!(bridges.is_empty());
    }
}

use crate::date::CivilDate;
use crate::model::{DoctorId, ShiftType};
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Transient per-invocation state for the assignment loop. Owned entirely by
/// `Engine::generate_schedule` and discarded on exit; the static operations never touch it.
pub(crate) struct EngineState {
    last_shift: HashMap<DoctorId, (CivilDate, ShiftType)>,
    shift_count: HashMap<DoctorId, u32>,
    /// (date, hours) pairs for the trailing 7 days, used for the weekly-hours cap.
    recent_hours: HashMap<DoctorId, VecDeque<(CivilDate, i64)>>,
    pub(crate) bridge_days: HashMap<DoctorId, BTreeSet<CivilDate>>,
}

impl EngineState {
    pub(crate) fn new(bridge_days: HashMap<DoctorId, BTreeSet<CivilDate>>) -> Self {
        Self {
            last_shift: HashMap::new(),
            shift_count: HashMap::new(),
            recent_hours: HashMap::new(),
            bridge_days,
        }
    }

    pub(crate) fn last_shift(&self, doctor_id: &str) -> Option<(CivilDate, ShiftType)> {
        self.last_shift.get(doctor_id).copied()
    }

    pub(crate) fn assigned_on(&self, doctor_id: &str, date: CivilDate) -> bool {
        self.last_shift
            .get(doctor_id)
            .is_some_and(|(d, _)| *d == date)
    }

    pub(crate) fn shift_count(&self, doctor_id: &str) -> u32 {
        self.shift_count.get(doctor_id).copied().unwrap_or(0)
    }

    pub(crate) fn hours_in_trailing_week(&self, doctor_id: &str, as_of: CivilDate) -> i64 {
        self.recent_hours
            .get(doctor_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(d, _)| as_of.days_until(*d) <= 0 && d.days_until(as_of) < 7)
                    .map(|(_, hours)| *hours)
                    .sum()
            })
            .unwrap_or(0)
    }

    pub(crate) fn bridge_days_for(&self, doctor_id: &str) -> Option<&BTreeSet<CivilDate>> {
        self.bridge_days.get(doctor_id)
    }

    pub(crate) fn record_assignment(
        &mut self,
        doctor_id: &str,
        date: CivilDate,
        shift_type: ShiftType,
        hours: i64,
    ) {
        self.last_shift
            .insert(doctor_id.to_string(), (date, shift_type));
        *self.shift_count.entry(doctor_id.to_string()).or_insert(0) += 1;

        let entries = self
            .recent_hours
            .entry(doctor_id.to_string())
            .or_default();
        entries.push_back((date, hours));
        while let Some((oldest, _)) = entries.front() {
            if oldest.days_until(date) >= 7 {
                entries.pop_front();
            } else {
                break;
            }
        }
    }

}

use super::{EligibilityContext, EligibilityRule};

/// A doctor on declared leave for the candidate date is never eligible.
pub(crate) struct LeaveRule;

impl EligibilityRule for LeaveRule {
    fn is_eligible(&self, ctx: &EligibilityContext) -> bool {
        !ctx.leave_dates.contains(&ctx.date)
    }

    fn name(&self) -> &'static str {
        "Leave"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CivilDate;
    use crate::engine_state::EngineState;
    use crate::model::{Doctor, DoctorAffiliation, ShiftType};
    use std::collections::BTreeSet;

    fn doctor() -> Doctor {
        Doctor {
            id: "d1".into(),
            name: "Dr One".into(),
            affiliation: DoctorAffiliation::Floating,
            preferences: None,
        }
    }

    #[test]
    fn blocks_assignment_on_a_leave_date() {
        let d = doctor();
        let date = CivilDate::parse_iso("2026-01-15").unwrap();
        let mut leave_dates = BTreeSet::new();
        leave_dates.insert(date);
        let state = EngineState::new(Default::default());
        let ctx = EligibilityContext {
            doctor: &d,
            date,
            shift_type: ShiftType::Day,
            state: &state,
            leave_dates: &leave_dates,
            target_shifts: 10,
            equalization_cap_active: false,
        };
        assert!(!LeaveRule.is_eligible(&ctx));
    }

    #[test]
    fn allows_non_leave_dates() {
        let d = doctor();
        let date = CivilDate::parse_iso("2026-01-15").unwrap();
        let leave_dates = BTreeSet::new();
        let state = EngineState::new(Default::default());
        let ctx = EligibilityContext {
            doctor: &d,
            date,
            shift_type: ShiftType::Day,
            state: &state,
            leave_dates: &leave_dates,
            target_shifts: 10,
            equalization_cap_active: false,
        };
        assert!(LeaveRule.is_eligible(&ctx));
    }
}

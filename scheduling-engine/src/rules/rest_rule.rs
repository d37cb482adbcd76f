use super::{EligibilityContext, EligibilityRule};
use crate::constants::{DAY_SHIFT_REST, NIGHT_SHIFT_REST};
use crate::model::ShiftType;

/// Minimum idle hours between the end of a doctor's last shift and the start of the candidate
/// shift: 24h after a day shift, 48h after a night shift (§4.4).
pub(crate) struct RestConstraintRule;

impl EligibilityRule for RestConstraintRule {
    fn is_eligible(&self, ctx: &EligibilityContext) -> bool {
        let Some((prev_date, prev_type)) = ctx.state.last_shift(&ctx.doctor.id) else {
            return true;
        };

        satisfies_rest(prev_date, prev_type, ctx.date, ctx.shift_type)
    }

    fn name(&self) -> &'static str {
        "RestConstraint"
    }
}

/// Whether a shift of `candidate_type` on `candidate_date` respects the minimum rest owed
/// after a shift of `prev_type` on `prev_date`. Shared by the eligibility rule (state-based,
/// one prior shift at a time) and the standalone conflict scan (list-based, every consecutive
/// pair).
pub(crate) fn satisfies_rest(
    prev_date: crate::date::CivilDate,
    prev_type: ShiftType,
    candidate_date: crate::date::CivilDate,
    candidate_type: ShiftType,
) -> bool {
    let prev_end = match prev_type {
        ShiftType::Day => prev_date.at_hour(prev_type.end_hour()),
        ShiftType::Night => match prev_date.succ() {
            Some(next_day) => next_day.at_hour(prev_type.end_hour()),
            None => return false,
        },
    };

    let required_rest = match prev_type {
        ShiftType::Day => DAY_SHIFT_REST,
        ShiftType::Night => NIGHT_SHIFT_REST,
    };

    let candidate_start = candidate_date.at_hour(candidate_type.start_hour());
    prev_end.hours_until(candidate_start) >= required_rest
}

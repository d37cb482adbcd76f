mod already_assigned_rule;
mod bridge_day_rule;
mod equalization_cap_rule;
mod leave_rule;
mod rest_rule;
mod weekly_hours_rule;

pub(crate) use already_assigned_rule::AlreadyAssignedTodayRule;
pub(crate) use bridge_day_rule::BridgeDayRule;
pub(crate) use equalization_cap_rule::EqualizationCapRule;
pub(crate) use leave_rule::LeaveRule;
pub(crate) use rest_rule::{satisfies_rest, RestConstraintRule};
pub(crate) use weekly_hours_rule::WeeklyHoursCapRule;

use crate::date::CivilDate;
use crate::engine_state::EngineState;
use crate::model::{Doctor, ShiftType};
use std::collections::BTreeSet;

/// Everything a single eligibility check needs to decide whether `doctor` may be assigned to
/// the candidate slot.
pub(crate) struct EligibilityContext<'a> {
    pub doctor: &'a Doctor,
    pub date: CivilDate,
    pub shift_type: ShiftType,
    pub state: &'a EngineState,
    pub leave_dates: &'a BTreeSet<CivilDate>,
    pub target_shifts: u32,
    /// True once every doctor in the roster has reached their target shift count, at which
    /// point the equalization cap stops gating assignment.
    pub equalization_cap_active: bool,
}

/// A single composable constraint in the eligibility filter (§4.4). Mirrors this
/// repository's existing `Rule` trait for per-assignment validation, but returns a plain
/// boolean: eligibility is a filter, not a fallible operation.
pub(crate) trait EligibilityRule: Send + Sync {
    fn is_eligible(&self, ctx: &EligibilityContext) -> bool;

    #[allow(dead_code)]
    fn name(&self) -> &'static str;
}

/// The full default rule chain applied to every candidate, in the order §4.4 lists them.
pub(crate) fn default_rules() -> Vec<Box<dyn EligibilityRule>> {
    vec![
        Box::new(LeaveRule),
        Box::new(BridgeDayRule),
        Box::new(AlreadyAssignedTodayRule),
        Box::new(RestConstraintRule),
        Box::new(WeeklyHoursCapRule),
        Box::new(EqualizationCapRule),
    ]
}

pub(crate) fn is_eligible(rules: &[Box<dyn EligibilityRule>], ctx: &EligibilityContext) -> bool {
    rules.iter().all(|rule| rule.is_eligible(ctx))
}

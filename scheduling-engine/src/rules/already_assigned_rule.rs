use super::{EligibilityContext, EligibilityRule};

/// A doctor can carry at most one shift per calendar date.
pub(crate) struct AlreadyAssignedTodayRule;

impl EligibilityRule for AlreadyAssignedTodayRule {
    fn is_eligible(&self, ctx: &EligibilityContext) -> bool {
        !ctx.state.assigned_on(&ctx.doctor.id, ctx.date)
    }

    fn name(&self) -> &'static str {
        "AlreadyAssignedToday"
    }
}

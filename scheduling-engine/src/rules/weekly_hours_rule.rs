use super::{EligibilityContext, EligibilityRule};
use crate::constants::{MAX_WEEKLY_HOURS, SHIFT_DURATION};

/// A doctor's worked hours over any rolling 7-day window must not exceed `MAX_WEEKLY_HOURS`.
pub(crate) struct WeeklyHoursCapRule;

impl EligibilityRule for WeeklyHoursCapRule {
    fn is_eligible(&self, ctx: &EligibilityContext) -> bool {
        let hours_so_far = ctx.state.hours_in_trailing_week(&ctx.doctor.id, ctx.date);
        hours_so_far + SHIFT_DURATION <= MAX_WEEKLY_HOURS
    }

    fn name(&self) -> &'static str {
        "WeeklyHoursCap"
    }
}

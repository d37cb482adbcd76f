use super::{EligibilityContext, EligibilityRule};

/// A doctor may not be scheduled on one of their derived bridge days (§4.3).
pub(crate) struct BridgeDayRule;

impl EligibilityRule for BridgeDayRule {
    fn is_eligible(&self, ctx: &EligibilityContext) -> bool {
        !ctx
            .state
            .bridge_days_for(&ctx.doctor.id)
            .is_some_and(|bridges| bridges.contains(&ctx.date))
    }

    fn name(&self) -> &'static str {
        "BridgeDay"
    }
}

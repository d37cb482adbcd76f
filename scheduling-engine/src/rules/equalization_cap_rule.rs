use super::{EligibilityContext, EligibilityRule};

/// A doctor's running shift count must not exceed their target until every doctor has reached
/// their target (§4.4 equalization cap).
pub(crate) struct EqualizationCapRule;

impl EligibilityRule for EqualizationCapRule {
    fn is_eligible(&self, ctx: &EligibilityContext) -> bool {
        if ctx.equalization_cap_active {
            return true;
        }
        ctx.state.shift_count(&ctx.doctor.id) < ctx.target_shifts
    }

    fn name(&self) -> &'static str {
        "EqualizationCap"
    }
}

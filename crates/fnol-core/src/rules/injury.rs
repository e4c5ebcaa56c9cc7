//! Injury gate
//!
//! **Question**: Does the claim involve bodily injury?

use crate::types::{ClaimType, Route, RoutingContext, RoutingDecision, RuleKind};

use super::RoutingRule;

pub struct InjuryRule;

impl InjuryRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InjuryRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingRule for InjuryRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Injury
    }

    fn question(&self) -> &'static str {
        "Does the claim involve injury?"
    }

    fn evaluate(&self, context: &RoutingContext<'_>) -> Option<RoutingDecision> {
        if context.record.claim_type != Some(ClaimType::Injury) {
            return None;
        }

        Some(RoutingDecision::new(
            self.kind(),
            Route::SpecialistQueue,
            "Claim involves injury and requires specialist review",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::complete_record;

    #[test]
    fn test_injury_goes_to_specialist() {
        let mut record = complete_record();
        record.claim_type = Some(ClaimType::Injury);
        let context = RoutingContext { record: &record, missing: &[] };

        let decision = InjuryRule::new().evaluate(&context).unwrap();
        assert_eq!(decision.route, Route::SpecialistQueue);
        assert_eq!(decision.rule, RuleKind::Injury);
    }

    #[test]
    fn test_other_claim_types_defer() {
        for claim_type in [ClaimType::Auto, ClaimType::Collision, ClaimType::PropertyDamage] {
            let mut record = complete_record();
            record.claim_type = Some(claim_type);
            let context = RoutingContext { record: &record, missing: &[] };
            assert!(InjuryRule::new().evaluate(&context).is_none());
        }
    }
}

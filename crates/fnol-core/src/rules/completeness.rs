//! Completeness gate
//!
//! **Question**: Is every mandatory field present?
//!
//! Any missing mandatory field sends the claim to manual review, regardless
//! of every other signal. The reasoning names each missing field in
//! mandatory-list order.

use crate::types::{Route, RoutingContext, RoutingDecision, RuleKind};

use super::RoutingRule;

pub struct CompletenessRule;

impl CompletenessRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompletenessRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingRule for CompletenessRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Completeness
    }

    fn question(&self) -> &'static str {
        "Is every mandatory field present?"
    }

    fn evaluate(&self, context: &RoutingContext<'_>) -> Option<RoutingDecision> {
        if context.missing.is_empty() {
            return None;
        }

        let names: Vec<&str> = context.missing.iter().map(|f| f.as_str()).collect();
        Some(RoutingDecision::new(
            self.kind(),
            Route::ManualReview,
            format!("Missing mandatory fields: {}", names.join(", ")),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::complete_record;
    use crate::types::ClaimField;

    #[test]
    fn test_defers_when_complete() {
        let record = complete_record();
        let context = RoutingContext { record: &record, missing: &[] };
        assert!(CompletenessRule::new().evaluate(&context).is_none());
    }

    #[test]
    fn test_names_every_missing_field() {
        let record = complete_record();
        let missing = [ClaimField::DateOfLoss, ClaimField::ClaimType];
        let context = RoutingContext { record: &record, missing: &missing };

        let decision = CompletenessRule::new().evaluate(&context).unwrap();
        assert_eq!(decision.route, Route::ManualReview);
        assert_eq!(decision.rule, RuleKind::Completeness);
        assert_eq!(decision.reasoning, "Missing mandatory fields: date_of_loss, claim_type");
    }
}

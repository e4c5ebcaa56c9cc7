//! Routing engine: runs the ordered rule table.
//!
//! Policy:
//! 1. Rules are evaluated in table order
//! 2. The first rule that decides wins; later rules are never consulted
//! 3. If no rule decides, the claim goes to manual review
//!
//! With the default table step 3 is unreachable because the damage-threshold
//! rule always decides.

use crate::policy::RoutingPolicy;
use crate::record::ClaimRecord;
use crate::rules::{default_rules, RoutingRule};
use crate::types::{ClaimField, Route, RoutingContext, RoutingDecision, RuleKind};

/// Evaluates routing rules in precedence order.
pub struct RoutingEngine {
    rules: Vec<Box<dyn RoutingRule>>,
}

impl RoutingEngine {
    /// Engine with the standard rule table for `policy`.
    pub fn new(policy: &RoutingPolicy) -> Self {
        Self::with_rules(default_rules(policy))
    }

    /// Engine with a custom rule table.
    pub fn with_rules(rules: Vec<Box<dyn RoutingRule>>) -> Self {
        Self { rules }
    }

    /// Rule kinds in evaluation order.
    pub fn rule_order(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    /// Route a record given its missing mandatory fields.
    pub fn route(&self, record: &ClaimRecord, missing: &[ClaimField]) -> RoutingDecision {
        let context = RoutingContext { record, missing };

        for rule in &self.rules {
            if let Some(decision) = rule.evaluate(&context) {
                tracing::debug!(
                    rule = ?decision.rule,
                    route = ?decision.route,
                    "Routing rule fired"
                );
                return decision;
            }
        }

        tracing::warn!("No routing rule decided, falling back to manual review");
        RoutingDecision::new(
            RuleKind::Fallback,
            Route::ManualReview,
            "No routing rule applied; manual review required",
        )
    }
}

impl Default for RoutingEngine {
    fn default() -> Self {
        Self::new(&RoutingPolicy::default())
    }
}

impl std::fmt::Debug for RoutingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingEngine")
            .field("rules", &self.rule_order())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::complete_record;
    use crate::rules::InjuryRule;
    use crate::types::ClaimType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_completeness_beats_fraud() {
        let mut record = complete_record();
        record.description_of_accident = Some("staged".to_string());

        let decision = RoutingEngine::default().route(&record, &[ClaimField::PolicyNumber]);
        assert_eq!(decision.route, Route::ManualReview);
        assert_eq!(decision.rule, RuleKind::Completeness);
    }

    #[test]
    fn test_fraud_beats_injury() {
        let mut record = complete_record();
        record.description_of_accident = Some("Fabricated hospital visit".to_string());
        record.claim_type = Some(ClaimType::Injury);

        let decision = RoutingEngine::default().route(&record, &[]);
        assert_eq!(decision.route, Route::InvestigationQueue);
    }

    #[test]
    fn test_injury_beats_damage_threshold() {
        let mut record = complete_record();
        record.claim_type = Some(ClaimType::Injury);
        record.estimated_damage = Some(dec!(100));

        let decision = RoutingEngine::default().route(&record, &[]);
        assert_eq!(decision.route, Route::SpecialistQueue);
    }

    #[test]
    fn test_damage_threshold_decides_last() {
        let decision = RoutingEngine::default().route(&complete_record(), &[]);
        assert_eq!(decision.route, Route::FastTrack);
        assert_eq!(decision.rule, RuleKind::DamageThreshold);
    }

    #[test]
    fn test_custom_threshold_from_policy() {
        let policy = RoutingPolicy {
            fast_track_threshold: dec!(5000),
            ..Default::default()
        };

        let decision = RoutingEngine::new(&policy).route(&complete_record(), &[]);
        assert_eq!(decision.route, Route::StandardProcessing);
        assert!(decision.reasoning.contains("($5,000)"));
    }

    #[test]
    fn test_empty_table_falls_back_to_manual_review() {
        let engine = RoutingEngine::with_rules(vec![Box::new(InjuryRule::new())]);
        let decision = engine.route(&complete_record(), &[]);

        assert_eq!(decision.route, Route::ManualReview);
        assert_eq!(decision.rule, RuleKind::Fallback);
        assert!(!decision.reasoning.is_empty());
    }
}

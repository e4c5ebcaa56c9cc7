//! Routing rules.
//!
//! Each rule inspects a claim from one angle and either decides the route or
//! defers. The routing engine evaluates rules in a fixed order and stops at
//! the first decision:
//!
//! | Order | Rule | Route when it fires |
//! |-------|------|---------------------|
//! | 1 | Completeness | ManualReview |
//! | 2 | Fraud signal | InvestigationQueue |
//! | 3 | Injury | SpecialistQueue |
//! | 4 | Damage threshold | FastTrack / StandardProcessing / ManualReview |
//!
//! The damage-threshold rule always decides, so the default table is
//! exhaustive.

mod completeness;
mod damage;
mod fraud;
mod injury;

pub use completeness::CompletenessRule;
pub use damage::{format_currency, DamageThresholdRule};
pub use fraud::FraudSignalRule;
pub use injury::InjuryRule;

use crate::policy::RoutingPolicy;
use crate::types::{RoutingContext, RoutingDecision, RuleKind};

/// A single routing rule.
pub trait RoutingRule: Send + Sync {
    /// Which rule this is.
    fn kind(&self) -> RuleKind;

    /// The question this rule answers.
    fn question(&self) -> &'static str;

    /// Decide the route, or return `None` to defer to the next rule.
    fn evaluate(&self, context: &RoutingContext<'_>) -> Option<RoutingDecision>;
}

/// The standard rule table, in precedence order.
pub fn default_rules(policy: &RoutingPolicy) -> Vec<Box<dyn RoutingRule>> {
    vec![
        Box::new(CompletenessRule::new()),
        Box::new(FraudSignalRule::new(policy.fraud_keywords.clone())),
        Box::new(InjuryRule::new()),
        Box::new(DamageThresholdRule::new(policy.fast_track_threshold)),
    ]
}

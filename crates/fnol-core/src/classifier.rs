//! Claim-type classification.
//!
//! A priority cascade over the case-folded document: the first rule with any
//! keyword present wins, so injury always beats damage or collision wording
//! appearing in the same document. With no signal at all the document is
//! assumed to be an auto-line form.

use crate::policy::{ClaimTypeRule, RoutingPolicy};
use crate::types::ClaimType;

/// Ordered keyword classifier for claim types.
#[derive(Debug, Clone)]
pub struct ClaimTypeClassifier {
    rules: Vec<ClaimTypeRule>,
    fallback: ClaimType,
}

impl ClaimTypeClassifier {
    /// Build a classifier from an ordered rule list and a fallback type.
    ///
    /// Keywords are matched lower-case.
    pub fn new(rules: Vec<ClaimTypeRule>, fallback: ClaimType) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| ClaimTypeRule {
                claim_type: rule.claim_type,
                keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();

        Self { rules, fallback }
    }

    pub fn from_policy(policy: &RoutingPolicy) -> Self {
        Self::new(policy.claim_type_rules.clone(), policy.default_claim_type)
    }

    /// Classify a whole document.
    pub fn classify(&self, text: &str) -> ClaimType {
        let lower = text.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw.as_str())))
            .map(|rule| rule.claim_type)
            .unwrap_or(self.fallback)
    }
}

impl Default for ClaimTypeClassifier {
    fn default() -> Self {
        Self::from_policy(&RoutingPolicy::default())
    }
}

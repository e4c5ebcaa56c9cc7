//! Fraud-signal gate
//!
//! **Question**: Does the accident narrative contain a fraud indicator?
//!
//! Only the accident description is scanned. A record without a
//! description never matches; absence is not investigated.

use crate::types::{Route, RoutingContext, RoutingDecision, RuleKind};

use super::RoutingRule;

pub struct FraudSignalRule {
    keywords: Vec<String>,
}

impl FraudSignalRule {
    /// Keywords are matched as lower-case substrings.
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Keywords found in `description`, in keyword-list order.
    fn matches<'k>(&'k self, description: &str) -> Vec<&'k str> {
        let lower = description.to_lowercase();
        self.keywords
            .iter()
            .filter(|kw| lower.contains(kw.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl RoutingRule for FraudSignalRule {
    fn kind(&self) -> RuleKind {
        RuleKind::FraudSignal
    }

    fn question(&self) -> &'static str {
        "Does the accident description contain a fraud indicator?"
    }

    fn evaluate(&self, context: &RoutingContext<'_>) -> Option<RoutingDecision> {
        let description = context.record.description_of_accident.as_deref()?;

        let found = self.matches(description);
        if found.is_empty() {
            return None;
        }

        Some(RoutingDecision::new(
            self.kind(),
            Route::InvestigationQueue,
            format!(
                "Description contains potential fraud indicators ({})",
                found.join(", ")
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RoutingPolicy;
    use crate::record::fixtures::complete_record;

    fn rule() -> FraudSignalRule {
        FraudSignalRule::new(RoutingPolicy::default().fraud_keywords)
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let mut record = complete_record();
        record.description_of_accident = Some("The collision appears STAGED".to_string());
        let context = RoutingContext { record: &record, missing: &[] };

        let decision = rule().evaluate(&context).unwrap();
        assert_eq!(decision.route, Route::InvestigationQueue);
        assert_eq!(
            decision.reasoning,
            "Description contains potential fraud indicators (staged)"
        );
    }

    #[test]
    fn test_lists_all_matches_in_keyword_order() {
        let mut record = complete_record();
        record.description_of_accident =
            Some("Suspicious timing and inconsistent statements".to_string());
        let context = RoutingContext { record: &record, missing: &[] };

        let decision = rule().evaluate(&context).unwrap();
        assert!(decision.reasoning.ends_with("(inconsistent, suspicious)"));
    }

    #[test]
    fn test_clean_description_defers() {
        let record = complete_record();
        let context = RoutingContext { record: &record, missing: &[] };
        assert!(rule().evaluate(&context).is_none());
    }

    #[test]
    fn test_absent_description_defers() {
        let mut record = complete_record();
        record.description_of_accident = None;
        let context = RoutingContext { record: &record, missing: &[] };
        assert!(rule().evaluate(&context).is_none());
    }

    #[test]
    fn test_other_fields_are_not_scanned() {
        let mut record = complete_record();
        record.policyholder_name = Some("Fraud Fabricated".to_string());
        let context = RoutingContext { record: &record, missing: &[] };
        assert!(rule().evaluate(&context).is_none());
    }
}

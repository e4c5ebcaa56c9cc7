//! Completeness validation against the mandatory-field list.
//!
//! Incompleteness is a routing signal, not an error: the validator never
//! fails, it only reports which mandatory fields are missing.

use crate::policy::RoutingPolicy;
use crate::record::ClaimRecord;
use crate::types::ClaimField;

/// Checks a record against an ordered list of mandatory fields.
#[derive(Debug, Clone)]
pub struct CompletenessValidator {
    mandatory: Vec<ClaimField>,
}

impl CompletenessValidator {
    pub fn new(mandatory: Vec<ClaimField>) -> Self {
        Self { mandatory }
    }

    pub fn from_policy(policy: &RoutingPolicy) -> Self {
        Self::new(policy.mandatory_fields.clone())
    }

    /// Return the mandatory fields that are absent or blank.
    ///
    /// Order follows the mandatory list, not the alphabet.
    pub fn validate(&self, record: &ClaimRecord) -> Vec<ClaimField> {
        self.mandatory
            .iter()
            .copied()
            .filter(|field| !record.is_present(*field))
            .collect()
    }
}

impl Default for CompletenessValidator {
    fn default() -> Self {
        Self::new(ClaimField::MANDATORY.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::complete_record;

    #[test]
    fn test_complete_record_has_no_missing_fields() {
        let validator = CompletenessValidator::default();
        assert!(validator.validate(&complete_record()).is_empty());
    }

    #[test]
    fn test_empty_record_misses_every_mandatory_field_in_order() {
        let validator = CompletenessValidator::default();
        let missing = validator.validate(&ClaimRecord::default());
        assert_eq!(missing, ClaimField::MANDATORY.to_vec());
    }

    #[test]
    fn test_blank_string_counts_as_missing() {
        let mut record = complete_record();
        record.location_of_loss = Some(String::new());
        record.policy_number = Some(" \t".to_string());

        let missing = CompletenessValidator::default().validate(&record);
        assert_eq!(missing, vec![ClaimField::PolicyNumber, ClaimField::LocationOfLoss]);
    }

    #[test]
    fn test_optional_fields_are_ignored() {
        let mut record = complete_record();
        record.naic_code = None;
        record.estimated_damage = None;

        assert!(CompletenessValidator::default().validate(&record).is_empty());
    }

    #[test]
    fn test_declaration_order_not_alphabetical() {
        let validator = CompletenessValidator::new(vec![
            ClaimField::NaicCode,
            ClaimField::AssetId,
            ClaimField::ClaimType,
        ]);

        let missing = validator.validate(&ClaimRecord::default());
        assert_eq!(
            missing,
            vec![ClaimField::NaicCode, ClaimField::AssetId, ClaimField::ClaimType]
        );
    }
}

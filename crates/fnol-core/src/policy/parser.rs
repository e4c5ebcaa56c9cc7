//! Routing policy parsing from YAML/JSON.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::{ClaimField, ClaimType};

/// Claims strictly below this estimate are eligible for fast-track.
pub const DEFAULT_FAST_TRACK_THRESHOLD: Decimal = dec!(25000);

/// Narrative terms that send a claim to investigation.
pub const DEFAULT_FRAUD_KEYWORDS: &[&str] =
    &["fraud", "inconsistent", "staged", "suspicious", "fabricated"];

const INJURY_KEYWORDS: &[&str] = &[
    "injury", "injured", "hospital", "medical", "ambulance", "bodily",
];
const PROPERTY_DAMAGE_KEYWORDS: &[&str] = &["property", "damage"];
const COLLISION_KEYWORDS: &[&str] = &["collision", "accident"];

/// Errors that can occur when loading a routing policy.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Failed to read policy file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Policy validation failed: {0}")]
    ValidationError(String),

    #[error("Unsupported policy file format: {0}")]
    UnsupportedFormat(String),
}

/// One step of the claim-type cascade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClaimTypeRule {
    /// Type assigned when any keyword is present
    pub claim_type: ClaimType,

    /// Case-insensitive substrings to look for
    pub keywords: Vec<String>,
}

impl ClaimTypeRule {
    fn from_static(claim_type: ClaimType, keywords: &[&str]) -> Self {
        Self {
            claim_type,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Static configuration for validation, classification and routing.
///
/// Every section is optional in a policy document; omitted sections take the
/// built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoutingPolicy {
    /// Version of this policy document
    #[serde(default = "default_policy_version")]
    pub policy_version: String,

    /// Fields whose absence forces manual review, in reporting order
    #[serde(default = "default_mandatory_fields")]
    pub mandatory_fields: Vec<ClaimField>,

    /// Terms that flag the accident description for investigation
    #[serde(default = "default_fraud_keywords")]
    pub fraud_keywords: Vec<String>,

    /// Estimates strictly below this amount are fast-tracked
    #[serde(
        default = "default_fast_track_threshold",
        with = "rust_decimal::serde::float"
    )]
    pub fast_track_threshold: Decimal,

    /// Ordered claim-type cascade
    #[serde(default = "default_claim_type_rules")]
    pub claim_type_rules: Vec<ClaimTypeRule>,

    /// Type assigned when no cascade rule matches
    #[serde(default = "default_claim_type")]
    pub default_claim_type: ClaimType,
}

fn default_policy_version() -> String {
    "1.0".to_string()
}

fn default_mandatory_fields() -> Vec<ClaimField> {
    ClaimField::MANDATORY.to_vec()
}

fn default_fraud_keywords() -> Vec<String> {
    DEFAULT_FRAUD_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_fast_track_threshold() -> Decimal {
    DEFAULT_FAST_TRACK_THRESHOLD
}

fn default_claim_type_rules() -> Vec<ClaimTypeRule> {
    vec![
        ClaimTypeRule::from_static(ClaimType::Injury, INJURY_KEYWORDS),
        ClaimTypeRule::from_static(ClaimType::PropertyDamage, PROPERTY_DAMAGE_KEYWORDS),
        ClaimTypeRule::from_static(ClaimType::Collision, COLLISION_KEYWORDS),
    ]
}

fn default_claim_type() -> ClaimType {
    ClaimType::Auto
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self {
            policy_version: default_policy_version(),
            mandatory_fields: default_mandatory_fields(),
            fraud_keywords: default_fraud_keywords(),
            fast_track_threshold: default_fast_track_threshold(),
            claim_type_rules: default_claim_type_rules(),
            default_claim_type: default_claim_type(),
        }
    }
}

impl RoutingPolicy {
    /// Parse a policy from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, PolicyError> {
        let policy: RoutingPolicy = serde_yaml::from_str(yaml)?;
        policy.finish()
    }

    /// Parse a policy from JSON string.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: RoutingPolicy = serde_json::from_str(json)?;
        policy.finish()
    }

    /// Parse a policy from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a policy from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a policy file, choosing the format by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(PolicyError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Lower-case keywords, then validate.
    fn finish(mut self) -> Result<Self, PolicyError> {
        for keyword in &mut self.fraud_keywords {
            *keyword = keyword.trim().to_lowercase();
        }
        for rule in &mut self.claim_type_rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.trim().to_lowercase();
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate the policy structure.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.fast_track_threshold <= Decimal::ZERO {
            return Err(PolicyError::ValidationError(format!(
                "fast_track_threshold must be a positive number, got {}",
                self.fast_track_threshold
            )));
        }

        let mut seen = HashSet::new();
        for field in &self.mandatory_fields {
            if !seen.insert(field) {
                return Err(PolicyError::ValidationError(format!(
                    "Duplicate mandatory field: {}",
                    field
                )));
            }
        }

        validate_keywords("fraud_keywords", &self.fraud_keywords)?;

        let mut seen_types = HashSet::new();
        for rule in &self.claim_type_rules {
            if !seen_types.insert(rule.claim_type) {
                return Err(PolicyError::ValidationError(format!(
                    "Duplicate claim type rule: {}",
                    rule.claim_type
                )));
            }
            validate_keywords(
                &format!("claim_type_rules.{}", rule.claim_type),
                &rule.keywords,
            )?;
        }

        Ok(())
    }
}

fn validate_keywords(section: &str, keywords: &[String]) -> Result<(), PolicyError> {
    if keywords.is_empty() {
        return Err(PolicyError::ValidationError(format!(
            "{} must list at least one keyword",
            section
        )));
    }

    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(PolicyError::ValidationError(format!(
            "{} contains a blank keyword",
            section
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_policy_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/policies/default.yaml");
        let policy = RoutingPolicy::from_file(path).unwrap();
        assert_eq!(policy, RoutingPolicy::default());
    }

    const FULL_POLICY: &str = r#"
policy_version: "2.1"
mandatory_fields:
  - policy_number
  - date_of_loss
fraud_keywords:
  - Staged
  - "  Fabricated "
fast_track_threshold: 10000
claim_type_rules:
  - claim_type: injury
    keywords: [Whiplash]
default_claim_type: collision
"#;

    #[test]
    fn test_default_policy_is_valid() {
        let policy = RoutingPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.mandatory_fields, ClaimField::MANDATORY.to_vec());
        assert_eq!(policy.fast_track_threshold, dec!(25000));
        assert_eq!(policy.default_claim_type, ClaimType::Auto);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let policy = RoutingPolicy::from_yaml("{}").unwrap();
        assert_eq!(policy, RoutingPolicy::default());
    }

    #[test]
    fn test_parse_full_policy() {
        let policy = RoutingPolicy::from_yaml(FULL_POLICY).unwrap();

        assert_eq!(policy.policy_version, "2.1");
        assert_eq!(
            policy.mandatory_fields,
            vec![ClaimField::PolicyNumber, ClaimField::DateOfLoss]
        );
        assert_eq!(policy.fraud_keywords, vec!["staged", "fabricated"]);
        assert_eq!(policy.fast_track_threshold, dec!(10000));
        assert_eq!(policy.claim_type_rules[0].keywords, vec!["whiplash"]);
        assert_eq!(policy.default_claim_type, ClaimType::Collision);
    }

    #[test]
    fn test_parse_json_policy() {
        let policy = RoutingPolicy::from_json(r#"{"fast_track_threshold": 5000.5}"#).unwrap();
        assert_eq!(policy.fast_track_threshold, dec!(5000.5));
        assert_eq!(policy.fraud_keywords.len(), 5);
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        let result = RoutingPolicy::from_yaml("fast_track_threshold: 0");
        assert!(matches!(result, Err(PolicyError::ValidationError(_))));
    }

    #[test]
    fn test_duplicate_mandatory_field_rejected() {
        let yaml = "mandatory_fields: [policy_number, policy_number]";
        assert!(matches!(
            RoutingPolicy::from_yaml(yaml),
            Err(PolicyError::ValidationError(_))
        ));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let yaml = "fraud_keywords: [fraud, '   ']";
        assert!(matches!(
            RoutingPolicy::from_yaml(yaml),
            Err(PolicyError::ValidationError(_))
        ));
    }

    #[test]
    fn test_duplicate_claim_type_rule_rejected() {
        let yaml = r#"
claim_type_rules:
  - claim_type: injury
    keywords: [hospital]
  - claim_type: injury
    keywords: [ambulance]
"#;
        assert!(matches!(
            RoutingPolicy::from_yaml(yaml),
            Err(PolicyError::ValidationError(_))
        ));
    }

    #[test]
    fn test_unknown_field_name_rejected() {
        let yaml = "mandatory_fields: [shoe_size]";
        assert!(matches!(
            RoutingPolicy::from_yaml(yaml),
            Err(PolicyError::YamlError(_))
        ));
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(RoutingPolicy::from_yaml("retry_budget: 3").is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = RoutingPolicy::from_file("policy.toml");
        assert!(matches!(result, Err(PolicyError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = RoutingPolicy::from_file("/nonexistent/fnol/policy.yaml");
        assert!(matches!(result, Err(PolicyError::IoError(_))));
    }
}

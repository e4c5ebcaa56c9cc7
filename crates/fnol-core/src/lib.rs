//! # fnol-core
//!
//! Deterministic claim extraction, validation and routing for insurance
//! First Notice of Loss (FNOL) documents.
//!
//! The pipeline has three stages:
//! 1. **Assemble**: fixed textual patterns pull fields out of the document
//!    text into a flat 18-field [`ClaimRecord`]
//! 2. **Validate**: mandatory fields that are absent or blank are reported
//! 3. **Route**: an ordered rule table picks one of five lanes and explains why
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same text always produces the same result
//! 2. **Infallible pipeline**: A field that cannot be extracted is absent,
//!    never an error
//! 3. **Auditable**: Routing reasoning is built from the rule that fired
//! 4. **Stateless**: A [`ClaimProcessor`] holds only configuration and can be
//!    shared across threads
//!
//! ## Example
//!
//! ```rust,ignore
//! use fnol_core::{ClaimProcessor, Route};
//!
//! let processor = ClaimProcessor::default();
//! let result = processor.process(&document_text);
//!
//! match result.recommended_route {
//!     Route::FastTrack => println!("Fast-track: {}", result.reasoning),
//!     Route::ManualReview => println!("Missing: {:?}", result.missing_fields),
//!     other => println!("{}: {}", other, result.reasoning),
//! }
//! ```

pub mod assembler;
pub mod classifier;
pub mod extraction;
pub mod policy;
pub mod record;
pub mod router;
pub mod rules;
pub mod schema;
pub mod types;
pub mod validator;

// Re-export main types at crate root
pub use assembler::RecordAssembler;
pub use classifier::ClaimTypeClassifier;
pub use extraction::{extract, FieldPattern, PatternId};
pub use policy::{ClaimTypeRule, PolicyError, RoutingPolicy};
pub use record::{ClaimRecord, FieldValue};
pub use router::RoutingEngine;
pub use rules::RoutingRule;
pub use schema::{is_valid_result, validate_result_schema, SchemaError};
pub use types::{
    ClaimField, ClaimResult, ClaimType, Route, RoutingContext, RoutingDecision, RuleKind,
};
pub use validator::CompletenessValidator;

/// The full pipeline, configured once from a [`RoutingPolicy`].
#[derive(Debug)]
pub struct ClaimProcessor {
    policy: RoutingPolicy,
    assembler: RecordAssembler,
    validator: CompletenessValidator,
    router: RoutingEngine,
}

impl ClaimProcessor {
    /// Build a processor for the given policy.
    pub fn new(policy: RoutingPolicy) -> Self {
        Self {
            assembler: RecordAssembler::from_policy(&policy),
            validator: CompletenessValidator::from_policy(&policy),
            router: RoutingEngine::new(&policy),
            policy,
        }
    }

    /// The policy this processor was built with.
    pub fn policy(&self) -> &RoutingPolicy {
        &self.policy
    }

    /// Build the flat claim record for a document.
    pub fn assemble(&self, text: &str) -> ClaimRecord {
        self.assembler.assemble(text)
    }

    /// Mandatory fields missing from a record.
    pub fn validate(&self, record: &ClaimRecord) -> Vec<ClaimField> {
        self.validator.validate(record)
    }

    /// Route a record.
    pub fn route(&self, record: &ClaimRecord, missing: &[ClaimField]) -> RoutingDecision {
        self.router.route(record, missing)
    }

    /// Run every stage over one document's text.
    pub fn process(&self, text: &str) -> ClaimResult {
        let record = self.assemble(text);
        let missing = self.validate(&record);
        if !missing.is_empty() {
            tracing::debug!(missing = ?missing, "Mandatory fields missing");
        }

        let decision = self.route(&record, &missing);
        tracing::debug!(
            route = %decision.route,
            rule = ?decision.rule,
            "Claim routed"
        );

        ClaimResult::new(record, missing, decision)
    }
}

impl Default for ClaimProcessor {
    fn default() -> Self {
        Self::new(RoutingPolicy::default())
    }
}

/// Process one document with the default policy.
///
/// This is the main entry point for one-off use. Build a [`ClaimProcessor`]
/// to reuse configuration across documents.
pub fn process(text: &str) -> ClaimResult {
    ClaimProcessor::default().process(text)
}

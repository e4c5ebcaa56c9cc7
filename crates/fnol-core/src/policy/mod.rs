//! Routing policy configuration.
//!
//! The mandatory-field list, fraud keywords, claim-type cascade and
//! fast-track threshold are immutable configuration injected into the
//! pipeline at construction. Policies load from YAML or JSON; the defaults
//! reproduce the built-in rule set.

mod parser;

pub use parser::{
    ClaimTypeRule, PolicyError, RoutingPolicy, DEFAULT_FAST_TRACK_THRESHOLD,
    DEFAULT_FRAUD_KEYWORDS,
};

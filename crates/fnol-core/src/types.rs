//! Core types shared across the pipeline stages.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::ClaimRecord;

/// Every field of a flattened claim record, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimField {
    PolicyNumber,
    PolicyholderName,
    EffectiveDate,
    DateOfLoss,
    TimeOfLoss,
    LocationOfLoss,
    DescriptionOfAccident,
    Claimant,
    DriverName,
    ContactPhone,
    ContactEmail,
    AssetType,
    AssetId,
    VehicleDescription,
    EstimatedDamage,
    ClaimType,
    LineOfBusiness,
    NaicCode,
}

impl ClaimField {
    /// All 18 record fields in declaration order.
    pub const ALL: [ClaimField; 18] = [
        ClaimField::PolicyNumber,
        ClaimField::PolicyholderName,
        ClaimField::EffectiveDate,
        ClaimField::DateOfLoss,
        ClaimField::TimeOfLoss,
        ClaimField::LocationOfLoss,
        ClaimField::DescriptionOfAccident,
        ClaimField::Claimant,
        ClaimField::DriverName,
        ClaimField::ContactPhone,
        ClaimField::ContactEmail,
        ClaimField::AssetType,
        ClaimField::AssetId,
        ClaimField::VehicleDescription,
        ClaimField::EstimatedDamage,
        ClaimField::ClaimType,
        ClaimField::LineOfBusiness,
        ClaimField::NaicCode,
    ];

    /// Fields whose absence forces manual review.
    pub const MANDATORY: [ClaimField; 6] = [
        ClaimField::PolicyNumber,
        ClaimField::PolicyholderName,
        ClaimField::DateOfLoss,
        ClaimField::LocationOfLoss,
        ClaimField::DescriptionOfAccident,
        ClaimField::ClaimType,
    ];

    /// The record key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimField::PolicyNumber => "policy_number",
            ClaimField::PolicyholderName => "policyholder_name",
            ClaimField::EffectiveDate => "effective_date",
            ClaimField::DateOfLoss => "date_of_loss",
            ClaimField::TimeOfLoss => "time_of_loss",
            ClaimField::LocationOfLoss => "location_of_loss",
            ClaimField::DescriptionOfAccident => "description_of_accident",
            ClaimField::Claimant => "claimant",
            ClaimField::DriverName => "driver_name",
            ClaimField::ContactPhone => "contact_phone",
            ClaimField::ContactEmail => "contact_email",
            ClaimField::AssetType => "asset_type",
            ClaimField::AssetId => "asset_id",
            ClaimField::VehicleDescription => "vehicle_description",
            ClaimField::EstimatedDamage => "estimated_damage",
            ClaimField::ClaimType => "claim_type",
            ClaimField::LineOfBusiness => "line_of_business",
            ClaimField::NaicCode => "naic_code",
        }
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical claim type assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Injury,
    PropertyDamage,
    Collision,
    Auto,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Injury => "injury",
            ClaimType::PropertyDamage => "property_damage",
            ClaimType::Collision => "collision",
            ClaimType::Auto => "auto",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The routing lane a claim is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    ManualReview,
    InvestigationQueue,
    SpecialistQueue,
    FastTrack,
    StandardProcessing,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::ManualReview,
        Route::InvestigationQueue,
        Route::SpecialistQueue,
        Route::FastTrack,
        Route::StandardProcessing,
    ];

    /// Human-readable lane name.
    pub fn label(&self) -> &'static str {
        match self {
            Route::ManualReview => "Manual Review",
            Route::InvestigationQueue => "Investigation Queue",
            Route::SpecialistQueue => "Specialist Queue",
            Route::FastTrack => "Fast-Track",
            Route::StandardProcessing => "Standard Processing",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies which routing rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Completeness,
    FraudSignal,
    Injury,
    DamageThreshold,
    /// No rule in the table produced a decision
    Fallback,
}

/// Terminal output of the routing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// The lane the claim is sent to
    pub route: Route,

    /// Single human-readable justification
    pub reasoning: String,

    /// The rule that fired
    pub rule: RuleKind,
}

impl RoutingDecision {
    pub fn new(rule: RuleKind, route: Route, reasoning: impl Into<String>) -> Self {
        Self {
            route,
            reasoning: reasoning.into(),
            rule,
        }
    }
}

/// Input handed to every routing rule.
#[derive(Debug, Clone, Copy)]
pub struct RoutingContext<'a> {
    pub record: &'a ClaimRecord,
    pub missing: &'a [ClaimField],
}

/// The per-document result consumed by reporting layers.
///
/// Serializes to exactly four keys: `extractedFields`, `missingFields`,
/// `recommendedRoute` and `reasoning`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClaimResult {
    pub extracted_fields: ClaimRecord,
    pub missing_fields: Vec<ClaimField>,
    pub recommended_route: Route,
    pub reasoning: String,
}

impl ClaimResult {
    pub fn new(record: ClaimRecord, missing: Vec<ClaimField>, decision: RoutingDecision) -> Self {
        Self {
            extracted_fields: record,
            missing_fields: missing,
            recommended_route: decision.route,
            reasoning: decision.reasoning,
        }
    }
}

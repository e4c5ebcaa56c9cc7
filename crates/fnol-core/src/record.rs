//! The flattened canonical claim record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ClaimField, ClaimType};

/// Flat claim record with a fixed, closed set of 18 fields.
///
/// Every field is always present when serialized; absent values render as
/// `null`. Records are built once by the assembler and never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClaimRecord {
    // Policy information
    pub policy_number: Option<String>,
    pub policyholder_name: Option<String>,
    pub effective_date: Option<String>,

    // Incident information
    pub date_of_loss: Option<String>,
    pub time_of_loss: Option<String>,
    pub location_of_loss: Option<String>,
    pub description_of_accident: Option<String>,

    // Involved parties
    pub claimant: Option<String>,
    pub driver_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,

    // Asset details
    pub asset_type: Option<String>,
    pub asset_id: Option<String>,
    pub vehicle_description: Option<String>,
    /// Kept exact for reasoning text; serialized as a JSON number.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub estimated_damage: Option<Decimal>,

    // Classification
    pub claim_type: Option<ClaimType>,
    pub line_of_business: Option<String>,
    pub naic_code: Option<String>,
}

/// A borrowed view of one record value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(Decimal),
    ClaimType(ClaimType),
    Absent,
}

impl FieldValue<'_> {
    /// Absent values and blank strings both count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(_) | FieldValue::ClaimType(_) => false,
        }
    }
}

impl ClaimRecord {
    /// Look up a field by name.
    pub fn get(&self, field: ClaimField) -> FieldValue<'_> {
        match field {
            ClaimField::PolicyNumber => text(&self.policy_number),
            ClaimField::PolicyholderName => text(&self.policyholder_name),
            ClaimField::EffectiveDate => text(&self.effective_date),
            ClaimField::DateOfLoss => text(&self.date_of_loss),
            ClaimField::TimeOfLoss => text(&self.time_of_loss),
            ClaimField::LocationOfLoss => text(&self.location_of_loss),
            ClaimField::DescriptionOfAccident => text(&self.description_of_accident),
            ClaimField::Claimant => text(&self.claimant),
            ClaimField::DriverName => text(&self.driver_name),
            ClaimField::ContactPhone => text(&self.contact_phone),
            ClaimField::ContactEmail => text(&self.contact_email),
            ClaimField::AssetType => text(&self.asset_type),
            ClaimField::AssetId => text(&self.asset_id),
            ClaimField::VehicleDescription => text(&self.vehicle_description),
            ClaimField::EstimatedDamage => self
                .estimated_damage
                .map_or(FieldValue::Absent, FieldValue::Number),
            ClaimField::ClaimType => self
                .claim_type
                .map_or(FieldValue::Absent, FieldValue::ClaimType),
            ClaimField::LineOfBusiness => text(&self.line_of_business),
            ClaimField::NaicCode => text(&self.naic_code),
        }
    }

    /// Whether a field holds a usable value.
    pub fn is_present(&self, field: ClaimField) -> bool {
        !self.get(field).is_missing()
    }
}

fn text(value: &Option<String>) -> FieldValue<'_> {
    value
        .as_deref()
        .map_or(FieldValue::Absent, FieldValue::Text)
}

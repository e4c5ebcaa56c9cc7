//! Record assembly: one extraction pass over a document.
//!
//! Every field pattern runs once and the classifier runs once; the results
//! are merged into a flat [`ClaimRecord`]. A failed field only ever makes
//! that one field absent, so assembly itself cannot fail.

use crate::classifier::ClaimTypeClassifier;
use crate::extraction::{extract_field, PatternId};
use crate::policy::RoutingPolicy;
use crate::record::ClaimRecord;
use rust_decimal::Decimal;

/// Every FNOL form handled here describes a vehicle.
pub const ASSET_TYPE_VEHICLE: &str = "vehicle";

/// Builds claim records from raw document text.
#[derive(Debug, Clone, Default)]
pub struct RecordAssembler {
    classifier: ClaimTypeClassifier,
}

impl RecordAssembler {
    pub fn new(classifier: ClaimTypeClassifier) -> Self {
        Self { classifier }
    }

    pub fn from_policy(policy: &RoutingPolicy) -> Self {
        Self::new(ClaimTypeClassifier::from_policy(policy))
    }

    /// Assemble the flat record for one document.
    pub fn assemble(&self, text: &str) -> ClaimRecord {
        let field = |id: PatternId| extract_field(text, id);

        let location_of_loss = join_present(
            [field(PatternId::Street), field(PatternId::CityStateZip)],
            ", ",
        );
        let vehicle_description = join_present(
            [
                field(PatternId::VehicleYear),
                field(PatternId::VehicleMake),
                field(PatternId::VehicleModel),
            ],
            " ",
        );
        let estimated_damage = field(PatternId::DamageEstimate).and_then(|raw| parse_amount(&raw));
        let claim_type = self.classifier.classify(text);

        let record = ClaimRecord {
            policy_number: field(PatternId::PolicyNumber),
            policyholder_name: field(PatternId::PolicyholderName),
            effective_date: field(PatternId::EffectiveDate),

            date_of_loss: field(PatternId::DateOfLoss),
            time_of_loss: field(PatternId::TimeOfLoss),
            location_of_loss,
            description_of_accident: field(PatternId::Description),

            claimant: field(PatternId::Claimant),
            driver_name: field(PatternId::DriverName),
            contact_phone: field(PatternId::ContactPhone),
            contact_email: field(PatternId::ContactEmail),

            asset_type: Some(ASSET_TYPE_VEHICLE.to_string()),
            asset_id: field(PatternId::Vin),
            vehicle_description,
            estimated_damage,

            claim_type: Some(claim_type),
            line_of_business: field(PatternId::LineOfBusiness),
            naic_code: field(PatternId::NaicCode),
        };

        tracing::debug!(
            claim_type = %claim_type,
            policy_number = ?record.policy_number,
            estimated_damage = ?record.estimated_damage,
            "Assembled claim record"
        );

        record
    }
}

/// Join the present parts, or `None` when every part is absent.
fn join_present<const N: usize>(parts: [Option<String>; N], separator: &str) -> Option<String> {
    let present: Vec<String> = parts.into_iter().flatten().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(separator))
    }
}

/// Parse an estimate such as `12,345.67` exactly. Thousands separators are
/// dropped; anything that is not a number, or does not fit a `Decimal`, is
/// treated as absent.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    match cleaned.trim().parse::<Decimal>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(raw, error = %e, "Damage estimate is not a number");
            None
        }
    }
}

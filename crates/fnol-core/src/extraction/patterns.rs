//! Declarative field pattern table.
//!
//! Every extractable field is one row: an identifier, a regex with exactly
//! one capture group, and a post-processing step. The table is compiled once
//! and interpreted by [`super::extract`]. Adding a field means adding a row
//! here; the extraction routine never changes.
//!
//! All patterns compile case-insensitive and multi-line, so `[A-Z]` also
//! matches lower-case text and `^`/`$` anchor at line boundaries.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// Section headers that end a multi-line accident description.
pub const DESCRIPTION_STOP_SECTIONS: &[&str] = &[
    "LOSS",
    "DRIVER",
    "OWNER",
    "VEHICLE",
    "INSURED VEHICLE",
    "WITNESSES",
];

/// Identifies one row of the pattern table.
///
/// Declaration order matches the order of [`FIELD_PATTERNS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternId {
    PolicyNumber,
    PolicyholderName,
    EffectiveDate,
    DateOfLoss,
    TimeOfLoss,
    Street,
    CityStateZip,
    Description,
    Claimant,
    DriverName,
    ContactPhone,
    ContactEmail,
    VehicleYear,
    VehicleMake,
    VehicleModel,
    Vin,
    DamageEstimate,
    LineOfBusiness,
    NaicCode,
}

/// Transformation applied to the raw capture before whitespace normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Plain whitespace normalization.
    Plain,

    /// Keep leading lines until one starts with any of these headers.
    /// The first line is always kept.
    StopAtSection(&'static [&'static str]),

    /// Clock time rendered as `H:MM AM` with a single space before the
    /// meridiem.
    Meridiem,
}

/// A named text-matching rule.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    pub id: PatternId,
    pub regex: Regex,
    pub post: PostProcess,
}

impl FieldPattern {
    /// Compile a pattern with case-insensitive, multi-line semantics.
    pub fn new(id: PatternId, pattern: &str, post: PostProcess) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()?;

        Ok(Self { id, regex, post })
    }
}

lazy_static! {
    /// The full pattern table, one row per [`PatternId`] in declaration order.
    pub static ref FIELD_PATTERNS: Vec<FieldPattern> = vec![
        // =====================================================================
        // POLICY
        // =====================================================================
        FieldPattern::new(
            PatternId::PolicyNumber,
            r"POLICY NUMBER[:\s]*([A-Z0-9-]+)",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::PolicyholderName,
            r"NAME OF INSURED[:\s]*(?:\(First, Middle, Last\))?[:\s]*([A-Za-z\s,.]+?)(?:\n|DATE OF BIRTH)",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::EffectiveDate,
            r"EFFECTIVE DATE[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
            PostProcess::Plain,
        ).unwrap(),

        // =====================================================================
        // INCIDENT
        // =====================================================================
        FieldPattern::new(
            PatternId::DateOfLoss,
            r"DATE OF LOSS(?: AND TIME)?[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::TimeOfLoss,
            r"(\d{1,2}:\d{2}\s*(?:AM|PM))",
            PostProcess::Meridiem,
        ).unwrap(),
        FieldPattern::new(
            PatternId::Street,
            r"STREET:[:\s]*([^\n]+)",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::CityStateZip,
            r"CITY, STATE, ZIP:[:\s]*([^\n]+)",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::Description,
            r"DESCRIPTION OF ACCIDENT[:\s]*(?:\(ACORD[^)]*\))?[:\s]*([^\n]+(?:\n[^\n]+)*)",
            PostProcess::StopAtSection(DESCRIPTION_STOP_SECTIONS),
        ).unwrap(),

        // =====================================================================
        // INVOLVED PARTIES
        // =====================================================================
        FieldPattern::new(
            PatternId::Claimant,
            r"NAME OF INSURED[:\s]*(?:\(First, Middle, Last\))?[:\s]*([A-Za-z\s,.]+?)(?:\n|INSURED)",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::DriverName,
            r"DRIVER'S NAME AND ADDRESS[:\s]*(?:\(Check if same as insured\))?[:\s]*PHONE[^\n]*\n([A-Za-z\s,.]+?)(?:\n|PHONE)",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::ContactPhone,
            r"PHONE #[:\s]*(?:HOME BUS CELL )?PRIMARY[:\s]*(\d{3}[-.\s]?\d{3}[-.\s]?\d{4})",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::ContactEmail,
            r"E-MAIL ADDRESS:?[:\s]*PRIMARY(?: E-MAIL ADDRESS:?)?[:\s]*(\S+@\S+)",
            PostProcess::Plain,
        ).unwrap(),

        // =====================================================================
        // ASSET
        // =====================================================================
        FieldPattern::new(
            PatternId::VehicleYear,
            r"(?:VEH #[:\s]*)?YEAR[:\s]*(\d{4})",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::VehicleMake,
            r"MAKE:[:\s]*([A-Z][A-Za-z]+)",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::VehicleModel,
            r"MODEL:[:\s]*([A-Za-z0-9\s]+?)(?:\n|BODY)",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::Vin,
            r"V\.I\.N\.:[:\s]*([A-Z0-9]{17})",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::DamageEstimate,
            r"ESTIMATE AMOUNT:[:\s]*\$?([0-9,]+(?:\.\d{2})?)",
            PostProcess::Plain,
        ).unwrap(),

        // =====================================================================
        // CLASSIFICATION
        // =====================================================================
        FieldPattern::new(
            PatternId::LineOfBusiness,
            r"LINE OF BUSINESS[:\s]*([A-Z\s]+?)(?:\n|ACORD|INSURED)",
            PostProcess::Plain,
        ).unwrap(),
        FieldPattern::new(
            PatternId::NaicCode,
            r"CARRIER NAIC CODE[:\s]*(\d+)",
            PostProcess::Plain,
        ).unwrap(),
    ];
}

/// Get the compiled pattern for a field.
pub fn pattern(id: PatternId) -> &'static FieldPattern {
    &FIELD_PATTERNS[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_ids() {
        for (index, row) in FIELD_PATTERNS.iter().enumerate() {
            assert_eq!(row.id as usize, index, "{:?} is out of order", row.id);
        }
        assert_eq!(pattern(PatternId::NaicCode).id, PatternId::NaicCode);
    }

    #[test]
    fn test_every_pattern_has_one_capture_group() {
        for row in FIELD_PATTERNS.iter() {
            // captures_len counts the implicit whole-match group
            assert_eq!(row.regex.captures_len(), 2, "{:?}", row.id);
        }
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let row = pattern(PatternId::PolicyNumber);
        assert!(row.regex.is_match("policy number: abc-123"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(FieldPattern::new(PatternId::NaicCode, r"(unclosed", PostProcess::Plain).is_err());
    }
}

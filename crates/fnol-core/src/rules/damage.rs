//! Damage-threshold gate
//!
//! **Question**: Is the estimated damage low enough to fast-track?
//!
//! This is the terminal rule and always decides:
//!
//! | Estimate | Route |
//! |----------|-------|
//! | `< threshold` | FastTrack |
//! | `>= threshold` | StandardProcessing |
//! | absent | ManualReview |

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Route, RoutingContext, RoutingDecision, RuleKind};

use super::RoutingRule;

pub struct DamageThresholdRule {
    threshold: Decimal,
}

impl DamageThresholdRule {
    pub fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }
}

impl RoutingRule for DamageThresholdRule {
    fn kind(&self) -> RuleKind {
        RuleKind::DamageThreshold
    }

    fn question(&self) -> &'static str {
        "Is the estimated damage below the fast-track threshold?"
    }

    fn evaluate(&self, context: &RoutingContext<'_>) -> Option<RoutingDecision> {
        let Some(amount) = context.record.estimated_damage else {
            return Some(RoutingDecision::new(
                self.kind(),
                Route::ManualReview,
                "Estimated damage amount is missing or invalid",
            ));
        };

        let amount_text = format_currency(amount, true);
        let threshold_text = format_currency(self.threshold, false);

        let decision = if amount < self.threshold {
            RoutingDecision::new(
                self.kind(),
                Route::FastTrack,
                format!(
                    "Estimated damage ({}) is below fast-track threshold ({})",
                    amount_text, threshold_text
                ),
            )
        } else {
            RoutingDecision::new(
                self.kind(),
                Route::StandardProcessing,
                format!(
                    "Estimated damage ({}) exceeds fast-track threshold ({})",
                    amount_text, threshold_text
                ),
            )
        };

        Some(decision)
    }
}

/// Format an amount as `$12,345.67`, rounding half away from zero to cents.
///
/// With `always_cents` false, whole amounts drop the fraction (`$25,000`).
pub fn format_currency(amount: Decimal, always_cents: bool) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.2}", rounded);
    let (digits, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    if always_cents || !rounded.fract().is_zero() {
        format!("{}${}.{}", sign, grouped, fraction)
    } else {
        format!("{}${}", sign, grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::complete_record;
    use rust_decimal_macros::dec;

    fn decide(amount: Option<Decimal>) -> RoutingDecision {
        let mut record = complete_record();
        record.estimated_damage = amount;
        let context = RoutingContext { record: &record, missing: &[] };
        DamageThresholdRule::new(dec!(25000)).evaluate(&context).unwrap()
    }

    #[test]
    fn test_below_threshold_fast_tracks() {
        let decision = decide(Some(dec!(10000)));
        assert_eq!(decision.route, Route::FastTrack);
        assert_eq!(
            decision.reasoning,
            "Estimated damage ($10,000.00) is below fast-track threshold ($25,000)"
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let decision = decide(Some(dec!(25000)));
        assert_eq!(decision.route, Route::StandardProcessing);
        assert_eq!(
            decision.reasoning,
            "Estimated damage ($25,000.00) exceeds fast-track threshold ($25,000)"
        );

        assert_eq!(decide(Some(dec!(24999.99))).route, Route::FastTrack);
    }

    #[test]
    fn test_above_threshold_is_standard() {
        assert_eq!(decide(Some(dec!(50000))).route, Route::StandardProcessing);
    }

    #[test]
    fn test_huge_estimate_is_reported_exactly() {
        let decision = decide(Some(dec!(999999999999999999999.00)));
        assert_eq!(decision.route, Route::StandardProcessing);
        assert_eq!(
            decision.reasoning,
            "Estimated damage ($999,999,999,999,999,999,999.00) exceeds fast-track threshold ($25,000)"
        );
    }

    #[test]
    fn test_absent_amount_needs_manual_review() {
        let decision = decide(None);
        assert_eq!(decision.route, Route::ManualReview);
        assert_eq!(decision.reasoning, "Estimated damage amount is missing or invalid");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(0), true), "$0.00");
        assert_eq!(format_currency(dec!(999.5), true), "$999.50");
        assert_eq!(format_currency(dec!(1234567.891), true), "$1,234,567.89");
        assert_eq!(format_currency(dec!(0.125), true), "$0.13");
        assert_eq!(format_currency(dec!(25000), false), "$25,000");
        assert_eq!(format_currency(dec!(25000.00), false), "$25,000");
        assert_eq!(format_currency(dec!(2500.25), false), "$2,500.25");
        assert_eq!(format_currency(dec!(-12), true), "-$12.00");
        assert_eq!(format_currency(dec!(100000), false), "$100,000");
        assert_eq!(
            format_currency(Decimal::MAX, true),
            "$79,228,162,514,264,337,593,543,950,335.00"
        );
    }
}

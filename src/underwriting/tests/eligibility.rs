use rust_decimal_macros::dec;

use super::common::*;
use crate::config::{CreditScoreTier, FoirPolicy, LendingConfig};
use crate::underwriting::domain::{EligibilityStatus, FailureReason};
use crate::underwriting::eligibility::EligibilityEngine;
use crate::underwriting::messages::borrower_message;

#[test]
fn tier_ladder_boundaries_are_exact() {
    let engine = engine();
    let cases = [
        (649u16, None),
        (650, Some(dec!(5000))),
        (699, Some(dec!(5000))),
        (700, Some(dec!(10000))),
        (749, Some(dec!(10000))),
        (750, Some(dec!(15000))),
        (799, Some(dec!(15000))),
        (800, Some(dec!(20000))),
        (810, Some(dec!(20000))),
    ];

    for (score, expected) in cases {
        let decision = engine.evaluate(score, dec!(30000), dec!(0));
        match expected {
            Some(amount) => {
                assert_eq!(decision.status, EligibilityStatus::Eligible, "score {score}");
                assert_eq!(decision.max_eligible_amount, Some(amount), "score {score}");
                assert!(decision.failure_reason.is_none());
            }
            None => {
                assert_eq!(decision.status, EligibilityStatus::Rejected, "score {score}");
                assert_eq!(
                    decision.failure_reason,
                    Some(FailureReason::LowCreditScore),
                    "score {score}"
                );
                assert!(decision.max_eligible_amount.is_none());
            }
        }
        assert_eq!(decision.credit_score_used, Some(score));
    }
}

#[test]
fn income_and_existing_emi_are_recorded_but_not_consulted() {
    let engine = engine();
    let with_income = engine.evaluate(700, dec!(100000), dec!(0));
    let without_income = engine.evaluate(700, dec!(0), dec!(95000));

    // Same verdict either way; the capacity check is gated off by default.
    assert_eq!(with_income.status, without_income.status);
    assert_eq!(
        with_income.max_eligible_amount,
        without_income.max_eligible_amount
    );

    assert_eq!(with_income.income_used, Some(dec!(100000)));
    assert_eq!(without_income.existing_emi, Some(dec!(95000)));
    assert!(with_income.proposed_emi.is_none());
    assert!(with_income.foir_ratio.is_none());
}

#[test]
fn evaluation_is_deterministic() {
    let engine = engine();
    let first = engine.evaluate(760, dec!(30000), dec!(5000));
    let second = engine.evaluate(760, dec!(30000), dec!(5000));
    assert_eq!(first, second);
}

#[test]
fn tier_amount_is_clamped_to_platform_max() {
    let engine = EligibilityEngine::new(LendingConfig {
        tiers: vec![CreditScoreTier {
            min_score: 600,
            max_loan_amount: dec!(30000),
        }],
        ..LendingConfig::default()
    });

    let decision = engine.evaluate(700, dec!(30000), dec!(0));
    assert_eq!(decision.max_eligible_amount, Some(dec!(20000)));
}

#[test]
fn unsorted_tier_tables_are_normalized() {
    let mut config = LendingConfig::default();
    config.tiers.reverse();
    let engine = EligibilityEngine::new(config);

    let decision = engine.evaluate(805, dec!(30000), dec!(0));
    assert_eq!(decision.max_eligible_amount, Some(dec!(20000)));
}

#[test]
fn foir_policy_rejects_invalid_income() {
    let engine = EligibilityEngine::new(LendingConfig {
        foir: Some(FoirPolicy::default()),
        ..LendingConfig::default()
    });

    let decision = engine.evaluate(810, dec!(0), dec!(0));
    assert_eq!(decision.status, EligibilityStatus::Rejected);
    assert_eq!(decision.failure_reason, Some(FailureReason::InvalidIncome));
}

#[test]
fn foir_policy_rejects_exhausted_capacity() {
    let engine = EligibilityEngine::new(LendingConfig {
        foir: Some(FoirPolicy::default()),
        ..LendingConfig::default()
    });

    // Existing obligations already exceed half the income.
    let decision = engine.evaluate(810, dec!(10000), dec!(6000));
    assert_eq!(decision.status, EligibilityStatus::Rejected);
    assert_eq!(decision.failure_reason, Some(FailureReason::NoEmiCapacity));
}

#[test]
fn foir_policy_passes_ample_capacity_at_tier_amount() {
    let engine = EligibilityEngine::new(LendingConfig {
        foir: Some(FoirPolicy::default()),
        ..LendingConfig::default()
    });

    let decision = engine.evaluate(810, dec!(40000), dec!(0));
    assert_eq!(decision.status, EligibilityStatus::Eligible);
    assert_eq!(decision.max_eligible_amount, Some(dec!(20000)));
    assert_eq!(decision.proposed_emi, Some(dec!(1776.98)));
    assert_eq!(decision.foir_ratio, Some(dec!(0.0444)));
}

#[test]
fn foir_policy_caps_amount_below_tier() {
    let engine = EligibilityEngine::new(LendingConfig {
        foir: Some(FoirPolicy::default()),
        ..LendingConfig::default()
    });

    // Capacity of 1000/month over 12 months amortizes well under the
    // 20000 tier amount.
    let decision = engine.evaluate(810, dec!(4000), dec!(1000));
    assert_eq!(decision.status, EligibilityStatus::Eligible);
    let amount = decision.max_eligible_amount.expect("capped amount");
    assert!(amount < dec!(20000), "got {amount}");
    assert!(decision.foir_ratio.expect("ratio") <= dec!(0.50));
}

#[test]
fn default_config_keeps_foir_disabled() {
    assert!(LendingConfig::default().foir.is_none());
}

#[test]
fn borrower_messages_match_platform_wording() {
    assert_eq!(
        borrower_message(EligibilityStatus::Eligible, None),
        "You are eligible for the requested loan."
    );
    assert_eq!(
        borrower_message(
            EligibilityStatus::Rejected,
            Some(FailureReason::LowCreditScore)
        ),
        "Your credit score is below the required threshold (650)."
    );
    assert_eq!(
        borrower_message(
            EligibilityStatus::Rejected,
            Some(FailureReason::CreditProfileNotFound)
        ),
        "Credit data not available. Please retry later."
    );
    assert_eq!(
        borrower_message(EligibilityStatus::Rejected, None),
        "You are not eligible at this time."
    );
}

//! Dormant FOIR (fixed-obligation-to-income-ratio) affordability cap.
//!
//! This policy is deliberately not part of the default decision path: it runs
//! only when [`crate::config::LendingConfig::foir`] is set, which the
//! platform default leaves as `None`. Keeping it as a named strategy rather
//! than dead code makes its presence a testable configuration choice.

use rust_decimal::Decimal;

use crate::config::FoirPolicy;
use crate::money::{round_cents, round_ratio, Money};

use super::super::amortization::AmortizationCalculator;
use super::super::domain::FailureReason;

/// Result of assessing repayment capacity against the configured FOIR cap.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CapacityAssessment {
    /// Capacity allows the (possibly reduced) amount.
    Within {
        max_eligible_amount: Money,
        proposed_emi: Money,
        foir_ratio: Decimal,
    },
    /// Capacity check failed outright.
    Rejected {
        reason: FailureReason,
        max_eligible_amount: Option<Money>,
        proposed_emi: Option<Money>,
        foir_ratio: Option<Decimal>,
    },
}

pub(crate) fn assess(
    policy: &FoirPolicy,
    calculator: &AmortizationCalculator,
    tier_amount: Money,
    monthly_income: Money,
    existing_emi: Money,
) -> CapacityAssessment {
    if monthly_income <= Decimal::ZERO {
        return CapacityAssessment::Rejected {
            reason: FailureReason::InvalidIncome,
            max_eligible_amount: None,
            proposed_emi: None,
            foir_ratio: None,
        };
    }

    let max_total_emi = monthly_income * policy.max_foir;
    let capacity = round_cents(max_total_emi - existing_emi);

    if capacity <= Decimal::ZERO {
        return CapacityAssessment::Rejected {
            reason: FailureReason::NoEmiCapacity,
            max_eligible_amount: None,
            proposed_emi: None,
            foir_ratio: None,
        };
    }

    let foir_based_max = calculator.principal_from_emi(capacity, policy.assumed_tenure_months);
    let max_eligible_amount = tier_amount.min(foir_based_max);
    let proposed_emi = calculator.emi(max_eligible_amount, policy.assumed_tenure_months);
    let foir_ratio = round_ratio((existing_emi + proposed_emi) / monthly_income);

    if foir_ratio > policy.max_foir {
        return CapacityAssessment::Rejected {
            reason: FailureReason::FoirExceeded,
            max_eligible_amount: Some(max_eligible_amount),
            proposed_emi: Some(proposed_emi),
            foir_ratio: Some(foir_ratio),
        };
    }

    CapacityAssessment::Within {
        max_eligible_amount,
        proposed_emi,
        foir_ratio,
    }
}

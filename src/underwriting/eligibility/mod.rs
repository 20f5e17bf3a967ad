mod foir;
mod tiers;

use crate::config::LendingConfig;
use crate::money::Money;

use super::amortization::AmortizationCalculator;
use super::domain::{EligibilityDecision, EligibilityStatus, FailureReason};

use foir::CapacityAssessment;

/// Stateless engine mapping a credit score onto an eligibility verdict and a
/// maximum eligible loan amount.
///
/// `monthly_income` and `existing_emi` are accepted and recorded on the
/// decision, but the default decision path does not consult them: the
/// income-based capacity check only runs when the configuration carries a
/// [`crate::config::FoirPolicy`].
pub struct EligibilityEngine {
    config: LendingConfig,
    capacity_calculator: Option<AmortizationCalculator>,
}

impl EligibilityEngine {
    pub fn new(config: LendingConfig) -> Self {
        let mut config = config;
        // First rung at or below the score wins, so the ladder must descend.
        config
            .tiers
            .sort_unstable_by(|a, b| b.min_score.cmp(&a.min_score));
        let capacity_calculator = config
            .foir
            .is_some()
            .then(|| AmortizationCalculator::new(config.clone()));
        Self {
            config,
            capacity_calculator,
        }
    }

    /// Evaluate a concrete credit score. Pure and deterministic; the
    /// credit-profile-not-found case is a caller-level precondition handled
    /// via [`EligibilityDecision::credit_profile_unavailable`].
    pub fn evaluate(
        &self,
        credit_score: u16,
        monthly_income: Money,
        existing_emi: Money,
    ) -> EligibilityDecision {
        let mut decision = EligibilityDecision {
            status: EligibilityStatus::Rejected,
            max_eligible_amount: None,
            failure_reason: None,
            credit_score_used: Some(credit_score),
            income_used: Some(monthly_income),
            existing_emi: Some(existing_emi),
            proposed_emi: None,
            foir_ratio: None,
        };

        let tier_amount = match tiers::tier_amount(&self.config.tiers, credit_score) {
            Some(amount) => amount.min(self.config.platform_max_loan_amount),
            None => {
                decision.failure_reason = Some(FailureReason::LowCreditScore);
                return decision;
            }
        };

        match (&self.config.foir, &self.capacity_calculator) {
            (Some(policy), Some(calculator)) => {
                match foir::assess(policy, calculator, tier_amount, monthly_income, existing_emi)
                {
                    CapacityAssessment::Within {
                        max_eligible_amount,
                        proposed_emi,
                        foir_ratio,
                    } => {
                        decision.status = EligibilityStatus::Eligible;
                        decision.max_eligible_amount = Some(max_eligible_amount);
                        decision.proposed_emi = Some(proposed_emi);
                        decision.foir_ratio = Some(foir_ratio);
                    }
                    CapacityAssessment::Rejected {
                        reason,
                        max_eligible_amount,
                        proposed_emi,
                        foir_ratio,
                    } => {
                        decision.failure_reason = Some(reason);
                        decision.max_eligible_amount = max_eligible_amount;
                        decision.proposed_emi = proposed_emi;
                        decision.foir_ratio = foir_ratio;
                    }
                }
            }
            _ => {
                decision.status = EligibilityStatus::Eligible;
                decision.max_eligible_amount = Some(tier_amount);
            }
        }

        decision
    }
}

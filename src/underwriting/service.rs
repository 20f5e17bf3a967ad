use std::sync::Arc;

use tracing::info;

use crate::config::LendingConfig;
use crate::money::Money;

use super::amortization::{AmortizationCalculator, InvalidTenureError};
use super::domain::{
    BorrowerProfile, EligibilityDecision, EligibilityRecord, EligibilityStatus,
    LoanCalculationRecord, LoanCalculationResult, UserId,
};
use super::eligibility::EligibilityEngine;
use super::repository::{CreditBureau, LendingStore, RepositoryError};

/// Orchestrator composing the bureau lookup, the eligibility engine, the
/// amortization calculator, and the persistence boundary. The engines stay
/// pure; all side effects live here.
pub struct UnderwritingService<B, S> {
    bureau: Arc<B>,
    store: Arc<S>,
    engine: EligibilityEngine,
    calculator: AmortizationCalculator,
    config: LendingConfig,
}

impl<B, S> UnderwritingService<B, S>
where
    B: CreditBureau + 'static,
    S: LendingStore + 'static,
{
    pub fn new(bureau: Arc<B>, store: Arc<S>, config: LendingConfig) -> Self {
        Self {
            bureau,
            store,
            engine: EligibilityEngine::new(config.clone()),
            calculator: AmortizationCalculator::new(config.clone()),
            config,
        }
    }

    /// Run an eligibility check for the borrower and persist the outcome.
    ///
    /// A missing credit snapshot is recorded as a rejection with reason
    /// `CREDIT_PROFILE_NOT_FOUND`, not surfaced as an error.
    pub fn check_eligibility(
        &self,
        borrower: &BorrowerProfile,
    ) -> Result<EligibilityRecord, UnderwritingError> {
        let snapshot = self.bureau.latest_snapshot(&borrower.user_id)?;

        let record = match &snapshot {
            None => {
                info!(user = %borrower.user_id.0, "no credit data for subject");
                EligibilityRecord::fresh(
                    borrower.user_id.clone(),
                    EligibilityDecision::credit_profile_unavailable(),
                    None,
                )
            }
            Some(snapshot) => {
                let decision = self.engine.evaluate(
                    snapshot.credit_score,
                    borrower.monthly_income,
                    snapshot.total_existing_emi,
                );
                info!(
                    user = %borrower.user_id.0,
                    score = snapshot.credit_score,
                    status = decision.status.label(),
                    "eligibility evaluated"
                );
                EligibilityRecord::fresh(borrower.user_id.clone(), decision, Some(snapshot))
            }
        };

        Ok(self.store.upsert_eligibility(record)?)
    }

    /// Compute and persist a repayment plan over the subject's previously
    /// decided eligible amount. Fails closed when the eligibility record is
    /// absent, not eligible, or below the platform minimum.
    pub fn calculate_loan(
        &self,
        user_id: &UserId,
        tenure_months: u32,
    ) -> Result<LoanCalculationResult, UnderwritingError> {
        let eligible_amount = self.verified_eligible_amount(user_id)?;
        let result = self.calculator.plan(eligible_amount, tenure_months)?;

        self.store
            .upsert_calculation(LoanCalculationRecord::fresh(user_id.clone(), &result))?;

        info!(
            user = %user_id.0,
            principal = %result.principal,
            tenure = tenure_months,
            emi = %result.monthly_emi,
            "loan calculation stored"
        );

        Ok(result)
    }

    /// Read back the persisted eligibility record, if any.
    pub fn eligibility(&self, user_id: &UserId) -> Result<Option<EligibilityRecord>, UnderwritingError> {
        Ok(self.store.fetch_eligibility(user_id)?)
    }

    /// Read back the persisted calculation record, if any.
    pub fn calculation(
        &self,
        user_id: &UserId,
    ) -> Result<Option<LoanCalculationRecord>, UnderwritingError> {
        Ok(self.store.fetch_calculation(user_id)?)
    }

    fn verified_eligible_amount(&self, user_id: &UserId) -> Result<Money, UnderwritingError> {
        let record = self
            .store
            .fetch_eligibility(user_id)?
            .ok_or(UnderwritingError::EligibilityNotFound)?;

        if record.status != EligibilityStatus::Eligible {
            return Err(UnderwritingError::NotEligible {
                reason: record.borrower_message().to_string(),
            });
        }

        let amount = record.max_eligible_amount.unwrap_or_default();
        if amount < self.config.min_loan_amount {
            return Err(UnderwritingError::BelowMinimum {
                amount,
                minimum: self.config.min_loan_amount,
            });
        }

        Ok(amount)
    }
}

/// Caller-visible, locally recoverable failures raised by the underwriting
/// flow. None are process-fatal.
#[derive(Debug, thiserror::Error)]
pub enum UnderwritingError {
    #[error("no eligibility record found; complete the eligibility check first")]
    EligibilityNotFound,
    #[error("not eligible for a loan: {reason}")]
    NotEligible { reason: String },
    #[error("eligible amount {amount} is below the minimum loan amount {minimum}")]
    BelowMinimum { amount: Money, minimum: Money },
    #[error(transparent)]
    InvalidTenure(#[from] InvalidTenureError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

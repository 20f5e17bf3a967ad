use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

use super::messages::borrower_message;

/// Identifier wrapper for loan applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Result of the external user-profile lookup: the slice of the stored
/// profile the underwriting flow actually consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    pub user_id: UserId,
    pub monthly_income: Money,
}

/// Result of the credit-bureau lookup for a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditSnapshot {
    pub user_id: UserId,
    pub bureau_name: String,
    pub credit_score: u16,
    pub report_reference: String,
    pub total_active_loans: u32,
    pub total_existing_emi: Money,
    pub pulled_at: DateTime<Utc>,
}

/// Outcome of an eligibility evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityStatus {
    Eligible,
    Rejected,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::Eligible => "ELIGIBLE",
            EligibilityStatus::Rejected => "REJECTED",
        }
    }
}

/// Enumerates why an applicant was rejected, keyed by the stable codes the
/// platform persists and surfaces downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    LowCreditScore,
    CreditProfileNotFound,
    InvalidIncome,
    NoEmiCapacity,
    FoirExceeded,
}

impl FailureReason {
    pub const fn code(self) -> &'static str {
        match self {
            FailureReason::LowCreditScore => "LOW_CREDIT_SCORE",
            FailureReason::CreditProfileNotFound => "CREDIT_PROFILE_NOT_FOUND",
            FailureReason::InvalidIncome => "INVALID_INCOME",
            FailureReason::NoEmiCapacity => "NO_EMI_CAPACITY",
            FailureReason::FoirExceeded => "FOIR_EXCEEDED",
        }
    }
}

/// Fresh value produced by every eligibility evaluation. Ownership of
/// persistence belongs to the store; the engine only ever returns this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub status: EligibilityStatus,
    pub max_eligible_amount: Option<Money>,
    pub failure_reason: Option<FailureReason>,
    pub credit_score_used: Option<u16>,
    /// Recorded for audit even though the default decision path does not
    /// consult it; the income-based capacity check is gated off.
    pub income_used: Option<Money>,
    pub existing_emi: Option<Money>,
    /// Populated only by the FOIR capacity policy.
    pub proposed_emi: Option<Money>,
    pub foir_ratio: Option<Decimal>,
}

impl EligibilityDecision {
    /// Decision recorded when no credit data could be obtained at all. This
    /// case is carried as a rejection, not an error, by platform convention.
    pub fn credit_profile_unavailable() -> Self {
        Self {
            status: EligibilityStatus::Rejected,
            max_eligible_amount: None,
            failure_reason: Some(FailureReason::CreditProfileNotFound),
            credit_score_used: None,
            income_used: None,
            existing_emi: None,
            proposed_emi: None,
            foir_ratio: None,
        }
    }
}

/// Persisted eligibility state for a subject, including the history-of-one
/// fields tracking the immediately prior evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityRecord {
    pub user_id: UserId,
    pub status: EligibilityStatus,
    pub failure_reason: Option<FailureReason>,
    pub credit_score_used: Option<u16>,
    pub bureau_name: Option<String>,
    pub credit_report_reference: Option<String>,
    pub income_used: Option<Money>,
    pub existing_emi: Option<Money>,
    pub max_eligible_amount: Option<Money>,
    pub proposed_emi: Option<Money>,
    pub foir_ratio: Option<Decimal>,
    /// Only the single most recent prior value is retained, not a full log.
    pub previous_credit_score_used: Option<u16>,
    pub previously_checked_at: Option<DateTime<Utc>>,
    pub latest_checked_at: DateTime<Utc>,
}

impl EligibilityRecord {
    /// Build a fresh record from a decision and the snapshot it was based on
    /// (absent for the credit-profile-not-found case).
    pub fn fresh(
        user_id: UserId,
        decision: EligibilityDecision,
        snapshot: Option<&CreditSnapshot>,
    ) -> Self {
        Self {
            user_id,
            status: decision.status,
            failure_reason: decision.failure_reason,
            credit_score_used: decision.credit_score_used,
            bureau_name: snapshot.map(|s| s.bureau_name.clone()),
            credit_report_reference: snapshot.map(|s| s.report_reference.clone()),
            income_used: decision.income_used,
            existing_emi: decision.existing_emi,
            max_eligible_amount: decision.max_eligible_amount,
            proposed_emi: decision.proposed_emi,
            foir_ratio: decision.foir_ratio,
            previous_credit_score_used: None,
            previously_checked_at: None,
            latest_checked_at: Utc::now(),
        }
    }

    /// Fold the prior persisted record into this one. The prior score is
    /// promoted to `previous_credit_score_used` only when it differs from
    /// the new one; the prior check time always becomes
    /// `previously_checked_at`.
    pub fn absorb_prior(&mut self, prior: &EligibilityRecord) {
        self.previous_credit_score_used = match prior.credit_score_used {
            Some(prev) if self.credit_score_used != Some(prev) => Some(prev),
            _ => prior.previous_credit_score_used,
        };
        self.previously_checked_at = Some(prior.latest_checked_at);
    }

    pub fn borrower_message(&self) -> &'static str {
        borrower_message(self.status, self.failure_reason)
    }

    pub fn status_view(&self) -> EligibilityStatusView {
        EligibilityStatusView {
            user_id: self.user_id.clone(),
            status: self.status.label(),
            message: self.borrower_message(),
            max_eligible_amount: self.max_eligible_amount,
            checked_at: self.latest_checked_at,
        }
    }
}

/// Sanitized representation of a subject's eligibility state for outward
/// exposure.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityStatusView {
    pub user_id: UserId,
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_eligible_amount: Option<Money>,
    pub checked_at: DateTime<Utc>,
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub emi: Money,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

/// Full repayment plan for a principal over a tenure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanCalculationResult {
    pub principal: Money,
    pub tenure_months: u32,
    pub annual_rate_percent: Decimal,
    pub monthly_emi: Money,
    pub total_repayment: Money,
    pub total_interest: Money,
    pub schedule: Vec<AmortizationRow>,
}

/// Lifecycle state of a persisted calculation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationStatus {
    Checked,
}

impl CalculationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CalculationStatus::Checked => "CHECKED",
        }
    }
}

/// Persisted calculation state for a subject; one row per subject, replaced
/// on recalculation with the prior timestamp kept as history-of-one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanCalculationRecord {
    pub user_id: UserId,
    pub requested_amount: Money,
    pub tenure_months: u32,
    pub eligible_amount: Money,
    pub interest_rate_pa: Decimal,
    pub monthly_emi: Money,
    pub total_repayment: Money,
    pub total_interest: Money,
    pub status: CalculationStatus,
    pub previously_calculated_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl LoanCalculationRecord {
    pub fn fresh(user_id: UserId, result: &LoanCalculationResult) -> Self {
        Self {
            user_id,
            requested_amount: result.principal,
            tenure_months: result.tenure_months,
            eligible_amount: result.principal,
            interest_rate_pa: result.annual_rate_percent,
            monthly_emi: result.monthly_emi,
            total_repayment: result.total_repayment,
            total_interest: result.total_interest,
            status: CalculationStatus::Checked,
            previously_calculated_at: None,
            updated_at: Utc::now(),
        }
    }

    pub fn absorb_prior(&mut self, prior: &LoanCalculationRecord) {
        self.previously_calculated_at = Some(prior.updated_at);
    }
}

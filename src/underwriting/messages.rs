//! Borrower-facing wording for eligibility outcomes.

use super::domain::{EligibilityStatus, FailureReason};

/// Map a persisted status/reason pair onto the message shown to the
/// borrower. Unknown rejection states fall back to a generic line.
pub fn borrower_message(
    status: EligibilityStatus,
    reason: Option<FailureReason>,
) -> &'static str {
    if status == EligibilityStatus::Eligible {
        return "You are eligible for the requested loan.";
    }

    match reason {
        Some(FailureReason::LowCreditScore) => {
            "Your credit score is below the required threshold (650)."
        }
        Some(FailureReason::FoirExceeded) => {
            "Your existing EMIs exceed the allowed repayment capacity."
        }
        Some(FailureReason::InvalidIncome) => "Income details are invalid or missing.",
        Some(FailureReason::NoEmiCapacity) => {
            "You currently do not have EMI repayment capacity."
        }
        Some(FailureReason::CreditProfileNotFound) => {
            "Credit data not available. Please retry later."
        }
        None => "You are not eligible at this time.",
    }
}

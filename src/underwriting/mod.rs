//! Loan underwriting: tiered eligibility decisions, EMI math, and the
//! service facade that composes them with the bureau and store boundaries.

pub mod amortization;
pub mod bureau;
pub mod domain;
pub(crate) mod eligibility;
pub mod messages;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use amortization::{AmortizationCalculator, InvalidTenureError};
pub use bureau::{EmptyBureau, SimulatedBureau};
pub use domain::{
    AmortizationRow, BorrowerProfile, CalculationStatus, CreditSnapshot, EligibilityDecision,
    EligibilityRecord, EligibilityStatus, EligibilityStatusView, FailureReason,
    LoanCalculationRecord, LoanCalculationResult, UserId,
};
pub use eligibility::EligibilityEngine;
pub use repository::{CreditBureau, InMemoryLendingStore, LendingStore, RepositoryError};
pub use service::{UnderwritingError, UnderwritingService};

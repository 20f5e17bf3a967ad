//! Loan eligibility and EMI calculation engine.
//!
//! Two stateless computation components sit at the center of the crate: the
//! [`underwriting::EligibilityEngine`], which maps a bureau credit score onto
//! a tiered maximum loan amount, and the
//! [`underwriting::AmortizationCalculator`], which produces equal-monthly
//! -installment repayment plans with month-by-month amortization schedules.
//! The [`underwriting::UnderwritingService`] composes them with a credit
//! bureau lookup and a persistence boundary expressed as traits.

pub mod config;
pub mod error;
pub mod money;
pub mod telemetry;
pub mod underwriting;

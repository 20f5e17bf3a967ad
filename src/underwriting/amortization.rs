use rust_decimal::{Decimal, MathematicalOps};

use crate::config::LendingConfig;
use crate::money::{round_cents, Money};

use super::domain::{AmortizationRow, LoanCalculationResult};

/// Requested tenure is outside the platform allow-list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tenure must be one of {allowed:?} months, got {requested}")]
pub struct InvalidTenureError {
    pub requested: u32,
    pub allowed: Vec<u32>,
}

/// Stateless EMI and amortization-schedule calculator.
///
/// Every intermediate figure is rounded to cents as it is produced, so the
/// per-row numbers are deterministic and auditable; the cumulative rounding
/// drift is folded into the final month's principal, bringing the balance to
/// exactly zero.
#[derive(Debug, Clone)]
pub struct AmortizationCalculator {
    config: LendingConfig,
}

impl AmortizationCalculator {
    pub fn new(config: LendingConfig) -> Self {
        Self { config }
    }

    /// Monthly rate as a fraction: `(annual % / 12) / 100`.
    pub fn monthly_rate(&self) -> Decimal {
        self.config.annual_interest_rate_percent / Decimal::from(12) / Decimal::from(100)
    }

    pub fn validate_tenure(&self, tenure_months: u32) -> Result<(), InvalidTenureError> {
        if self.config.allowed_tenures.contains(&tenure_months) {
            Ok(())
        } else {
            Err(InvalidTenureError {
                requested: tenure_months,
                allowed: self.config.allowed_tenures.clone(),
            })
        }
    }

    /// Fixed monthly installment for a principal over a tenure, rounded to
    /// cents. A zero rate degenerates to a straight split of the principal.
    pub fn emi(&self, principal: Money, tenure_months: u32) -> Money {
        let r = self.monthly_rate();
        if r == Decimal::ZERO {
            return round_cents(principal / Decimal::from(tenure_months));
        }
        let factor = (Decimal::ONE + r).powi(i64::from(tenure_months));
        round_cents(principal * r * factor / (factor - Decimal::ONE))
    }

    /// Inverse of [`Self::emi`]: the principal a fixed installment amortizes
    /// over the tenure. Used by the FOIR capacity policy.
    pub fn principal_from_emi(&self, emi: Money, tenure_months: u32) -> Money {
        let r = self.monthly_rate();
        if r == Decimal::ZERO {
            return round_cents(emi * Decimal::from(tenure_months));
        }
        let factor = (Decimal::ONE + r).powi(i64::from(tenure_months));
        round_cents(emi * (factor - Decimal::ONE) / (r * factor))
    }

    /// Month-by-month breakdown of principal, interest, and balance.
    ///
    /// The balance is reduced by the rounded principal part each month and
    /// any residual is folded into the last row, so the reported balance
    /// reaches exactly zero and the principal column sums to the loan
    /// amount. The emitted balance is clamped at zero in case the fold ever
    /// overshoots.
    pub fn schedule(&self, principal: Money, tenure_months: u32) -> Vec<AmortizationRow> {
        let r = self.monthly_rate();
        let emi = self.emi(principal, tenure_months);
        let mut balance = principal;
        let mut schedule = Vec::with_capacity(tenure_months as usize);

        for month in 1..=tenure_months {
            let interest = round_cents(balance * r);
            let mut principal_part = round_cents(emi - interest);
            balance = round_cents(balance - principal_part);

            if month == tenure_months {
                principal_part = round_cents(principal_part + balance);
                balance = Decimal::ZERO;
            }

            schedule.push(AmortizationRow {
                month,
                emi,
                principal: principal_part,
                interest,
                balance: balance.max(Decimal::ZERO),
            });
        }

        schedule
    }

    /// Full repayment plan: validates the tenure, then assembles the EMI,
    /// totals, and schedule.
    pub fn plan(
        &self,
        principal: Money,
        tenure_months: u32,
    ) -> Result<LoanCalculationResult, InvalidTenureError> {
        self.validate_tenure(tenure_months)?;

        let monthly_emi = self.emi(principal, tenure_months);
        let total_repayment = round_cents(monthly_emi * Decimal::from(tenure_months));
        let total_interest = round_cents(total_repayment - principal);

        Ok(LoanCalculationResult {
            principal,
            tenure_months,
            annual_rate_percent: self.config.annual_interest_rate_percent,
            monthly_emi,
            total_repayment,
            total_interest,
            schedule: self.schedule(principal, tenure_months),
        })
    }
}

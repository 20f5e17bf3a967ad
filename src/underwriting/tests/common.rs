use std::sync::{Arc, Mutex};

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::LendingConfig;
use crate::underwriting::amortization::AmortizationCalculator;
use crate::underwriting::domain::{BorrowerProfile, CreditSnapshot, UserId};
use crate::underwriting::eligibility::EligibilityEngine;
use crate::underwriting::repository::{CreditBureau, InMemoryLendingStore, RepositoryError};
use crate::underwriting::service::UnderwritingService;

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(LendingConfig::default())
}

pub(super) fn calculator() -> AmortizationCalculator {
    AmortizationCalculator::new(LendingConfig::default())
}

pub(super) fn calculator_with_rate(annual_rate_percent: Decimal) -> AmortizationCalculator {
    AmortizationCalculator::new(LendingConfig {
        annual_interest_rate_percent: annual_rate_percent,
        ..LendingConfig::default()
    })
}

pub(super) fn borrower(id: &str, monthly_income: Decimal) -> BorrowerProfile {
    BorrowerProfile {
        user_id: UserId(id.to_string()),
        monthly_income,
    }
}

pub(super) fn build_service(
    bureau: Arc<ScriptedBureau>,
) -> (
    UnderwritingService<ScriptedBureau, InMemoryLendingStore>,
    Arc<InMemoryLendingStore>,
) {
    let store = Arc::new(InMemoryLendingStore::default());
    let service = UnderwritingService::new(bureau, store.clone(), LendingConfig::default());
    (service, store)
}

/// Bureau fixture whose score can be swapped mid-test to exercise the
/// history-of-one fold; `None` simulates a subject with no credit data.
#[derive(Default)]
pub(super) struct ScriptedBureau {
    score: Mutex<Option<u16>>,
}

impl ScriptedBureau {
    pub(super) fn with_score(score: u16) -> Self {
        Self {
            score: Mutex::new(Some(score)),
        }
    }

    pub(super) fn set_score(&self, score: Option<u16>) {
        *self.score.lock().expect("bureau mutex poisoned") = score;
    }
}

impl CreditBureau for ScriptedBureau {
    fn latest_snapshot(&self, user_id: &UserId) -> Result<Option<CreditSnapshot>, RepositoryError> {
        let score = *self.score.lock().expect("bureau mutex poisoned");
        Ok(score.map(|credit_score| CreditSnapshot {
            user_id: user_id.clone(),
            bureau_name: "Scripted Bureau".to_string(),
            credit_score,
            report_reference: format!("SCRIPT-{credit_score}"),
            total_active_loans: 1,
            total_existing_emi: dec!(2000),
            pulled_at: Utc::now(),
        }))
    }
}

use std::collections::HashMap;
use std::sync::Mutex;

use super::domain::{CreditSnapshot, EligibilityRecord, LoanCalculationRecord, UserId};

/// Credit-bureau lookup boundary. A `None` snapshot means no credit data
/// exists for the subject, which the service records as a rejection rather
/// than an error.
pub trait CreditBureau: Send + Sync {
    fn latest_snapshot(&self, user_id: &UserId) -> Result<Option<CreditSnapshot>, RepositoryError>;
}

/// Persistence boundary for eligibility and calculation records, one row per
/// subject.
///
/// Upserts replace the subject's row and must apply the history-of-one fold
/// ([`EligibilityRecord::absorb_prior`] / [`LoanCalculationRecord::absorb_prior`])
/// against the stored prior as a single serialized read-modify-write, so two
/// racing requests for the same subject cannot lose the history fields.
pub trait LendingStore: Send + Sync {
    fn fetch_eligibility(
        &self,
        user_id: &UserId,
    ) -> Result<Option<EligibilityRecord>, RepositoryError>;
    fn upsert_eligibility(
        &self,
        record: EligibilityRecord,
    ) -> Result<EligibilityRecord, RepositoryError>;
    fn fetch_calculation(
        &self,
        user_id: &UserId,
    ) -> Result<Option<LoanCalculationRecord>, RepositoryError>;
    fn upsert_calculation(
        &self,
        record: LoanCalculationRecord,
    ) -> Result<LoanCalculationRecord, RepositoryError>;
}

/// Error enumeration for bureau and store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Mutex-guarded in-memory store backing the CLI demo and the test suites.
/// Holding one lock across the fetch-fold-insert keeps the history fold
/// atomic per subject.
#[derive(Default)]
pub struct InMemoryLendingStore {
    inner: Mutex<StoreMaps>,
}

#[derive(Default)]
struct StoreMaps {
    eligibility: HashMap<UserId, EligibilityRecord>,
    calculations: HashMap<UserId, LoanCalculationRecord>,
}

impl LendingStore for InMemoryLendingStore {
    fn fetch_eligibility(
        &self,
        user_id: &UserId,
    ) -> Result<Option<EligibilityRecord>, RepositoryError> {
        let guard = self.inner.lock().expect("store mutex poisoned");
        Ok(guard.eligibility.get(user_id).cloned())
    }

    fn upsert_eligibility(
        &self,
        mut record: EligibilityRecord,
    ) -> Result<EligibilityRecord, RepositoryError> {
        let mut guard = self.inner.lock().expect("store mutex poisoned");
        if let Some(prior) = guard.eligibility.get(&record.user_id) {
            record.absorb_prior(prior);
        }
        guard
            .eligibility
            .insert(record.user_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch_calculation(
        &self,
        user_id: &UserId,
    ) -> Result<Option<LoanCalculationRecord>, RepositoryError> {
        let guard = self.inner.lock().expect("store mutex poisoned");
        Ok(guard.calculations.get(user_id).cloned())
    }

    fn upsert_calculation(
        &self,
        mut record: LoanCalculationRecord,
    ) -> Result<LoanCalculationRecord, RepositoryError> {
        let mut guard = self.inner.lock().expect("store mutex poisoned");
        if let Some(prior) = guard.calculations.get(&record.user_id) {
            record.absorb_prior(prior);
        }
        guard
            .calculations
            .insert(record.user_id.clone(), record.clone());
        Ok(record)
    }
}

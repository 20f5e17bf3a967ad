//! Deterministic stand-in for the credit bureau integration.
//!
//! Real bureau connectivity is out of scope; this adapter fabricates a
//! plausible credit snapshot so the demo flow and tests can run end to end.

use chrono::Utc;
use rust_decimal::Decimal;

use super::domain::{CreditSnapshot, UserId};
use super::repository::{CreditBureau, RepositoryError};

/// Simulated score set with matching open-obligation figures: the lower the
/// score, the heavier the existing EMI load.
const PROFILES: [(u16, u32, u32); 5] = [
    // (score, active loans, total existing EMI)
    (620, 2, 6000),
    (670, 1, 2000),
    (710, 1, 3500),
    (760, 1, 5000),
    (810, 0, 0),
];

/// Bureau stand-in deriving a stable snapshot from the user id, or pinned to
/// a fixed score via [`SimulatedBureau::with_fixed_score`].
#[derive(Debug, Default, Clone)]
pub struct SimulatedBureau {
    fixed_score: Option<u16>,
}

impl SimulatedBureau {
    /// Pin every snapshot to the given score; ids outside the simulated set
    /// fall back to the nearest profile at or below the score.
    pub fn with_fixed_score(score: u16) -> Self {
        Self {
            fixed_score: Some(score),
        }
    }

    fn profile_for(&self, user_id: &UserId) -> (u16, u32, u32) {
        if let Some(score) = self.fixed_score {
            return PROFILES
                .iter()
                .rev()
                .find(|(s, _, _)| *s <= score)
                .map(|(_, loans, emi)| (score, *loans, *emi))
                .unwrap_or((score, 0, 0));
        }
        let seed: usize = user_id.0.bytes().map(usize::from).sum();
        PROFILES[seed % PROFILES.len()]
    }
}

impl CreditBureau for SimulatedBureau {
    fn latest_snapshot(&self, user_id: &UserId) -> Result<Option<CreditSnapshot>, RepositoryError> {
        let (credit_score, total_active_loans, total_existing_emi) = self.profile_for(user_id);

        let reference_stub: String = user_id.0.chars().take(8).collect();

        Ok(Some(CreditSnapshot {
            user_id: user_id.clone(),
            bureau_name: "TransUnion (Simulated)".to_string(),
            credit_score,
            report_reference: format!("SIM-{}", reference_stub.to_uppercase()),
            total_active_loans,
            total_existing_emi: Decimal::from(total_existing_emi),
            pulled_at: Utc::now(),
        }))
    }
}

/// Bureau that never has data, for exercising the credit-profile-not-found
/// path.
#[derive(Debug, Default, Clone)]
pub struct EmptyBureau;

impl CreditBureau for EmptyBureau {
    fn latest_snapshot(&self, _user_id: &UserId) -> Result<Option<CreditSnapshot>, RepositoryError> {
        Ok(None)
    }
}

use crate::config::CreditScoreTier;
use crate::money::Money;

/// Walk the descending threshold ladder and return the maximum loan amount
/// for the first rung at or below the applicant score. `None` means the
/// score fell through the ladder entirely.
///
/// Callers must hand in a ladder sorted descending by `min_score`; the
/// engine normalizes its copy at construction.
pub(crate) fn tier_amount(tiers: &[CreditScoreTier], credit_score: u16) -> Option<Money> {
    tiers
        .iter()
        .find(|tier| credit_score >= tier.min_score)
        .map(|tier| tier.max_loan_amount)
}

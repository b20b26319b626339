//! Per-account debit/credit aggregation.
//!
//! A pure summation primitive reused by every generator: no classification,
//! no sign normalization. Sign rules live with `NormalBalance`; section
//! assignment lives in `classify`.

use std::collections::HashMap;

use arbor_shared::Cents;
use arbor_shared::types::AccountId;

use super::types::Posting;

/// Raw debit/credit sums for one account over a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountTotals {
    /// Sum of debit amounts.
    pub debits_cents: Cents,
    /// Sum of credit amounts.
    pub credits_cents: Cents,
}

impl AccountTotals {
    /// Raw net: debits minus credits, no normal-balance adjustment.
    #[must_use]
    pub fn net(&self) -> Cents {
        self.debits_cents - self.credits_cents
    }

    /// Folds one posting into the totals.
    pub fn add_posting(&mut self, posting: &Posting) {
        self.debits_cents += posting.debit_cents;
        self.credits_cents += posting.credit_cents;
    }
}

/// Sums debit/credit cents per account over the given postings.
#[must_use]
pub fn aggregate_postings(postings: &[Posting]) -> HashMap<AccountId, AccountTotals> {
    let mut totals: HashMap<AccountId, AccountTotals> = HashMap::new();
    for posting in postings {
        totals
            .entry(posting.account_id)
            .or_default()
            .add_posting(posting);
    }
    totals
}

/// Read-time double-entry verification: total debits equal total credits.
///
/// Expected to hold by construction for any full period; a false result
/// signals a ledger-integrity defect upstream.
#[must_use]
pub fn ledger_is_balanced(postings: &[Posting]) -> bool {
    let debits: Cents = postings.iter().map(|p| p.debit_cents).sum();
    let credits: Cents = postings.iter().map(|p| p.credit_cents).sum();
    debits == credits
}

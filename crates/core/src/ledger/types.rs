//! Ledger domain types for financial reporting.
//!
//! These types describe the chart of accounts and posting records as the
//! reporting engine sees them: read-only, already balanced at write time by
//! the (out of scope) posting path.

use arbor_shared::Cents;
use arbor_shared::types::{AccountId, PostingId, PropertyId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account type in the five-category chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account.
    Asset,
    /// Liability account.
    Liability,
    /// Equity account.
    Equity,
    /// Revenue account.
    Revenue,
    /// Expense account.
    Expense,
}

impl AccountType {
    /// The conventional normal balance for this account type.
    #[must_use]
    pub fn default_normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::Credit,
        }
    }

    /// Returns true for account types reported on the balance sheet.
    #[must_use]
    pub fn is_balance_sheet(self) -> bool {
        matches!(self, Self::Asset | Self::Liability | Self::Equity)
    }

    /// Returns true for account types reported on the income statement.
    #[must_use]
    pub fn is_income_statement(self) -> bool {
        matches!(self, Self::Revenue | Self::Expense)
    }
}

/// Whether an account's natural, increasing-value side is debit or credit.
///
/// In double-entry bookkeeping:
/// - Debit-normal: assets and expenses grow with debits
/// - Credit-normal: liabilities, equity, and revenue grow with credits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-normal account.
    Debit,
    /// Credit-normal account.
    Credit,
}

impl NormalBalance {
    /// Net activity in the account's natural sign.
    ///
    /// A debit-normal account reports `debits - credits`; a credit-normal
    /// account reports `credits - debits` (so revenue is positive when
    /// credited).
    #[must_use]
    pub fn signed_net(self, debits: Cents, credits: Cents) -> Cents {
        match self {
            Self::Debit => debits - credits,
            Self::Credit => credits - debits,
        }
    }

    /// Splits raw debit/credit totals into a `(debit_balance, credit_balance)`
    /// pair for trial balance presentation.
    ///
    /// Exactly one side is nonzero (or both are zero): a debit-normal account
    /// with net debits reports a debit balance, otherwise a credit balance of
    /// the negation; symmetric for credit-normal accounts.
    #[must_use]
    pub fn balance_sides(self, debits: Cents, credits: Cents) -> (Cents, Cents) {
        let net = self.signed_net(debits, credits);
        if net.is_negative() {
            match self {
                Self::Debit => (Cents::ZERO, -net),
                Self::Credit => (-net, Cents::ZERO),
            }
        } else {
            match self {
                Self::Debit => (net, Cents::ZERO),
                Self::Credit => (Cents::ZERO, net),
            }
        }
    }
}

/// A chart-of-accounts entry.
///
/// Created and edited by chart-of-accounts management (out of scope);
/// immutable from the reporting engine's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Account number, lexicographically sortable (e.g. "1000").
    pub account_number: String,
    /// Display name.
    pub account_name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Normal balance side.
    pub normal_balance: NormalBalance,
    /// Whether the account is active.
    pub is_active: bool,
    /// Header accounts exist for aggregation only and are excluded from
    /// leaf sums.
    pub is_header_account: bool,
}

impl Account {
    /// Parses the leading decimal digits of the account number.
    ///
    /// Returns `None` when the number does not start with a digit; such
    /// accounts are classification gaps.
    #[must_use]
    pub fn number_value(&self) -> Option<u32> {
        let digits: &str = self
            .account_number
            .split_once(|c: char| !c.is_ascii_digit())
            .map_or(self.account_number.as_str(), |(head, _)| head);
        if digits.is_empty() {
            None
        } else {
            digits.parse().ok()
        }
    }
}

/// Classification tag carried on a posting by its source workflow.
///
/// The cash-flow statement uses this tag to bucket cash activity. Unknown
/// tags round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    /// Tenant rent collected.
    RentPayment,
    /// Operating expense paid.
    Expense,
    /// Owner contribution or draw.
    SpecialTransaction,
    /// Any other tag, preserved verbatim.
    Other(String),
}

impl SourceType {
    /// The wire representation of the tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RentPayment => "rent_payment",
            Self::Expense => "expense",
            Self::SpecialTransaction => "special_transaction",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for SourceType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "rent_payment" => Self::RentPayment,
            "expense" => Self::Expense,
            "special_transaction" => Self::SpecialTransaction,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for SourceType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<SourceType> for String {
    fn from(source: SourceType) -> Self {
        match source {
            SourceType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One side of a balanced journal entry, as stored in the append-only ledger.
///
/// Within any journal, `sum(debit_cents) == sum(credit_cents)` at write
/// time; the engine assumes but also re-verifies this at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Unique identifier.
    pub id: PostingId,
    /// The account posted to.
    pub account_id: AccountId,
    /// Debit amount (non-negative).
    pub debit_cents: Cents,
    /// Credit amount (non-negative).
    pub credit_cents: Cents,
    /// Calendar date of the posting.
    pub posting_date: NaiveDate,
    /// Property this posting is attributed to, if any.
    pub property_id: Option<PropertyId>,
    /// Source workflow tag, if any.
    pub source_type: Option<SourceType>,
}

/// A ledger account flagged as a bank/cash account.
///
/// `current_balance_cents` is an advisory snapshot from the collaborator;
/// the cash-flow generator recomputes opening/closing cash from postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// The ledger account backing this bank account.
    pub account_id: AccountId,
    /// Balance snapshot as reported by the collaborator.
    pub current_balance_cents: Cents,
}

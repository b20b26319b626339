//! Double-entry ledger domain.
//!
//! This module implements the read side of the bookkeeping system:
//! - Account and posting domain types
//! - Reader interfaces for the posting store and chart of accounts
//! - Per-account debit/credit aggregation
//! - Read-time double-entry verification

pub mod aggregate;
pub mod reader;
pub mod types;

pub use aggregate::{AccountTotals, aggregate_postings, ledger_is_balanced};
pub use reader::{
    AccountFilter, ChartReader, DataAccessError, LedgerReader, PostingQuery, PostingWindow,
};
pub use types::{Account, AccountType, BankAccount, NormalBalance, Posting, SourceType};

//! Reader interfaces for the posting store and chart of accounts.
//!
//! The reporting engine never owns storage. Callers implement these traits
//! over their data store (database, remote service, in-memory fixture) and
//! inject them into `ReportingService`.
//!
//! All reads are idempotent, so a failed read is always safe for the caller
//! to retry; the engine itself never retries. If the underlying ledger is
//! being appended to while a report runs, the report reflects whatever
//! point-in-time snapshot the reader returns — no snapshot isolation is
//! guaranteed at this layer.

use arbor_shared::DateRange;
use arbor_shared::types::{BusinessId, PropertyId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Account, BankAccount, Posting};

/// A reader collaborator call failed.
///
/// Propagated to the report caller unmodified; the engine never returns a
/// partial report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("data access failed: {0}")]
pub struct DataAccessError(pub String);

impl DataAccessError {
    /// Creates a new error from any displayable cause.
    #[must_use]
    pub fn new(cause: impl Into<String>) -> Self {
        Self(cause.into())
    }
}

/// How postings are selected in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostingWindow {
    /// All postings dated on or before the given date (cumulative since
    /// inception) - used for as-of statements.
    AsOf(NaiveDate),
    /// Postings within the inclusive range - used for activity statements.
    Range(DateRange),
}

impl PostingWindow {
    /// Returns true if a posting on the given date falls in this window.
    #[must_use]
    pub fn matches(self, date: NaiveDate) -> bool {
        match self {
            Self::AsOf(upper) => date <= upper,
            Self::Range(range) => range.contains(date),
        }
    }
}

/// Posting selection criteria for `LedgerReader::list_postings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingQuery {
    /// Time window.
    pub window: PostingWindow,
    /// Restrict to postings attributed to this property.
    pub property_id: Option<PropertyId>,
}

impl PostingQuery {
    /// Cumulative query up to and including `as_of`.
    #[must_use]
    pub const fn as_of(as_of: NaiveDate) -> Self {
        Self {
            window: PostingWindow::AsOf(as_of),
            property_id: None,
        }
    }

    /// Activity query over the inclusive range.
    #[must_use]
    pub const fn range(range: DateRange) -> Self {
        Self {
            window: PostingWindow::Range(range),
            property_id: None,
        }
    }

    /// Adds an optional property filter.
    #[must_use]
    pub const fn with_property(mut self, property_id: Option<PropertyId>) -> Self {
        self.property_id = property_id;
        self
    }

    /// Returns true if the posting satisfies this query.
    ///
    /// Reference predicate for reader implementations; a database-backed
    /// reader pushes the equivalent filter into its query.
    #[must_use]
    pub fn matches(&self, posting: &Posting) -> bool {
        self.window.matches(posting.posting_date)
            && self
                .property_id
                .is_none_or(|wanted| posting.property_id == Some(wanted))
    }
}

/// Account selection criteria for `ChartReader::list_accounts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFilter {
    /// Match on the active flag.
    pub is_active: bool,
    /// Match on the header flag.
    pub is_header_account: bool,
}

impl AccountFilter {
    /// Active leaf accounts - the population every generator sums over.
    #[must_use]
    pub const fn active_leaves() -> Self {
        Self {
            is_active: true,
            is_header_account: false,
        }
    }

    /// Returns true if the account satisfies this filter.
    #[must_use]
    pub fn matches(&self, account: &Account) -> bool {
        account.is_active == self.is_active && account.is_header_account == self.is_header_account
    }
}

/// Read-only access to posting records for a business.
#[allow(async_fn_in_trait)]
pub trait LedgerReader {
    /// Lists postings matching the query.
    async fn list_postings(
        &self,
        business_id: BusinessId,
        query: &PostingQuery,
    ) -> Result<Vec<Posting>, DataAccessError>;
}

/// Read-only access to account definitions for a business.
#[allow(async_fn_in_trait)]
pub trait ChartReader {
    /// Lists accounts matching the filter.
    async fn list_accounts(
        &self,
        business_id: BusinessId,
        filter: AccountFilter,
    ) -> Result<Vec<Account>, DataAccessError>;

    /// Lists the accounts flagged as bank/cash accounts.
    async fn list_bank_accounts(
        &self,
        business_id: BusinessId,
    ) -> Result<Vec<BankAccount>, DataAccessError>;
}

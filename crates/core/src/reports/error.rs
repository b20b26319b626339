//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::ledger::reader::DataAccessError;

/// Errors that can occur during report generation.
///
/// Classification gaps and detected imbalances are deliberately *not*
/// errors: gaps land in an "Unclassified" bucket with a warning, and
/// `is_balanced` is a reportable field the caller must surface.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A Ledger or Chart Reader call failed; propagated unmodified.
    #[error(transparent)]
    DataAccess(#[from] DataAccessError),

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

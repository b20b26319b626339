//! Report data types.
//!
//! All reports are ephemeral, derived, immutable value objects: given
//! identical inputs they recompute bit-identically. `generated_at` is
//! stamped for caller display only and is not part of a report's identity.

use arbor_shared::{Cents, Currency, DateRange};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use arbor_shared::types::{AccountId, BusinessId, PropertyId};

use crate::classify::Subsection;
use crate::ledger::types::SourceType;

/// Account-number convention for the synthetic "Current Year Earnings"
/// equity line. Exists only in reports, never as a posted account.
pub const CURRENT_YEAR_EARNINGS_NUMBER: &str = "3400";

/// Display name of the synthetic earnings line.
pub const CURRENT_YEAR_EARNINGS_NAME: &str = "Current Year Earnings";

/// One account line in a statement section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Source account, or `None` for synthetic report-only lines.
    pub account_id: Option<AccountId>,
    /// Account number.
    pub account_number: String,
    /// Account name.
    pub account_name: String,
    /// Line amount in the section's natural sign.
    pub amount_cents: Cents,
}

/// A titled group of lines within a statement section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSubsection {
    /// Classification key.
    pub key: Subsection,
    /// Display heading.
    pub name: String,
    /// Account lines, ordered by account number.
    pub lines: Vec<ReportLine>,
    /// Subsection total.
    pub total_cents: Cents,
}

/// One row of a trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account ID.
    pub account_id: AccountId,
    /// Account number.
    pub account_number: String,
    /// Account name.
    pub account_name: String,
    /// Debit-side balance (zero when the balance sits on the credit side).
    pub debit_balance_cents: Cents,
    /// Credit-side balance (zero when the balance sits on the debit side).
    pub credit_balance_cents: Cents,
}

/// Trial balance: every account's debit/credit balance as of a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalance {
    /// Business reported on.
    pub business_id: BusinessId,
    /// As-of date (cumulative).
    pub as_of: NaiveDate,
    /// Property scope, if any.
    pub property_id: Option<PropertyId>,
    /// Reporting currency.
    pub currency: Currency,
    /// Rows ordered by account number.
    pub rows: Vec<TrialBalanceRow>,
    /// Sum of the debit column.
    pub total_debits_cents: Cents,
    /// Sum of the credit column.
    pub total_credits_cents: Cents,
    /// Whether total debits equal total credits. A false value signals a
    /// ledger-integrity defect and must be surfaced to the user.
    pub is_balanced: bool,
    /// Computation timestamp, display only.
    pub generated_at: DateTime<Utc>,
}

/// One side of the balance sheet (assets, liabilities, or equity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetSection {
    /// Subsections in presentation order; empty subsections are omitted.
    pub subsections: Vec<StatementSubsection>,
    /// Section total.
    pub total_cents: Cents,
}

/// Balance sheet: Assets = Liabilities + Equity as of a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Business reported on.
    pub business_id: BusinessId,
    /// As-of date (cumulative since inception).
    pub as_of: NaiveDate,
    /// Property scope, if any.
    pub property_id: Option<PropertyId>,
    /// Reporting currency.
    pub currency: Currency,
    /// Assets section.
    pub assets: BalanceSheetSection,
    /// Liabilities section.
    pub liabilities: BalanceSheetSection,
    /// Equity section, including the synthetic current-year-earnings line.
    pub equity: BalanceSheetSection,
    /// Total assets.
    pub total_assets_cents: Cents,
    /// Total liabilities.
    pub total_liabilities_cents: Cents,
    /// Total equity (includes current-year earnings).
    pub total_equity_cents: Cents,
    /// Liabilities plus equity.
    pub total_liabilities_and_equity_cents: Cents,
    /// Exact zero-tolerance check of the accounting equation.
    pub is_balanced: bool,
    /// Raw difference `assets - (liabilities + equity)`; nonzero means a
    /// data-integrity defect the caller must surface.
    pub imbalance_cents: Cents,
    /// Prior-year comparison, when requested. The nested report never
    /// carries a comparison of its own.
    pub prior_year: Option<Box<BalanceSheet>>,
    /// Computation timestamp, display only.
    pub generated_at: DateTime<Utc>,
}

/// A classified income statement section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementSection {
    /// Subsections in presentation order; empty subsections are omitted.
    pub subsections: Vec<StatementSubsection>,
    /// Section total.
    pub total_cents: Cents,
}

impl IncomeStatementSection {
    /// All line items across subsections, in presentation order.
    pub fn lines(&self) -> impl Iterator<Item = &ReportLine> {
        self.subsections.iter().flat_map(|s| s.lines.iter())
    }
}

/// Combined view over operating and other expense line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedExpenses {
    /// Operating expense lines followed by other expense lines.
    pub lines: Vec<ReportLine>,
    /// Operating plus other expense totals.
    pub total_expenses_cents: Cents,
}

/// Income statement (P&L): revenue and expenses over a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Business reported on.
    pub business_id: BusinessId,
    /// Activity window.
    pub period: DateRange,
    /// Property scope, if any.
    pub property_id: Option<PropertyId>,
    /// Reporting currency.
    pub currency: Currency,
    /// Revenue section.
    pub revenue: IncomeStatementSection,
    /// Operating expense section.
    pub operating_expenses: IncomeStatementSection,
    /// Non-operating expense section (accounts beyond the operating bands).
    pub other_expenses: IncomeStatementSection,
    /// Gross profit (equals revenue total; no cost-of-goods tier in this
    /// domain).
    pub gross_profit_cents: Cents,
    /// Operating income: gross profit minus operating expenses.
    pub operating_income_cents: Cents,
    /// Net income: operating income minus other expenses.
    pub net_income_cents: Cents,
    /// Prior-period comparison (immediately preceding window of equal
    /// length), when requested. Never nested further.
    pub prior_period: Option<Box<IncomeStatement>>,
    /// Prior-year comparison (same month/day range one year back), when
    /// requested. Never nested further.
    pub prior_year: Option<Box<IncomeStatement>>,
    /// Computation timestamp, display only.
    pub generated_at: DateTime<Utc>,
}

impl IncomeStatement {
    /// Concatenated operating and other expense line items with their
    /// combined total.
    #[must_use]
    pub fn expenses(&self) -> CombinedExpenses {
        CombinedExpenses {
            lines: self
                .operating_expenses
                .lines()
                .chain(self.other_expenses.lines())
                .cloned()
                .collect(),
            total_expenses_cents: self.operating_expenses.total_cents
                + self.other_expenses.total_cents,
        }
    }
}

/// One grouped line of cash activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowLine {
    /// Display label ("Rent Payments", "Owner Draws", or the raw tag).
    pub label: String,
    /// Source tag the group was built from, if the postings carried one.
    pub source_type: Option<SourceType>,
    /// Line amount as a magnitude; the owning section's total carries the
    /// sign.
    pub amount_cents: Cents,
}

/// A cash-flow section (receipts, payments, investing, or financing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSection {
    /// Grouped lines, ordered by tag.
    pub lines: Vec<CashFlowLine>,
    /// Signed net cash effect of the section. May differ from the sum of
    /// line magnitudes (owner draws reduce it).
    pub total_cents: Cents,
}

/// Operating activity: receipts and payments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingCashFlow {
    /// Cash received.
    pub receipts: CashFlowSection,
    /// Cash paid out.
    pub payments: CashFlowSection,
    /// Receipts total minus payments total.
    pub net_cents: Cents,
}

/// Cash flow statement: reconciles the change in cash over a period
/// (simplified direct method).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowStatement {
    /// Business reported on.
    pub business_id: BusinessId,
    /// Activity window.
    pub period: DateRange,
    /// Property scope, if any.
    pub property_id: Option<PropertyId>,
    /// Reporting currency.
    pub currency: Currency,
    /// Cash balance entering the period (strictly before `period.start`).
    pub opening_cash_cents: Cents,
    /// Cash balance as of `period.end`.
    pub closing_cash_cents: Cents,
    /// Operating activity.
    pub operating: OperatingCashFlow,
    /// Investing activity. Always empty pending future source types.
    pub investing: CashFlowSection,
    /// Financing activity (owner contributions and draws).
    pub financing: CashFlowSection,
    /// Operating net plus investing and financing totals. Equals
    /// `closing - opening` for a closed, fully-tagged ledger.
    pub net_change_cents: Cents,
    /// Computation timestamp, display only.
    pub generated_at: DateTime<Utc>,
}

/// Summary metrics for one property in a side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPerformance {
    /// Property compared.
    pub property_id: PropertyId,
    /// Revenue over the window.
    pub revenue_cents: Cents,
    /// Combined expenses over the window.
    pub expenses_cents: Cents,
    /// Net income over the window.
    pub net_income_cents: Cents,
    /// Net operating income (operating income before non-operating items).
    pub noi_cents: Cents,
}

//! Financial statement generation.
//!
//! Trial balance, balance sheet, income statement, cash flow, and property
//! comparison over an injected posting store and chart of accounts.

mod error;
mod service;
mod types;


pub use error::ReportError;
pub use service::{
    BalanceSheetOptions, CashFlowOptions, IncomeStatementOptions, ReportingService,
    TrialBalanceOptions,
};
pub use types::{
    BalanceSheet, BalanceSheetSection, CURRENT_YEAR_EARNINGS_NAME, CURRENT_YEAR_EARNINGS_NUMBER,
    CashFlowLine, CashFlowSection, CashFlowStatement, CombinedExpenses, IncomeStatement,
    IncomeStatementSection, OperatingCashFlow, PropertyPerformance, ReportLine,
    StatementSubsection, TrialBalance, TrialBalanceRow,
};

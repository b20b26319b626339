//! Number-range account classification.
//!
//! Maps each account into a statement subsection using its type and a named,
//! inspectable range table. The table is data, not code: it can be loaded
//! from configuration, validated against the live chart of accounts at
//! startup, and unit-tested independently of any generator.

use serde::{Deserialize, Serialize};

use crate::ledger::types::{Account, AccountType};

/// Statement subsection an account line is presented under.
///
/// Closed set; accounts the table cannot place are reported under
/// `Unclassified` rather than silently folded into a catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsection {
    /// Current assets (cash, receivables, deposits).
    CurrentAssets,
    /// Fixed assets (buildings, improvements, equipment).
    FixedAssets,
    /// Other assets.
    OtherAssets,
    /// Current liabilities.
    CurrentLiabilities,
    /// Long-term liabilities.
    LongTermLiabilities,
    /// Owner equity.
    Equity,
    /// Rental income (the reserved revenue band).
    RentalIncome,
    /// Other income.
    OtherIncome,
    /// Repairs and maintenance (operating expense).
    RepairsMaintenance,
    /// Utilities (operating expense).
    Utilities,
    /// Insurance and taxes (operating expense).
    InsuranceTaxes,
    /// Administrative (operating expense).
    Administrative,
    /// Other operating expenses.
    OtherOperating,
    /// Non-operating expenses, presented as a separate top-level section.
    OtherExpenses,
    /// Classification gap: no configured range covers the account.
    Unclassified,
}

impl Subsection {
    /// Human-readable subsection heading.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::CurrentAssets => "Current Assets",
            Self::FixedAssets => "Fixed Assets",
            Self::OtherAssets => "Other Assets",
            Self::CurrentLiabilities => "Current Liabilities",
            Self::LongTermLiabilities => "Long-term Liabilities",
            Self::Equity => "Equity",
            Self::RentalIncome => "Rental Income",
            Self::OtherIncome => "Other Income",
            Self::RepairsMaintenance => "Repairs & Maintenance",
            Self::Utilities => "Utilities",
            Self::InsuranceTaxes => "Insurance & Taxes",
            Self::Administrative => "Administrative",
            Self::OtherOperating => "Other Operating",
            Self::OtherExpenses => "Other Expenses",
            Self::Unclassified => "Unclassified",
        }
    }

    /// Returns true for operating expense subsections (everything an
    /// income statement deducts before other expenses).
    #[must_use]
    pub fn is_operating_expense(self) -> bool {
        matches!(
            self,
            Self::RepairsMaintenance
                | Self::Utilities
                | Self::InsuranceTaxes
                | Self::Administrative
                | Self::OtherOperating
        )
    }
}

/// Fixed presentation order of operating expense subsections.
pub const OPERATING_EXPENSE_ORDER: [Subsection; 5] = [
    Subsection::RepairsMaintenance,
    Subsection::Utilities,
    Subsection::InsuranceTaxes,
    Subsection::Administrative,
    Subsection::OtherOperating,
];

/// One row of the classification table: a half-open account-number range
/// `[start, end)` for one account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRule {
    /// Account type the rule applies to.
    pub account_type: AccountType,
    /// Inclusive lower bound on the numeric account number.
    pub start: u32,
    /// Exclusive upper bound on the numeric account number.
    pub end: u32,
    /// Subsection accounts in this range belong to.
    pub subsection: Subsection,
}

impl RangeRule {
    /// Returns true if an account of the given type and number falls in
    /// this range.
    #[must_use]
    pub fn matches(&self, account_type: AccountType, number: u32) -> bool {
        account_type == self.account_type && number >= self.start && number < self.end
    }
}

/// A named, versioned mapping from account-number ranges to statement
/// subsections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationTable {
    /// Table name, for diagnostics.
    pub name: String,
    /// Table version; bump when ranges change.
    pub version: u32,
    rules: Vec<RangeRule>,
}

impl ClassificationTable {
    /// Creates a table from explicit rules.
    #[must_use]
    pub fn new(name: impl Into<String>, version: u32, rules: Vec<RangeRule>) -> Self {
        Self {
            name: name.into(),
            version,
            rules,
        }
    }

    /// The configured rules, in precedence order.
    #[must_use]
    pub fn rules(&self) -> &[RangeRule] {
        &self.rules
    }

    /// Classifies an account into a subsection.
    ///
    /// `None` is a classification gap: either the account number has no
    /// leading digits, or no configured range for its type covers it. The
    /// caller surfaces gaps (warning + "Unclassified" bucket); they are
    /// never absorbed silently.
    #[must_use]
    pub fn classify(&self, account: &Account) -> Option<Subsection> {
        let number = account.number_value()?;
        self.rules
            .iter()
            .find(|rule| rule.matches(account.account_type, number))
            .map(|rule| rule.subsection)
    }

    /// Returns every active leaf account the table cannot place.
    ///
    /// Intended for startup validation against the live chart of accounts;
    /// an empty result means the table fully covers the chart.
    #[must_use]
    pub fn validate_against<'a>(&self, accounts: &'a [Account]) -> Vec<&'a Account> {
        accounts
            .iter()
            .filter(|a| a.is_active && !a.is_header_account && self.classify(a).is_none())
            .collect()
    }
}

impl Default for ClassificationTable {
    /// The standard property-management chart layout.
    fn default() -> Self {
        use AccountType::{Asset, Equity, Expense, Liability, Revenue};
        use Subsection as S;

        let rule = |account_type, start, end, subsection| RangeRule {
            account_type,
            start,
            end,
            subsection,
        };

        Self::new(
            "property-management-standard",
            1,
            vec![
                rule(Asset, 1000, 1500, S::CurrentAssets),
                rule(Asset, 1500, 1800, S::FixedAssets),
                rule(Asset, 1800, 2000, S::OtherAssets),
                rule(Liability, 2000, 2500, S::CurrentLiabilities),
                rule(Liability, 2500, 3000, S::LongTermLiabilities),
                rule(Equity, 3000, 4000, S::Equity),
                rule(Revenue, 4000, 4200, S::RentalIncome),
                rule(Revenue, 4200, 5000, S::OtherIncome),
                rule(Expense, 5000, 5200, S::RepairsMaintenance),
                rule(Expense, 5200, 5400, S::Utilities),
                rule(Expense, 5400, 5600, S::InsuranceTaxes),
                rule(Expense, 5600, 5800, S::Administrative),
                rule(Expense, 5800, 6000, S::OtherOperating),
                rule(Expense, 6000, 10000, S::OtherExpenses),
            ],
        )
    }
}

//! Report generation service.
//!
//! `ReportingService` orchestrates the reader collaborators, the balance
//! aggregator, and the classifier into the four statement generators. Every
//! generator is a pure function of its arguments against the readers'
//! current state; nothing here mutates shared state.
//!
//! Comparison variants are an explicit two-step composition: a private
//! `compute_*` primitive that knows nothing about comparisons, plus a public
//! `generate_*` wrapper that calls it at most twice. The nested report is
//! structurally incapable of requesting a further comparison.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{NaiveDate, Utc};
use tracing::warn;

use arbor_shared::types::{AccountId, BusinessId, PropertyId};
use arbor_shared::{Cents, Currency, DateRange};

use crate::classify::{ClassificationTable, OPERATING_EXPENSE_ORDER, Subsection};
use crate::ledger::aggregate::{AccountTotals, aggregate_postings};
use crate::ledger::reader::{
    AccountFilter, ChartReader, LedgerReader, PostingQuery, PostingWindow,
};
use crate::ledger::types::{Account, AccountType, SourceType};

use super::error::ReportError;
use super::types::{
    BalanceSheet, BalanceSheetSection, CURRENT_YEAR_EARNINGS_NAME, CURRENT_YEAR_EARNINGS_NUMBER,
    CashFlowLine, CashFlowSection, CashFlowStatement, IncomeStatement, IncomeStatementSection,
    OperatingCashFlow, PropertyPerformance, ReportLine, StatementSubsection, TrialBalance,
    TrialBalanceRow,
};

/// Options for trial balance generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialBalanceOptions {
    /// Restrict to one property.
    pub property_id: Option<PropertyId>,
    /// Keep rows whose debit and credit balances are both zero.
    pub include_zero_balances: bool,
}

/// Options for balance sheet generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceSheetOptions {
    /// Restrict to one property.
    pub property_id: Option<PropertyId>,
    /// Attach a comparison as of one calendar year earlier.
    pub compare_prior_year: bool,
}

/// Options for income statement generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomeStatementOptions {
    /// Restrict to one property.
    pub property_id: Option<PropertyId>,
    /// Attach a comparison over the immediately preceding window of equal
    /// length.
    pub compare_prior_period: bool,
    /// Attach a comparison over the same month/day range one year back.
    pub compare_prior_year: bool,
}

/// Options for cash flow statement generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashFlowOptions {
    /// Restrict to one property.
    pub property_id: Option<PropertyId>,
}

/// Netted debit/credit activity for one source-type group of cash postings.
#[derive(Debug, Clone, Copy, Default)]
struct TagGroup {
    debits: Cents,
    credits: Cents,
}

impl TagGroup {
    fn net(self) -> Cents {
        self.debits - self.credits
    }
}

/// Financial reporting engine over injected reader collaborators.
pub struct ReportingService<L, C> {
    ledger: L,
    chart: C,
    table: ClassificationTable,
    currency: Currency,
}

impl<L: LedgerReader, C: ChartReader> ReportingService<L, C> {
    /// Creates a service over the given readers, classification table, and
    /// reporting currency.
    pub fn new(ledger: L, chart: C, table: ClassificationTable, currency: Currency) -> Self {
        Self {
            ledger,
            chart,
            table,
            currency,
        }
    }

    /// The classification table in use.
    #[must_use]
    pub fn classification_table(&self) -> &ClassificationTable {
        &self.table
    }

    /// Validates the classification table against the live chart of
    /// accounts, returning the accounts the table cannot place.
    ///
    /// Intended to run at startup; each gap is also logged.
    pub async fn validate_classification(
        &self,
        business_id: BusinessId,
    ) -> Result<Vec<Account>, ReportError> {
        let accounts = self
            .chart
            .list_accounts(business_id, AccountFilter::active_leaves())
            .await?;
        let gaps: Vec<Account> = self
            .table
            .validate_against(&accounts)
            .into_iter()
            .cloned()
            .collect();
        for account in &gaps {
            warn!(
                account_number = %account.account_number,
                account_type = ?account.account_type,
                table = %self.table.name,
                table_version = self.table.version,
                "account not covered by classification table"
            );
        }
        Ok(gaps)
    }

    // ========================================================================
    // Trial Balance
    // ========================================================================

    /// Generates a trial balance as of a date.
    ///
    /// Every active leaf account's raw net (debits - credits) is split into
    /// a debit or credit balance per its normal-balance side. Total debits
    /// must equal total credits; a false `is_balanced` signals a
    /// ledger-integrity defect and is surfaced, never swallowed.
    pub async fn generate_trial_balance(
        &self,
        business_id: BusinessId,
        as_of: NaiveDate,
        options: &TrialBalanceOptions,
    ) -> Result<TrialBalance, ReportError> {
        let accounts = self.leaf_accounts(business_id).await?;
        let totals = self
            .window_totals(business_id, PostingWindow::AsOf(as_of), options.property_id)
            .await?;

        let mut rows = Vec::new();
        let mut total_debits = Cents::ZERO;
        let mut total_credits = Cents::ZERO;

        for account in &accounts {
            let t = totals.get(&account.id).copied().unwrap_or_default();
            let (debit, credit) = account
                .normal_balance
                .balance_sides(t.debits_cents, t.credits_cents);
            total_debits += debit;
            total_credits += credit;

            if debit.is_zero() && credit.is_zero() && !options.include_zero_balances {
                continue;
            }
            rows.push(TrialBalanceRow {
                account_id: account.id,
                account_number: account.account_number.clone(),
                account_name: account.account_name.clone(),
                debit_balance_cents: debit,
                credit_balance_cents: credit,
            });
        }

        let is_balanced = total_debits == total_credits;
        if !is_balanced {
            warn!(
                business_id = %business_id,
                %as_of,
                total_debits_cents = total_debits.into_inner(),
                total_credits_cents = total_credits.into_inner(),
                "trial balance does not balance; ledger integrity defect"
            );
        }

        Ok(TrialBalance {
            business_id,
            as_of,
            property_id: options.property_id,
            currency: self.currency,
            rows,
            total_debits_cents: total_debits,
            total_credits_cents: total_credits,
            is_balanced,
            generated_at: Utc::now(),
        })
    }

    // ========================================================================
    // Balance Sheet
    // ========================================================================

    /// Generates a classified balance sheet as of a date, optionally with a
    /// prior-year comparison.
    pub async fn generate_balance_sheet(
        &self,
        business_id: BusinessId,
        as_of: NaiveDate,
        options: &BalanceSheetOptions,
    ) -> Result<BalanceSheet, ReportError> {
        let mut report = self
            .compute_balance_sheet(business_id, as_of, options.property_id)
            .await?;
        if options.compare_prior_year {
            let prior_as_of = arbor_shared::types::period::shift_back_one_year(as_of);
            let prior = self
                .compute_balance_sheet(business_id, prior_as_of, options.property_id)
                .await?;
            report.prior_year = Some(Box::new(prior));
        }
        Ok(report)
    }

    /// Balance sheet primitive: cumulative window, no comparison.
    async fn compute_balance_sheet(
        &self,
        business_id: BusinessId,
        as_of: NaiveDate,
        property_id: Option<PropertyId>,
    ) -> Result<BalanceSheet, ReportError> {
        let accounts = self.leaf_accounts(business_id).await?;
        let totals = self
            .window_totals(business_id, PostingWindow::AsOf(as_of), property_id)
            .await?;

        let mut asset_buckets: HashMap<Subsection, Vec<ReportLine>> = HashMap::new();
        let mut liability_buckets: HashMap<Subsection, Vec<ReportLine>> = HashMap::new();
        let mut equity_buckets: HashMap<Subsection, Vec<ReportLine>> = HashMap::new();

        for account in accounts
            .iter()
            .filter(|a| a.account_type.is_balance_sheet())
        {
            let Some(t) = totals.get(&account.id) else {
                continue;
            };
            let balance = account
                .normal_balance
                .signed_net(t.debits_cents, t.credits_cents);
            if balance.is_zero() {
                continue;
            }

            let key = self.section_key(account);
            let line = ReportLine {
                account_id: Some(account.id),
                account_number: account.account_number.clone(),
                account_name: account.account_name.clone(),
                amount_cents: balance,
            };
            let buckets = match account.account_type {
                AccountType::Asset => &mut asset_buckets,
                AccountType::Liability => &mut liability_buckets,
                _ => &mut equity_buckets,
            };
            buckets.entry(key).or_default().push(line);
        }

        let (asset_subsections, total_assets) = assemble_subsections(
            &mut asset_buckets,
            &[
                Subsection::CurrentAssets,
                Subsection::FixedAssets,
                Subsection::OtherAssets,
                Subsection::Unclassified,
            ],
        );
        let (liability_subsections, total_liabilities) = assemble_subsections(
            &mut liability_buckets,
            &[
                Subsection::CurrentLiabilities,
                Subsection::LongTermLiabilities,
                Subsection::Unclassified,
            ],
        );
        let (mut equity_subsections, mut total_equity) = assemble_subsections(
            &mut equity_buckets,
            &[Subsection::Equity, Subsection::Unclassified],
        );

        // Net income for the calendar year through the as-of date, injected
        // as a synthetic equity line. Exists only in the report.
        let earnings = self
            .compute_income_statement(business_id, DateRange::year_to_date(as_of), property_id)
            .await?
            .net_income_cents;
        if !earnings.is_zero() {
            inject_current_year_earnings(&mut equity_subsections, earnings);
            total_equity += earnings;
        }

        let liabilities_and_equity = total_liabilities + total_equity;
        let imbalance = total_assets - liabilities_and_equity;
        let is_balanced = imbalance.is_zero();
        if !is_balanced {
            warn!(
                business_id = %business_id,
                %as_of,
                imbalance_cents = imbalance.into_inner(),
                "balance sheet violates the accounting equation; ledger integrity defect"
            );
        }

        Ok(BalanceSheet {
            business_id,
            as_of,
            property_id,
            currency: self.currency,
            assets: BalanceSheetSection {
                subsections: asset_subsections,
                total_cents: total_assets,
            },
            liabilities: BalanceSheetSection {
                subsections: liability_subsections,
                total_cents: total_liabilities,
            },
            equity: BalanceSheetSection {
                subsections: equity_subsections,
                total_cents: total_equity,
            },
            total_assets_cents: total_assets,
            total_liabilities_cents: total_liabilities,
            total_equity_cents: total_equity,
            total_liabilities_and_equity_cents: liabilities_and_equity,
            is_balanced,
            imbalance_cents: imbalance,
            prior_year: None,
            generated_at: Utc::now(),
        })
    }

    // ========================================================================
    // Income Statement
    // ========================================================================

    /// Generates a classified income statement over an activity window,
    /// optionally with prior-period and/or prior-year comparisons.
    pub async fn generate_income_statement(
        &self,
        business_id: BusinessId,
        period: DateRange,
        options: &IncomeStatementOptions,
    ) -> Result<IncomeStatement, ReportError> {
        let mut report = self
            .compute_income_statement(business_id, period, options.property_id)
            .await?;
        if options.compare_prior_period {
            let prior = self
                .compute_income_statement(business_id, period.prior_period(), options.property_id)
                .await?;
            report.prior_period = Some(Box::new(prior));
        }
        if options.compare_prior_year {
            let prior = self
                .compute_income_statement(business_id, period.prior_year(), options.property_id)
                .await?;
            report.prior_year = Some(Box::new(prior));
        }
        Ok(report)
    }

    /// Income statement primitive: one activity window, no comparison.
    async fn compute_income_statement(
        &self,
        business_id: BusinessId,
        period: DateRange,
        property_id: Option<PropertyId>,
    ) -> Result<IncomeStatement, ReportError> {
        if period.is_inverted() {
            return Err(ReportError::InvalidDateRange {
                start: period.start,
                end: period.end,
            });
        }

        let accounts = self.leaf_accounts(business_id).await?;
        let totals = self
            .window_totals(business_id, PostingWindow::Range(period), property_id)
            .await?;

        let mut revenue_buckets: HashMap<Subsection, Vec<ReportLine>> = HashMap::new();
        let mut operating_buckets: HashMap<Subsection, Vec<ReportLine>> = HashMap::new();
        let mut other_buckets: HashMap<Subsection, Vec<ReportLine>> = HashMap::new();

        for account in accounts
            .iter()
            .filter(|a| a.account_type.is_income_statement())
        {
            // Only accounts with nonzero net activity in the window appear;
            // a fully reversed charge is a wash, not a line.
            let Some(t) = totals.get(&account.id) else {
                continue;
            };
            let net_activity = account
                .normal_balance
                .signed_net(t.debits_cents, t.credits_cents);
            if net_activity.is_zero() {
                continue;
            }
            let line = ReportLine {
                account_id: Some(account.id),
                account_number: account.account_number.clone(),
                account_name: account.account_name.clone(),
                amount_cents: net_activity,
            };

            let key = self.section_key(account);
            match account.account_type {
                AccountType::Revenue => {
                    revenue_buckets.entry(key).or_default().push(line);
                }
                AccountType::Expense if key == Subsection::OtherExpenses => {
                    other_buckets.entry(key).or_default().push(line);
                }
                AccountType::Expense => {
                    operating_buckets.entry(key).or_default().push(line);
                }
                _ => {}
            }
        }

        let (revenue_subsections, revenue_total) = assemble_subsections(
            &mut revenue_buckets,
            &[
                Subsection::RentalIncome,
                Subsection::OtherIncome,
                Subsection::Unclassified,
            ],
        );

        let mut operating_order: Vec<Subsection> = OPERATING_EXPENSE_ORDER.to_vec();
        operating_order.push(Subsection::Unclassified);
        let (operating_subsections, operating_total) =
            assemble_subsections(&mut operating_buckets, &operating_order);

        let (other_subsections, other_total) =
            assemble_subsections(&mut other_buckets, &[Subsection::OtherExpenses]);

        let gross_profit = revenue_total;
        let operating_income = gross_profit - operating_total;
        let net_income = operating_income - other_total;

        Ok(IncomeStatement {
            business_id,
            period,
            property_id,
            currency: self.currency,
            revenue: IncomeStatementSection {
                subsections: revenue_subsections,
                total_cents: revenue_total,
            },
            operating_expenses: IncomeStatementSection {
                subsections: operating_subsections,
                total_cents: operating_total,
            },
            other_expenses: IncomeStatementSection {
                subsections: other_subsections,
                total_cents: other_total,
            },
            gross_profit_cents: gross_profit,
            operating_income_cents: operating_income,
            net_income_cents: net_income,
            prior_period: None,
            prior_year: None,
            generated_at: Utc::now(),
        })
    }

    // ========================================================================
    // Cash Flow Statement
    // ========================================================================

    /// Generates a simplified direct-method cash flow statement.
    ///
    /// Cash activity is grouped by posting source tag and bucketed into
    /// operating and financing activity; investing stays empty pending
    /// future source types. For a closed, fully-tagged ledger,
    /// `closing - opening == net_change`.
    pub async fn generate_cash_flow_statement(
        &self,
        business_id: BusinessId,
        period: DateRange,
        options: &CashFlowOptions,
    ) -> Result<CashFlowStatement, ReportError> {
        if period.is_inverted() {
            return Err(ReportError::InvalidDateRange {
                start: period.start,
                end: period.end,
            });
        }

        let bank_accounts = self.chart.list_bank_accounts(business_id).await?;
        let cash_ids: HashSet<AccountId> =
            bank_accounts.iter().map(|b| b.account_id).collect();

        // Opening is strictly before the window so that opening + period
        // activity reconciles exactly to closing.
        let opening = match period.start.pred_opt() {
            Some(day_before) => {
                self.cash_balance(business_id, day_before, options.property_id, &cash_ids)
                    .await?
            }
            None => Cents::ZERO,
        };
        let closing = self
            .cash_balance(business_id, period.end, options.property_id, &cash_ids)
            .await?;

        let postings = self
            .ledger
            .list_postings(
                business_id,
                &PostingQuery::range(period).with_property(options.property_id),
            )
            .await?;

        // BTreeMap keyed by wire tag keeps line order deterministic.
        let mut groups: BTreeMap<Option<String>, TagGroup> = BTreeMap::new();
        for posting in postings.iter().filter(|p| cash_ids.contains(&p.account_id)) {
            let key = posting.source_type.as_ref().map(|s| s.as_str().to_string());
            let group = groups.entry(key).or_default();
            group.debits += posting.debit_cents;
            group.credits += posting.credit_cents;
        }

        let mut receipts = CashFlowSection::default();
        let mut payments = CashFlowSection::default();
        let mut financing = CashFlowSection::default();

        for (tag, group) in groups {
            let source = tag.map(SourceType::from);
            match source {
                Some(SourceType::RentPayment) => {
                    if !group.debits.is_zero() {
                        receipts.lines.push(CashFlowLine {
                            label: "Rent Payments".to_string(),
                            source_type: source,
                            amount_cents: group.debits,
                        });
                        receipts.total_cents += group.debits;
                    }
                }
                Some(SourceType::Expense) => {
                    if !group.credits.is_zero() {
                        payments.lines.push(CashFlowLine {
                            label: "Expense Payments".to_string(),
                            source_type: source,
                            amount_cents: group.credits,
                        });
                        payments.total_cents += group.credits;
                    }
                }
                Some(SourceType::SpecialTransaction) => {
                    let net = group.net();
                    if net.is_negative() {
                        financing.lines.push(CashFlowLine {
                            label: "Owner Draws".to_string(),
                            source_type: source,
                            amount_cents: net.abs(),
                        });
                    } else if !net.is_zero() {
                        financing.lines.push(CashFlowLine {
                            label: "Owner Contributions".to_string(),
                            source_type: source,
                            amount_cents: net,
                        });
                    }
                    financing.total_cents += net;
                }
                // Unknown or missing tags: operating, by sign of net.
                other => {
                    let net = group.net();
                    let label = match &other {
                        Some(SourceType::Other(tag)) => tag.clone(),
                        _ => "Untagged".to_string(),
                    };
                    if net.is_negative() {
                        payments.lines.push(CashFlowLine {
                            label,
                            source_type: other,
                            amount_cents: net.abs(),
                        });
                        payments.total_cents += net.abs();
                    } else if !net.is_zero() {
                        receipts.lines.push(CashFlowLine {
                            label,
                            source_type: other,
                            amount_cents: net,
                        });
                        receipts.total_cents += net;
                    }
                }
            }
        }

        let operating_net = receipts.total_cents - payments.total_cents;
        let investing = CashFlowSection::default();
        let net_change = operating_net + investing.total_cents + financing.total_cents;

        Ok(CashFlowStatement {
            business_id,
            period,
            property_id: options.property_id,
            currency: self.currency,
            opening_cash_cents: opening,
            closing_cash_cents: closing,
            operating: OperatingCashFlow {
                receipts,
                payments,
                net_cents: operating_net,
            },
            investing,
            financing,
            net_change_cents: net_change,
            generated_at: Utc::now(),
        })
    }

    // ========================================================================
    // Property P&L and Comparison
    // ========================================================================

    /// Generates an income statement scoped to a single property.
    pub async fn generate_property_pl(
        &self,
        business_id: BusinessId,
        property_id: PropertyId,
        period: DateRange,
    ) -> Result<IncomeStatement, ReportError> {
        self.compute_income_statement(business_id, period, Some(property_id))
            .await
    }

    /// Fans the income statement out across properties and tabulates
    /// summary metrics. Pure fan-out; rows keep the input order.
    pub async fn generate_property_comparison(
        &self,
        business_id: BusinessId,
        property_ids: &[PropertyId],
        period: DateRange,
    ) -> Result<Vec<PropertyPerformance>, ReportError> {
        let mut rows = Vec::with_capacity(property_ids.len());
        for &property_id in property_ids {
            let statement = self
                .compute_income_statement(business_id, period, Some(property_id))
                .await?;
            rows.push(PropertyPerformance {
                property_id,
                revenue_cents: statement.revenue.total_cents,
                expenses_cents: statement.operating_expenses.total_cents
                    + statement.other_expenses.total_cents,
                net_income_cents: statement.net_income_cents,
                noi_cents: statement.operating_income_cents,
            });
        }
        Ok(rows)
    }

    // ========================================================================
    // Shared plumbing
    // ========================================================================

    /// Active leaf accounts, ordered by account number.
    async fn leaf_accounts(&self, business_id: BusinessId) -> Result<Vec<Account>, ReportError> {
        let mut accounts = self
            .chart
            .list_accounts(business_id, AccountFilter::active_leaves())
            .await?;
        accounts.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        Ok(accounts)
    }

    /// Per-account debit/credit sums over a window.
    async fn window_totals(
        &self,
        business_id: BusinessId,
        window: PostingWindow,
        property_id: Option<PropertyId>,
    ) -> Result<HashMap<AccountId, AccountTotals>, ReportError> {
        let query = PostingQuery {
            window,
            property_id,
        };
        let postings = self.ledger.list_postings(business_id, &query).await?;
        Ok(aggregate_postings(&postings))
    }

    /// Cumulative net balance of the given cash accounts as of a date,
    /// debit-normal convention.
    async fn cash_balance(
        &self,
        business_id: BusinessId,
        as_of: NaiveDate,
        property_id: Option<PropertyId>,
        cash_ids: &HashSet<AccountId>,
    ) -> Result<Cents, ReportError> {
        let totals = self
            .window_totals(business_id, PostingWindow::AsOf(as_of), property_id)
            .await?;
        Ok(cash_ids
            .iter()
            .filter_map(|id| totals.get(id))
            .map(AccountTotals::net)
            .sum())
    }

    /// Classifies an account, warning and falling back to `Unclassified`
    /// when the table has no covering range (or routes the account to a
    /// subsection foreign to its type).
    fn section_key(&self, account: &Account) -> Subsection {
        let classified = self.table.classify(account);
        let key = match (account.account_type, classified) {
            (
                AccountType::Asset,
                Some(
                    key @ (Subsection::CurrentAssets
                    | Subsection::FixedAssets
                    | Subsection::OtherAssets),
                ),
            )
            | (
                AccountType::Liability,
                Some(
                    key @ (Subsection::CurrentLiabilities | Subsection::LongTermLiabilities),
                ),
            )
            | (AccountType::Equity, Some(key @ Subsection::Equity))
            | (
                AccountType::Revenue,
                Some(key @ (Subsection::RentalIncome | Subsection::OtherIncome)),
            ) => key,
            (AccountType::Expense, Some(key))
                if key.is_operating_expense() || key == Subsection::OtherExpenses =>
            {
                key
            }
            _ => Subsection::Unclassified,
        };
        if key == Subsection::Unclassified {
            warn!(
                account_number = %account.account_number,
                account_type = ?account.account_type,
                table = %self.table.name,
                table_version = self.table.version,
                "account not covered by classification table; reporting as Unclassified"
            );
        }
        key
    }
}

/// Drains buckets into subsections following the given presentation order,
/// returning the subsections and their combined total. Empty buckets are
/// omitted.
fn assemble_subsections(
    buckets: &mut HashMap<Subsection, Vec<ReportLine>>,
    order: &[Subsection],
) -> (Vec<StatementSubsection>, Cents) {
    let mut subsections = Vec::new();
    let mut total = Cents::ZERO;
    for &key in order {
        let Some(lines) = buckets.remove(&key) else {
            continue;
        };
        if lines.is_empty() {
            continue;
        }
        let subsection_total: Cents = lines.iter().map(|l| l.amount_cents).sum();
        total += subsection_total;
        subsections.push(StatementSubsection {
            key,
            name: key.display_name().to_string(),
            lines,
            total_cents: subsection_total,
        });
    }
    (subsections, total)
}

/// Inserts the synthetic current-year-earnings line into the equity
/// section, keeping lines ordered by account number.
fn inject_current_year_earnings(subsections: &mut Vec<StatementSubsection>, earnings: Cents) {
    let line = ReportLine {
        account_id: None,
        account_number: CURRENT_YEAR_EARNINGS_NUMBER.to_string(),
        account_name: CURRENT_YEAR_EARNINGS_NAME.to_string(),
        amount_cents: earnings,
    };
    if let Some(subsection) = subsections
        .iter_mut()
        .find(|s| s.key == Subsection::Equity)
    {
        let position = subsection
            .lines
            .iter()
            .position(|l| l.account_number.as_str() > CURRENT_YEAR_EARNINGS_NUMBER)
            .unwrap_or(subsection.lines.len());
        subsection.lines.insert(position, line);
        subsection.total_cents += earnings;
    } else {
        subsections.insert(
            0,
            StatementSubsection {
                key: Subsection::Equity,
                name: Subsection::Equity.display_name().to_string(),
                lines: vec![line],
                total_cents: earnings,
            },
        );
    }
}

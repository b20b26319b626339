//! Financial reporting engine for Arbor.
//!
//! This crate contains pure reporting logic with ZERO web or database
//! dependencies. It turns a stream of double-entry ledger postings into the
//! standard accounting statements.
//!
//! # Modules
//!
//! - `ledger` - Posting/account domain types, reader interfaces, balance aggregation
//! - `classify` - Number-range account classification into statement sections
//! - `reports` - Trial balance, balance sheet, income statement, cash flow,
//!   and property comparison generators

pub mod classify;
pub mod ledger;
pub mod reports;

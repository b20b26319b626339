//! Shared types for Arbor.
//!
//! This crate provides common types used across the reporting engine:
//! - Integer-cents money type (no floating point, ever)
//! - Typed IDs for type-safe entity references
//! - Calendar date ranges with comparison-window arithmetic

pub mod types;

pub use types::{Cents, Currency, DateRange};

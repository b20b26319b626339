//! Common types used across the reporting engine.

pub mod id;
pub mod money;
pub mod period;

pub use id::*;
pub use money::{Cents, Currency};
pub use period::DateRange;

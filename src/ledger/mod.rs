//! Cumulative-spend tracking for favoritism classification.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod account;
mod manager;

pub use account::AccountSpend;
pub use manager::{AccountSummary, SpendLedger};

/// Scale factor for storing Decimal spend as AtomicU64 (6 decimal places precision).
pub(crate) const SPEND_SCALE_FACTOR: Decimal = dec!(1_000_000);

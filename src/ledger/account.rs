use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::SPEND_SCALE_FACTOR;
use crate::catalog::{Catalog, FavoritismRow};
use crate::error::{EconomyError, Result};

/// Lock-free cumulative spend for one account.
///
/// Spend is stored as fixed-point minor units in an `AtomicU64`, so
/// concurrent `record` calls never lose updates and reads never block.
#[derive(Debug)]
pub struct AccountSpend {
    pub account_id: String,
    spent_bits: AtomicU64,
}

impl AccountSpend {
    pub(super) fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            spent_bits: AtomicU64::new(0),
        }
    }

    /// Adds a payment to the running total and returns the new total.
    pub fn record(&self, amount: Decimal) -> Result<Decimal> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(EconomyError::NegativeAmount { amount });
        }
        let bits = (amount * SPEND_SCALE_FACTOR)
            .trunc()
            .to_u64()
            .ok_or(EconomyError::AmountOutOfRange { amount })?;
        let previous = self.spent_bits.fetch_add(bits, Ordering::Relaxed);
        Ok(Decimal::from(previous + bits) / SPEND_SCALE_FACTOR)
    }

    pub fn total(&self) -> Decimal {
        Decimal::from(self.spent_bits.load(Ordering::Relaxed)) / SPEND_SCALE_FACTOR
    }

    /// The favoritism row this account's total currently lands in.
    pub fn tier<'a>(&self, catalog: &'a Catalog) -> Result<&'a FavoritismRow> {
        catalog.classify_spend(self.total())
    }
}

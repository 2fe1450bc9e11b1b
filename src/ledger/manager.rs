//! Multi-account spend ledger.

use std::sync::Arc;

use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::Serialize;

use super::account::AccountSpend;
use crate::catalog::{Catalog, FavoritismRow, FavoritismTier};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct SpendLedger {
    accounts: Arc<DashMap<String, Arc<AccountSpend>>>,
}

impl SpendLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a payment against an account, creating it on first use.
    /// Returns the account's new cumulative total.
    pub fn record(&self, account_id: &str, amount: Decimal) -> Result<Decimal> {
        let account = self
            .accounts
            .entry(account_id.to_string())
            .or_insert_with(|| Arc::new(AccountSpend::new(account_id)))
            .clone();
        let total = account.record(amount)?;
        tracing::debug!(account = account_id, %amount, %total, "spend recorded");
        Ok(total)
    }

    pub fn get(&self, account_id: &str) -> Option<Arc<AccountSpend>> {
        self.accounts.get(account_id).map(|entry| Arc::clone(&entry))
    }

    /// Cumulative spend for an account; zero for accounts never seen.
    pub fn total(&self, account_id: &str) -> Decimal {
        self.get(account_id)
            .map(|account| account.total())
            .unwrap_or_default()
    }

    /// Favoritism row for an account; never-seen accounts classify at zero
    /// spend.
    pub fn tier<'a>(&self, account_id: &str, catalog: &'a Catalog) -> Result<&'a FavoritismRow> {
        catalog.classify_spend(self.total(account_id))
    }

    pub fn remove(&self, account_id: &str) -> Option<Arc<AccountSpend>> {
        self.accounts.remove(account_id).map(|(_, account)| account)
    }

    pub fn account_ids(&self) -> Vec<String> {
        self.accounts.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn summary(&self, catalog: &Catalog) -> Result<Vec<AccountSummary>> {
        self.accounts
            .iter()
            .map(|entry| {
                let total_spent = entry.value().total();
                let row = catalog.classify_spend(total_spent)?;
                Ok(AccountSummary {
                    account_id: entry.key().clone(),
                    total_spent,
                    tier: row.tier,
                    discount_percent: row.discount_percent,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_id: String,
    pub total_spent: Decimal,
    pub tier: FavoritismTier,
    pub discount_percent: u8,
}

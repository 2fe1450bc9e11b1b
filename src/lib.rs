//! # yourspace-economy
//!
//! Token economy model for the YourSpace creator platform: the MNEE pricing
//! catalog (AI-credit unit prices, subscription plans, the four-layer agent
//! economy, spend-based favoritism tiers), pure price derivations over it,
//! and a concurrent cumulative-spend ledger.
//!
//! All money is [`rust_decimal::Decimal`]; the catalog is immutable,
//! process-wide, and safe to read from any thread.
//!
//! ## Quick start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use yourspace_economy::{FavoritismTier, catalog};
//!
//! fn main() -> Result<(), yourspace_economy::EconomyError> {
//!     let row = catalog().classify_spend(dec!(150))?;
//!     assert_eq!(row.tier, FavoritismTier::Supporter);
//!     assert_eq!(row.discount_percent, 25);
//!     Ok(())
//! }
//! ```
//!
//! ## Quoting a hire
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use yourspace_economy::{catalog, quote};
//!
//! fn main() -> Result<(), yourspace_economy::EconomyError> {
//!     // Two hours of Claude for an account that has spent 1000 MNEE.
//!     let hire = quote::hire_quote(catalog(), "claude", dec!(2), dec!(1000))?;
//!     assert_eq!(hire.total, dec!(40));
//!     Ok(())
//! }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod mnee;
pub mod quote;

pub use catalog::{
    Catalog, CreditKind, EconomyLayer, FavoritismRow, FavoritismSchedule, FavoritismTier,
    LayerDetail, LayerKind, QualityLevel, QualitySchedule, ServiceRate, SubscriptionPlan,
    SubscriptionTier, UnitPrice, catalog,
};
pub use error::{EconomyError, Result};
pub use ledger::{AccountSpend, AccountSummary, SpendLedger};
pub use quote::{
    CreditQuote, HireQuote, PREMIUM_CREDIT_DISCOUNT_PERCENT, credit_quote, earnings, hire_quote,
};

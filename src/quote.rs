//! Price derivations over the catalog tables: AI-credit purchases,
//! AI-service hires with favoritism discounts, and quality-scaled agent
//! earnings.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{Catalog, CreditKind, FavoritismTier, QualityLevel, SubscriptionTier};
use crate::error::{EconomyError, Result};

/// Discount Premium subscribers receive on AI credits, in percent.
pub const PREMIUM_CREDIT_DISCOUNT_PERCENT: u8 = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditQuote {
    pub kind: CreditKind,
    pub quantity: u32,
    pub unit_cost: Decimal,
    pub subtotal: Decimal,
    pub discount_percent: u8,
    pub total: Decimal,
}

/// Quotes an AI-credit purchase for a subscriber.
///
/// Premium subscribers get [`PREMIUM_CREDIT_DISCOUNT_PERCENT`] off; other
/// plans pay the listed unit cost.
pub fn credit_quote(
    catalog: &Catalog,
    kind: CreditKind,
    quantity: u32,
    plan: SubscriptionTier,
) -> Result<CreditQuote> {
    let price = catalog.unit_price(kind).ok_or_else(|| {
        EconomyError::invalid_catalog(format!("no unit price for {kind:?}"))
    })?;

    let subtotal = price.total(quantity);
    let discount_percent = if plan == SubscriptionTier::Premium {
        PREMIUM_CREDIT_DISCOUNT_PERCENT
    } else {
        0
    };
    let total = apply_percent_discount(subtotal, discount_percent);

    Ok(CreditQuote {
        kind,
        quantity,
        unit_cost: price.unit_cost,
        subtotal,
        discount_percent,
        total,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HireQuote {
    pub service_id: String,
    pub service_name: String,
    pub hours: Decimal,
    pub tier: FavoritismTier,
    pub discount_percent: u8,
    pub subtotal: Decimal,
    pub total: Decimal,
}

/// Quotes hiring an AI service for `hours`, with the hirer's favoritism
/// discount (derived from their cumulative spend) applied.
pub fn hire_quote(
    catalog: &Catalog,
    service_id: &str,
    hours: Decimal,
    cumulative_spend: Decimal,
) -> Result<HireQuote> {
    if hours.is_sign_negative() && !hours.is_zero() {
        return Err(EconomyError::NegativeAmount { amount: hours });
    }
    let rate = catalog
        .service_rate(service_id)
        .ok_or_else(|| EconomyError::UnknownService {
            id: service_id.to_string(),
        })?;
    let row = catalog.classify_spend(cumulative_spend)?;

    let subtotal = rate.cost_for(hours);
    Ok(HireQuote {
        service_id: rate.id.clone(),
        service_name: rate.name.clone(),
        hours,
        tier: row.tier,
        discount_percent: row.discount_percent,
        subtotal,
        total: row.apply_discount(subtotal),
    })
}

/// Agent earnings for `base_amount` of delivered work at `quality`.
pub fn earnings(catalog: &Catalog, base_amount: Decimal, quality: QualityLevel) -> Result<Decimal> {
    if base_amount.is_sign_negative() && !base_amount.is_zero() {
        return Err(EconomyError::NegativeAmount {
            amount: base_amount,
        });
    }
    let schedule = catalog.quality_schedule().ok_or_else(|| {
        EconomyError::invalid_catalog("agent-earnings layer is missing its quality multipliers")
    })?;
    Ok(schedule.scaled(base_amount, quality))
}

fn apply_percent_discount(amount: Decimal, percent: u8) -> Decimal {
    let remainder = 100u32.saturating_sub(u32::from(percent));
    amount * Decimal::from(remainder) / Decimal::from(100u32)
}

//! The immutable pricing catalog: AI-credit unit prices, subscription
//! plans, the four economy layers, and the favoritism schedule.
//!
//! The catalog is read-only shared state. [`catalog()`] publishes the
//! builtin tables once per process; every accessor is a pure read, so any
//! number of threads may call them without coordination.

use std::sync::OnceLock;

use rust_decimal::Decimal;
use serde::Serialize;

mod builtin;
mod credits;
mod economy;
mod favoritism;
mod subscription;

pub use credits::{CreditKind, UnitPrice};
pub use economy::{
    EconomyLayer, LayerDetail, LayerKind, QualityLevel, QualitySchedule, ServiceRate,
};
pub use favoritism::{FavoritismRow, FavoritismSchedule, FavoritismTier};
pub use subscription::{SubscriptionPlan, SubscriptionTier};

use crate::error::{EconomyError, Result};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Process-wide catalog with the builtin tables.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::builtins)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    unit_prices: Vec<UnitPrice>,
    subscription_plans: Vec<SubscriptionPlan>,
    economy_layers: Vec<EconomyLayer>,
    favoritism: FavoritismSchedule,
}

impl Catalog {
    /// The fixed reference tables. Builtin data satisfies every
    /// [`Catalog::from_parts`] check.
    pub fn builtins() -> Self {
        Self {
            unit_prices: builtin::unit_prices(),
            subscription_plans: builtin::subscription_plans(),
            economy_layers: builtin::economy_layers(),
            favoritism: FavoritismSchedule::from_rows_unchecked(builtin::favoritism_rows()),
        }
    }

    /// Assembles a catalog from externally loaded tables, validating every
    /// integrity invariant. Any violation is fatal: the catalog must not be
    /// served, since every derived pricing decision would inherit the
    /// defect.
    pub fn from_parts(
        unit_prices: Vec<UnitPrice>,
        subscription_plans: Vec<SubscriptionPlan>,
        economy_layers: Vec<EconomyLayer>,
        favoritism: FavoritismSchedule,
    ) -> Result<Self> {
        validate_unit_prices(&unit_prices)?;
        validate_subscription_plans(&subscription_plans)?;
        validate_economy_layers(&economy_layers)?;

        Ok(Self {
            unit_prices,
            subscription_plans,
            economy_layers,
            favoritism,
        })
    }

    pub fn unit_prices(&self) -> &[UnitPrice] {
        &self.unit_prices
    }

    pub fn unit_price(&self, kind: CreditKind) -> Option<&UnitPrice> {
        self.unit_prices.iter().find(|price| price.kind == kind)
    }

    pub fn subscription_plans(&self) -> &[SubscriptionPlan] {
        &self.subscription_plans
    }

    pub fn plan(&self, tier: SubscriptionTier) -> Option<&SubscriptionPlan> {
        self.subscription_plans
            .iter()
            .find(|plan| plan.tier == tier)
    }

    pub fn economy_layers(&self) -> &[EconomyLayer] {
        &self.economy_layers
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&EconomyLayer> {
        self.economy_layers.iter().find(|layer| layer.kind == kind)
    }

    /// Quality multipliers carried by the agent-earnings layer.
    pub fn quality_schedule(&self) -> Option<&QualitySchedule> {
        self.layer(LayerKind::AgentEarns)
            .and_then(EconomyLayer::quality_schedule)
    }

    /// Hourly rates carried by the agent-to-AI layer.
    pub fn service_rates(&self) -> &[ServiceRate] {
        self.layer(LayerKind::AgentToAi)
            .and_then(EconomyLayer::service_rates)
            .unwrap_or_default()
    }

    pub fn service_rate(&self, id: &str) -> Option<&ServiceRate> {
        let rates = self.service_rates();
        if let Some(rate) = rates.iter().find(|rate| rate.id == id) {
            return Some(rate);
        }

        let fallback = rates.iter().find(|rate| rate.id.eq_ignore_ascii_case(id));
        if let Some(rate) = fallback {
            tracing::debug!(
                input = id,
                resolved = %rate.id,
                "AI service resolved case-insensitively"
            );
        }
        fallback
    }

    pub fn favoritism(&self) -> &FavoritismSchedule {
        &self.favoritism
    }

    /// See [`FavoritismSchedule::classify`].
    pub fn classify_spend(&self, cumulative_spend: Decimal) -> Result<&FavoritismRow> {
        self.favoritism.classify(cumulative_spend)
    }
}

fn validate_unit_prices(prices: &[UnitPrice]) -> Result<()> {
    for kind in [
        CreditKind::ImageGeneration,
        CreditKind::TextGeneration,
        CreditKind::DesignGeneration,
    ] {
        let matching = prices.iter().filter(|price| price.kind == kind).count();
        if matching != 1 {
            return Err(EconomyError::invalid_catalog(format!(
                "expected exactly one unit price for {kind:?}, found {matching}"
            )));
        }
    }
    if let Some(price) = prices
        .iter()
        .find(|price| price.unit_cost.is_sign_negative())
    {
        return Err(EconomyError::invalid_catalog(format!(
            "unit cost for {:?} is negative: {}",
            price.kind, price.unit_cost
        )));
    }
    Ok(())
}

fn validate_subscription_plans(plans: &[SubscriptionPlan]) -> Result<()> {
    for tier in SubscriptionTier::ALL {
        let matching = plans.iter().filter(|plan| plan.tier == tier).count();
        if matching != 1 {
            return Err(EconomyError::invalid_catalog(format!(
                "expected exactly one plan for {tier:?}, found {matching}"
            )));
        }
    }
    for pair in plans.windows(2) {
        if pair[1].monthly_price < pair[0].monthly_price {
            return Err(EconomyError::invalid_catalog(format!(
                "plan prices must ascend: {} then {}",
                pair[0].monthly_price, pair[1].monthly_price
            )));
        }
    }
    if let Some(free) = plans.iter().find(|plan| plan.tier == SubscriptionTier::Free)
        && !free.monthly_price.is_zero()
    {
        return Err(EconomyError::invalid_catalog(format!(
            "free plan must cost zero, got {}",
            free.monthly_price
        )));
    }
    Ok(())
}

fn validate_economy_layers(layers: &[EconomyLayer]) -> Result<()> {
    for kind in LayerKind::ALL {
        let matching = layers.iter().filter(|layer| layer.kind == kind).count();
        if matching != 1 {
            return Err(EconomyError::invalid_catalog(format!(
                "expected exactly one economy layer for {kind:?}, found {matching}"
            )));
        }
    }

    for layer in layers {
        match (layer.kind, &layer.detail) {
            (LayerKind::AgentEarns, LayerDetail::Earnings { .. }) => {}
            (LayerKind::AgentEarns, _) => {
                return Err(EconomyError::invalid_catalog(
                    "agent-earnings layer is missing its quality multipliers",
                ));
            }
            (LayerKind::AgentToAi, LayerDetail::Services { .. }) => {}
            (LayerKind::AgentToAi, _) => {
                return Err(EconomyError::invalid_catalog(
                    "agent-to-AI layer is missing its service rates",
                ));
            }
            _ => {}
        }
    }

    if let Some(schedule) = layers
        .iter()
        .find_map(EconomyLayer::quality_schedule)
    {
        schedule.validate()?;
    }

    let rates = layers
        .iter()
        .find_map(EconomyLayer::service_rates)
        .unwrap_or_default();
    for (index, rate) in rates.iter().enumerate() {
        if rate.cost_per_hour.is_sign_negative() {
            return Err(EconomyError::invalid_catalog(format!(
                "hourly rate for '{}' is negative: {}",
                rate.id, rate.cost_per_hour
            )));
        }
        if rates[..index].iter().any(|other| other.id == rate.id) {
            return Err(EconomyError::invalid_catalog(format!(
                "duplicate AI service id '{}'",
                rate.id
            )));
        }
    }

    Ok(())
}

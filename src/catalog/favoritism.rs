//! Spend-based favoritism tiers and the classification over them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EconomyError, Result};

/// Service-level tier derived from an account's cumulative spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FavoritismTier {
    Regular,
    Patron,
    Supporter,
    Contributor,
    PlatformBuilder,
}

impl FavoritismTier {
    pub const ALL: [Self; 5] = [
        Self::Regular,
        Self::Patron,
        Self::Supporter,
        Self::Contributor,
        Self::PlatformBuilder,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritismRow {
    #[serde(rename = "tierId")]
    pub tier: FavoritismTier,
    pub display_name: String,
    pub discount_percent: u8,
    pub wait_time_label: String,
    pub min_cumulative_spend: Decimal,
}

impl FavoritismRow {
    pub fn new(
        tier: FavoritismTier,
        display_name: impl Into<String>,
        discount_percent: u8,
        wait_time_label: impl Into<String>,
        min_cumulative_spend: Decimal,
    ) -> Self {
        Self {
            tier,
            display_name: display_name.into(),
            discount_percent,
            wait_time_label: wait_time_label.into(),
            min_cumulative_spend,
        }
    }

    /// `amount` after this tier's discount.
    pub fn apply_discount(&self, amount: Decimal) -> Decimal {
        let remainder = 100u32.saturating_sub(u32::from(self.discount_percent));
        amount * Decimal::from(remainder) / Decimal::from(100u32)
    }
}

/// Favoritism rows ordered by ascending spend threshold.
///
/// The ordering invariants are checked once at construction, so
/// classification is a plain search over the list rather than a hand-written
/// comparison chain.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritismSchedule {
    rows: Vec<FavoritismRow>,
}

impl FavoritismSchedule {
    /// Builds a schedule, validating the tier ordering invariants:
    /// thresholds strictly ascend starting from zero, and discounts never
    /// decrease as thresholds rise. A violation here is fatal for the
    /// catalog being constructed.
    pub fn new(rows: Vec<FavoritismRow>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(EconomyError::invalid_catalog(
                "favoritism schedule has no tiers",
            ));
        };
        if !first.min_cumulative_spend.is_zero() {
            return Err(EconomyError::invalid_catalog(format!(
                "base favoritism tier must start at zero spend, got {}",
                first.min_cumulative_spend
            )));
        }

        for pair in rows.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if upper.min_cumulative_spend <= lower.min_cumulative_spend {
                return Err(EconomyError::invalid_catalog(format!(
                    "favoritism thresholds must strictly ascend: {} then {}",
                    lower.min_cumulative_spend, upper.min_cumulative_spend
                )));
            }
            if upper.discount_percent < lower.discount_percent {
                return Err(EconomyError::invalid_catalog(format!(
                    "favoritism discounts must not decrease: {}% then {}%",
                    lower.discount_percent, upper.discount_percent
                )));
            }
        }

        if let Some(row) = rows.iter().find(|row| row.discount_percent > 100) {
            return Err(EconomyError::invalid_catalog(format!(
                "discount for {:?} exceeds 100%",
                row.tier
            )));
        }

        Ok(Self { rows })
    }

    pub(super) fn from_rows_unchecked(rows: Vec<FavoritismRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[FavoritismRow] {
        &self.rows
    }

    pub fn row(&self, tier: FavoritismTier) -> Option<&FavoritismRow> {
        self.rows.iter().find(|row| row.tier == tier)
    }

    /// Classifies a cumulative spend into the highest tier whose threshold
    /// it meets. A spend exactly on a threshold lands in the higher tier.
    ///
    /// Negative spend indicates a bookkeeping bug upstream and is rejected
    /// with [`EconomyError::NegativeSpend`] rather than clamped to a tier.
    pub fn classify(&self, cumulative_spend: Decimal) -> Result<&FavoritismRow> {
        if cumulative_spend.is_sign_negative() && !cumulative_spend.is_zero() {
            return Err(EconomyError::NegativeSpend {
                spend: cumulative_spend,
            });
        }

        // Thresholds ascend from zero, so every non-negative spend matches
        // at least the base row.
        self.rows
            .iter()
            .rev()
            .find(|row| cumulative_spend >= row.min_cumulative_spend)
            .ok_or_else(|| EconomyError::invalid_catalog("favoritism schedule has no tiers"))
    }
}

impl TryFrom<Vec<FavoritismRow>> for FavoritismSchedule {
    type Error = EconomyError;

    fn try_from(rows: Vec<FavoritismRow>) -> Result<Self> {
        Self::new(rows)
    }
}

impl Serialize for FavoritismSchedule {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.rows.serialize(serializer)
    }
}

// Deserialization runs the same ordering checks as `new`, so a schedule
// loaded from external config can never bypass validation.
impl<'de> Deserialize<'de> for FavoritismSchedule {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<FavoritismRow>::deserialize(deserializer)?;
        Self::new(rows).map_err(serde::de::Error::custom)
    }
}

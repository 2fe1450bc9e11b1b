//! The four payer/payee relationship layers of the platform economy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EconomyError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerKind {
    UserToAgent,
    AgentEarns,
    AgentToAi,
    AgentToHuman,
}

impl LayerKind {
    pub const ALL: [Self; 4] = [
        Self::UserToAgent,
        Self::AgentEarns,
        Self::AgentToAi,
        Self::AgentToHuman,
    ];
}

/// Qualitative grade of delivered work, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Base,
    Good,
    Excellent,
    Outstanding,
}

impl QualityLevel {
    pub const ALL: [Self; 4] = [Self::Base, Self::Good, Self::Excellent, Self::Outstanding];
}

/// Earnings multipliers keyed by quality grade.
///
/// Multipliers are at least 1 and never decrease from `base` through
/// `outstanding`; `validate` enforces this when a schedule is loaded from
/// external data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualitySchedule {
    pub base: Decimal,
    pub good: Decimal,
    pub excellent: Decimal,
    pub outstanding: Decimal,
}

impl QualitySchedule {
    pub const fn new(base: Decimal, good: Decimal, excellent: Decimal, outstanding: Decimal) -> Self {
        Self {
            base,
            good,
            excellent,
            outstanding,
        }
    }

    pub fn multiplier(&self, level: QualityLevel) -> Decimal {
        match level {
            QualityLevel::Base => self.base,
            QualityLevel::Good => self.good,
            QualityLevel::Excellent => self.excellent,
            QualityLevel::Outstanding => self.outstanding,
        }
    }

    /// Base earnings scaled by the multiplier for `level`.
    pub fn scaled(&self, amount: Decimal, level: QualityLevel) -> Decimal {
        amount * self.multiplier(level)
    }

    pub fn multipliers(&self) -> impl Iterator<Item = (QualityLevel, Decimal)> + '_ {
        QualityLevel::ALL
            .into_iter()
            .map(|level| (level, self.multiplier(level)))
    }

    pub fn validate(&self) -> Result<()> {
        let mut previous = dec!(1);
        for (level, multiplier) in self.multipliers() {
            if multiplier < previous {
                return Err(EconomyError::invalid_catalog(format!(
                    "quality multiplier for {level:?} ({multiplier}) is below {previous}"
                )));
            }
            previous = multiplier;
        }
        Ok(())
    }
}

/// Hourly rate for a third-party AI service an agent can hire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRate {
    pub id: String,
    pub name: String,
    pub cost_per_hour: Decimal,
}

impl ServiceRate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost_per_hour: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost_per_hour,
        }
    }

    pub fn cost_for(&self, hours: Decimal) -> Decimal {
        self.cost_per_hour * hours
    }
}

/// Layer-specific sub-tables. Layers without one serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerDetail {
    #[serde(rename_all = "camelCase")]
    Earnings { quality_multipliers: QualitySchedule },
    #[serde(rename_all = "camelCase")]
    Services { ai_services: Vec<ServiceRate> },
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomyLayer {
    #[serde(rename = "layerId")]
    pub kind: LayerKind,
    pub name: String,
    pub description: String,
    #[serde(rename = "extra")]
    pub detail: LayerDetail,
}

impl EconomyLayer {
    pub fn new(
        kind: LayerKind,
        name: impl Into<String>,
        description: impl Into<String>,
        detail: LayerDetail,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            detail,
        }
    }

    pub fn quality_schedule(&self) -> Option<&QualitySchedule> {
        match &self.detail {
            LayerDetail::Earnings {
                quality_multipliers,
            } => Some(quality_multipliers),
            _ => None,
        }
    }

    pub fn service_rates(&self) -> Option<&[ServiceRate]> {
        match &self.detail {
            LayerDetail::Services { ai_services } => Some(ai_services),
            _ => None,
        }
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Pro,
    Premium,
}

impl SubscriptionTier {
    pub const ALL: [Self; 3] = [Self::Free, Self::Pro, Self::Premium];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    #[serde(rename = "tierId")]
    pub tier: SubscriptionTier,
    pub display_name: String,
    pub monthly_price: Decimal,
    pub features: Vec<String>,
}

impl SubscriptionPlan {
    pub fn new(
        tier: SubscriptionTier,
        display_name: impl Into<String>,
        monthly_price: Decimal,
        features: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            tier,
            display_name: display_name.into(),
            monthly_price,
            features: features.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_free(&self) -> bool {
        self.monthly_price.is_zero()
    }
}

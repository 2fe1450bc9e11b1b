use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// AI-assisted content generation actions billable in MNEE credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CreditKind {
    ImageGeneration,
    TextGeneration,
    DesignGeneration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPrice {
    pub kind: CreditKind,
    pub unit_cost: Decimal,
    pub unit_label: String,
    pub description: String,
}

impl UnitPrice {
    pub fn new(
        kind: CreditKind,
        unit_cost: Decimal,
        unit_label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            unit_cost,
            unit_label: unit_label.into(),
            description: description.into(),
        }
    }

    /// Cost of `quantity` units at this price.
    pub fn total(&self, quantity: u32) -> Decimal {
        self.unit_cost * Decimal::from(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unit_price_total() {
        let price = UnitPrice::new(
            CreditKind::ImageGeneration,
            dec!(0.5),
            "per image",
            "AI image generation",
        );

        assert_eq!(price.total(0), dec!(0));
        assert_eq!(price.total(1), dec!(0.5));
        assert_eq!(price.total(4), dec!(2));
    }

    #[test]
    fn test_credit_kind_wire_names() {
        let json = serde_json::to_value(CreditKind::ImageGeneration).unwrap();
        assert_eq!(json, "imageGeneration");

        let json = serde_json::to_value(CreditKind::DesignGeneration).unwrap();
        assert_eq!(json, "designGeneration");
    }
}

//! Economy Core Tests
//!
//! Tests for the pricing catalog: classification boundaries and totality,
//! catalog immutability and cardinality, quote derivations, the spend
//! ledger, and the wire shapes downstream consumers serialize.
//!
//! Run: cargo nextest run --test economy_core_tests

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use yourspace_economy::{
    CreditKind, EconomyError, FavoritismTier, LayerKind, QualityLevel, SpendLedger,
    SubscriptionTier, catalog, quote,
};

// =============================================================================
// Classification
// =============================================================================

mod classification_tests {
    use super::*;

    #[test]
    fn test_classification_total_over_domain() {
        // Dense sweep across the full documented domain in quarter steps,
        // plus the far end.
        let mut spend = dec!(0);
        while spend <= dec!(2000) {
            assert!(catalog().classify_spend(spend).is_ok(), "{spend}");
            spend += dec!(0.25);
        }
        assert!(catalog().classify_spend(dec!(10_000_000)).is_ok());
    }

    #[test]
    fn test_boundary_exactness() {
        let cases = [
            (dec!(0), FavoritismTier::Regular),
            (dec!(24.99), FavoritismTier::Regular),
            (dec!(25), FavoritismTier::Patron),
            (dec!(99.99), FavoritismTier::Patron),
            (dec!(100), FavoritismTier::Supporter),
            (dec!(499.99), FavoritismTier::Supporter),
            (dec!(500), FavoritismTier::Contributor),
            (dec!(999.99), FavoritismTier::Contributor),
            (dec!(1000), FavoritismTier::PlatformBuilder),
            (dec!(1_000_000), FavoritismTier::PlatformBuilder),
        ];
        for (spend, expected) in cases {
            assert_eq!(
                catalog().classify_spend(spend).unwrap().tier,
                expected,
                "spend {spend}"
            );
        }
    }

    #[test]
    fn test_discount_monotonic_in_spend() {
        let mut previous = 0u8;
        let mut spend = dec!(0);
        while spend <= dec!(1200) {
            let discount = catalog().classify_spend(spend).unwrap().discount_percent;
            assert!(discount >= previous, "discount dropped at spend {spend}");
            previous = discount;
            spend += dec!(1);
        }
    }

    #[test]
    fn test_negative_spend_is_rejected() {
        assert!(matches!(
            catalog().classify_spend(dec!(-1)),
            Err(EconomyError::NegativeSpend { .. })
        ));
        assert!(matches!(
            catalog().classify_spend(dec!(-0.01)),
            Err(EconomyError::NegativeSpend { .. })
        ));
    }
}

// =============================================================================
// Catalog invariants
// =============================================================================

mod catalog_tests {
    use super::*;

    #[test]
    fn test_cardinalities() {
        assert_eq!(catalog().unit_prices().len(), 3);
        assert_eq!(catalog().subscription_plans().len(), 3);
        assert_eq!(catalog().economy_layers().len(), 4);
        assert_eq!(catalog().favoritism().rows().len(), 5);
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let first = serde_json::to_value(catalog()).unwrap();
        for _ in 0..10 {
            let again = serde_json::to_value(catalog()).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_subscription_prices_ascend_from_zero() {
        let plans = catalog().subscription_plans();
        assert_eq!(plans[0].tier, SubscriptionTier::Free);
        assert!(plans[0].monthly_price.is_zero());
        for pair in plans.windows(2) {
            assert!(pair[0].monthly_price <= pair[1].monthly_price);
        }
    }

    #[test]
    fn test_quality_multipliers_strictly_increase() {
        let schedule = catalog().quality_schedule().unwrap();
        let multipliers: Vec<Decimal> = schedule
            .multipliers()
            .map(|(_, multiplier)| multiplier)
            .collect();

        assert_eq!(
            multipliers,
            vec![dec!(1.0), dec!(2.0), dec!(3.5), dec!(5.94)]
        );
        for pair in multipliers.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_all_costs_non_negative() {
        for price in catalog().unit_prices() {
            assert!(!price.unit_cost.is_sign_negative());
        }
        for rate in catalog().service_rates() {
            assert!(!rate.cost_per_hour.is_sign_negative());
        }
        for row in catalog().favoritism().rows() {
            assert!(!row.min_cumulative_spend.is_sign_negative());
            assert!(row.discount_percent <= 100);
        }
    }

    #[test]
    fn test_layers_cover_all_kinds() {
        for kind in LayerKind::ALL {
            assert!(catalog().layer(kind).is_some(), "{kind:?}");
        }
    }
}

// =============================================================================
// Quotes
// =============================================================================

mod quote_tests {
    use super::*;

    #[test]
    fn test_premium_credit_discount() {
        let free = quote::credit_quote(
            catalog(),
            CreditKind::DesignGeneration,
            10,
            SubscriptionTier::Free,
        )
        .unwrap();
        let premium = quote::credit_quote(
            catalog(),
            CreditKind::DesignGeneration,
            10,
            SubscriptionTier::Premium,
        )
        .unwrap();

        assert_eq!(free.total, dec!(3));
        assert_eq!(premium.total, dec!(2.4));
    }

    #[test]
    fn test_hire_quote_with_tiers() {
        // Supporter (25% off) hiring Midjourney for 4 hours.
        let hire = quote::hire_quote(catalog(), "midjourney", dec!(4), dec!(250)).unwrap();
        assert_eq!(hire.tier, FavoritismTier::Supporter);
        assert_eq!(hire.subtotal, dec!(220));
        assert_eq!(hire.total, dec!(165));
    }

    #[test]
    fn test_earnings_scale_with_quality() {
        let base = quote::earnings(catalog(), dec!(50), QualityLevel::Base).unwrap();
        let outstanding = quote::earnings(catalog(), dec!(50), QualityLevel::Outstanding).unwrap();
        assert_eq!(base, dec!(50));
        assert_eq!(outstanding, dec!(297));
    }
}

// =============================================================================
// Spend ledger
// =============================================================================

mod ledger_tests {
    use super::*;

    #[test]
    fn test_ledger_drives_classification() {
        let ledger = SpendLedger::new();

        ledger.record("collector", dec!(20)).unwrap();
        assert_eq!(
            ledger.tier("collector", catalog()).unwrap().tier,
            FavoritismTier::Regular
        );

        ledger.record("collector", dec!(5)).unwrap();
        assert_eq!(
            ledger.tier("collector", catalog()).unwrap().tier,
            FavoritismTier::Patron
        );

        ledger.record("collector", dec!(975)).unwrap();
        assert_eq!(
            ledger.tier("collector", catalog()).unwrap().tier,
            FavoritismTier::PlatformBuilder
        );
    }

    #[test]
    fn test_ledger_concurrent_accumulation() {
        use std::thread;

        let ledger = SpendLedger::new();
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let l = ledger.clone();
                thread::spawn(move || {
                    let account = format!("user-{}", worker % 2);
                    for _ in 0..50 {
                        l.record(&account, dec!(1.5)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // 4 workers * 50 payments * 1.5 each per account.
        assert_eq!(ledger.total("user-0"), dec!(300));
        assert_eq!(ledger.total("user-1"), dec!(300));
    }
}

// =============================================================================
// Wire shapes
// =============================================================================

mod wire_tests {
    use super::*;

    fn decimal_field(value: &serde_json::Value) -> Decimal {
        value
            .as_str()
            .expect("decimal fields serialize as strings")
            .parse()
            .unwrap()
    }

    #[test]
    fn test_unit_price_shape() {
        let price = catalog().unit_price(CreditKind::ImageGeneration).unwrap();
        let json = serde_json::to_value(price).unwrap();

        assert_eq!(json["kind"], "imageGeneration");
        assert_eq!(decimal_field(&json["unitCost"]), dec!(0.5));
        assert_eq!(json["unitLabel"], "per image");
        assert_eq!(json["description"], "AI image generation");
    }

    #[test]
    fn test_subscription_plan_shape() {
        let plan = catalog().plan(SubscriptionTier::Premium).unwrap();
        let json = serde_json::to_value(plan).unwrap();

        assert_eq!(json["tierId"], "premium");
        assert_eq!(json["displayName"], "Premium");
        assert_eq!(decimal_field(&json["monthlyPrice"]), dec!(25));
        assert_eq!(json["features"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_economy_layer_shape() {
        let layer = catalog().layer(LayerKind::AgentToAi).unwrap();
        let json = serde_json::to_value(layer).unwrap();

        assert_eq!(json["layerId"], "agentToAi");
        let services = json["extra"]["aiServices"].as_array().unwrap();
        assert_eq!(services.len(), 7);
        assert_eq!(services[1]["id"], "claude");
        assert_eq!(decimal_field(&services[1]["costPerHour"]), dec!(80));

        let plain = catalog().layer(LayerKind::UserToAgent).unwrap();
        let json = serde_json::to_value(plain).unwrap();
        assert!(json["extra"].is_null());
    }

    #[test]
    fn test_favoritism_row_shape() {
        let row = catalog().classify_spend(dec!(5000)).unwrap();
        let json = serde_json::to_value(row).unwrap();

        assert_eq!(json["tierId"], "platformBuilder");
        assert_eq!(json["discountPercent"], 75);
        assert_eq!(json["waitTimeLabel"], "Instant");
        assert_eq!(decimal_field(&json["minCumulativeSpend"]), dec!(1000));
    }
}

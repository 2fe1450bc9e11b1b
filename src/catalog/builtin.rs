use rust_decimal_macros::dec;

use super::credits::{CreditKind, UnitPrice};
use super::economy::{EconomyLayer, LayerDetail, LayerKind, QualitySchedule, ServiceRate};
use super::favoritism::{FavoritismRow, FavoritismTier};
use super::subscription::{SubscriptionPlan, SubscriptionTier};

pub(super) fn unit_prices() -> Vec<UnitPrice> {
    vec![
        UnitPrice::new(
            CreditKind::ImageGeneration,
            dec!(0.5),
            "per image",
            "AI image generation",
        ),
        UnitPrice::new(
            CreditKind::TextGeneration,
            dec!(0.1),
            "per 1000 words",
            "AI text/content generation",
        ),
        UnitPrice::new(
            CreditKind::DesignGeneration,
            dec!(0.3),
            "per design",
            "AI design/layout creation",
        ),
    ]
}

pub(super) fn subscription_plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan::new(
            SubscriptionTier::Free,
            "Basic",
            dec!(0),
            ["View public content", "Basic profile", "Limited messages"],
        ),
        SubscriptionPlan::new(
            SubscriptionTier::Pro,
            "Pro",
            dec!(10),
            [
                "All Basic features",
                "Priority support",
                "Exclusive content",
                "No ads",
            ],
        ),
        SubscriptionPlan::new(
            SubscriptionTier::Premium,
            "Premium",
            dec!(25),
            [
                "All Pro features",
                "1-on-1 sessions",
                "Custom requests",
                "Early access",
            ],
        ),
    ]
}

pub(super) fn economy_layers() -> Vec<EconomyLayer> {
    vec![
        EconomyLayer::new(
            LayerKind::UserToAgent,
            "User to Agent",
            "Users pay MNEE to hire agents for tasks",
            LayerDetail::None,
        ),
        EconomyLayer::new(
            LayerKind::AgentEarns,
            "Agent Earnings",
            "Agents earn credits with quality multiplier (up to 5.94x)",
            LayerDetail::Earnings {
                quality_multipliers: QualitySchedule::new(
                    dec!(1.0),
                    dec!(2.0),
                    dec!(3.5),
                    dec!(5.94),
                ),
            },
        ),
        EconomyLayer::new(
            LayerKind::AgentToAi,
            "Agent to AI",
            "Agents can hire specialized AI services",
            LayerDetail::Services {
                ai_services: vec![
                    ServiceRate::new("minimax", "MiniMax", dec!(50)),
                    ServiceRate::new("claude", "Claude", dec!(80)),
                    ServiceRate::new("gpt4", "GPT-4", dec!(60)),
                    ServiceRate::new("dalle", "DALL-E", dec!(40)),
                    ServiceRate::new("midjourney", "Midjourney", dec!(55)),
                    ServiceRate::new("whisper", "Whisper", dec!(25)),
                    ServiceRate::new("eleven", "ElevenLabs", dec!(45)),
                ],
            },
        ),
        EconomyLayer::new(
            LayerKind::AgentToHuman,
            "Agent to Human",
            "Agents can hire humans for specialized tasks",
            LayerDetail::None,
        ),
    ]
}

pub(super) fn favoritism_rows() -> Vec<FavoritismRow> {
    vec![
        FavoritismRow::new(FavoritismTier::Regular, "Regular", 0, "4-8 hours", dec!(0)),
        FavoritismRow::new(FavoritismTier::Patron, "Patron", 10, "2-4 hours", dec!(25)),
        FavoritismRow::new(
            FavoritismTier::Supporter,
            "Supporter",
            25,
            "30 minutes",
            dec!(100),
        ),
        FavoritismRow::new(
            FavoritismTier::Contributor,
            "Contributor",
            50,
            "5-15 minutes",
            dec!(500),
        ),
        FavoritismRow::new(
            FavoritismTier::PlatformBuilder,
            "Platform Builder",
            75,
            "Instant",
            dec!(1000),
        ),
    ]
}

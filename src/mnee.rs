//! MNEE stablecoin helpers: token metadata, USD conversion, minor-unit
//! (on-chain, 18-decimal) conversion, and display formatting.
//!
//! 1 MNEE is worth 1 USD by platform convention. Everything here is pure;
//! no chain access happens in this crate.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::{EconomyError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u32,
    pub chain_id: u64,
    pub address: &'static str,
    pub explorer: &'static str,
}

/// MNEE on Ethereum mainnet.
pub const MNEE: TokenInfo = TokenInfo {
    symbol: "MNEE",
    name: "MNEE Stablecoin",
    decimals: 18,
    chain_id: 1,
    address: "0x8ccedbAe4916b79da7F3F612EfB2EB93A2bFD6cF",
    explorer: "https://etherscan.io/token/0x8ccedbAe4916b79da7F3F612EfB2EB93A2bFD6cF",
};

pub const MNEE_USD_RATE: Decimal = dec!(1);

const MINOR_UNITS_PER_MNEE: Decimal = dec!(1_000_000_000_000_000_000);

pub fn to_usd(amount: Decimal) -> Decimal {
    amount * MNEE_USD_RATE
}

/// Converts a MNEE amount to on-chain minor units (10^18 per whole token).
///
/// Fractions finer than 18 decimal places truncate toward zero. Negative
/// amounts and amounts whose minor units overflow `u128` are rejected.
pub fn to_minor_units(amount: Decimal) -> Result<u128> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EconomyError::NegativeAmount { amount });
    }

    let whole = amount
        .trunc()
        .to_u128()
        .ok_or(EconomyError::AmountOutOfRange { amount })?;
    let fraction = (amount.fract() * MINOR_UNITS_PER_MNEE)
        .trunc()
        .to_u128()
        .ok_or(EconomyError::AmountOutOfRange { amount })?;

    whole
        .checked_mul(1_000_000_000_000_000_000)
        .and_then(|units| units.checked_add(fraction))
        .ok_or(EconomyError::AmountOutOfRange { amount })
}

/// Converts on-chain minor units back to a MNEE amount with 18 decimal
/// places. Values beyond `Decimal` range are rejected.
pub fn from_minor_units(units: u128) -> Result<Decimal> {
    let signed = i128::try_from(units).map_err(|_| EconomyError::MinorUnitsOutOfRange { units })?;
    Decimal::try_from_i128_with_scale(signed, MNEE.decimals)
        .map_err(|_| EconomyError::MinorUnitsOutOfRange { units })
}

/// Formats an amount with thousands separators and two decimal places,
/// e.g. `1,234.50`.
pub fn format_mnee(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    let (integral, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let (sign, digits) = match integral.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integral),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{fraction}")
}

/// `"{amount} MNEE (~${usd} USD)"` display string.
pub fn format_with_usd(amount: Decimal) -> String {
    format!(
        "{amount} MNEE (~${usd:.2} USD)",
        usd = to_usd(amount).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Shortens a hex address to `0x8cce...D6cF` form. Inputs too short to
/// shorten come back unchanged.
pub fn format_address(address: &str) -> String {
    if address.len() < 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Hosted swap link for paying `recipient`.
pub fn payment_link(recipient: &str, amount: Decimal) -> String {
    format!("https://swap-user.mnee.net/swap?recipient={recipient}&amount={amount}")
}

use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum EconomyError {
    #[error("cumulative spend cannot be negative: {spend}")]
    NegativeSpend { spend: Decimal },

    #[error("amount cannot be negative: {amount}")]
    NegativeAmount { amount: Decimal },

    #[error("invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("unknown AI service: {id}")]
    UnknownService { id: String },

    #[error("amount out of range for minor-unit conversion: {amount}")]
    AmountOutOfRange { amount: Decimal },

    #[error("minor-unit value exceeds representable range: {units}")]
    MinorUnitsOutOfRange { units: u128 },
}

impl EconomyError {
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EconomyError>;

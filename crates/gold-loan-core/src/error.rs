use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoldLoanError {
    #[error("Unknown purity grade: '{0}' (expected one of 24K, 22K, 18K, 14K)")]
    UnknownPurityGrade(String),

    #[error("Invalid spot price {rate}: {reason}")]
    InvalidSpotPrice { rate: Decimal, reason: String },

    #[error("Spot price unavailable: {0}")]
    PriceUnavailable(String),

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for GoldLoanError {
    fn from(e: serde_json::Error) -> Self {
        GoldLoanError::SerializationError(e.to_string())
    }
}

impl GoldLoanError {
    /// Arithmetic on `field` left the 128-bit decimal range.
    pub(crate) fn overflow(field: &str) -> Self {
        GoldLoanError::InvalidInput {
            field: field.into(),
            reason: "Value too large; arithmetic overflowed.".into(),
        }
    }
}

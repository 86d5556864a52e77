pub mod collateral;
pub mod error;
pub mod pricing;
pub mod risk;
pub mod types;

pub use error::GoldLoanError;
pub use types::*;

/// Standard result type for all gold-loan operations
pub type GoldLoanResult<T> = Result<T, GoldLoanError>;

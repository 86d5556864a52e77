pub mod price;
pub mod purity;
pub mod valuation;

pub use price::{FixedSpotPrice, SpotPriceProvider, SpotQuote};
pub use purity::{purity_multiplier, PurityGrade};
pub use valuation::{value_collateral, CollateralProfile, CollateralValuation};

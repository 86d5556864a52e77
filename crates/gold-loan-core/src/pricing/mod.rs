pub mod bank;
pub mod engine;
pub mod loss;
pub mod sizing;
pub mod waterfall;

pub use bank::BankParameters;
pub use engine::{price, price_loan, price_with_config, price_with_provider, PricingRequest, PricingResult};
pub use waterfall::{build_waterfall, RateComponent, RateComponentKind, RateWaterfall};

pub mod args;
pub mod collateral;
pub mod pricing;
pub mod risk;

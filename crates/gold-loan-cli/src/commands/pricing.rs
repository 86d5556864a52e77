use clap::Args;
use serde_json::Value;

use gold_loan_core::pricing::{engine, PricingRequest};
use gold_loan_core::risk::RiskModelConfig;

use super::args::{BankArgs, BorrowerArgs, CollateralArgs};
use crate::input;

/// Arguments for full loan pricing
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PriceArgs {
    /// Path to a JSON or YAML pricing request (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub borrower: BorrowerArgs,

    #[command(flatten)]
    pub collateral: CollateralArgs,

    #[command(flatten)]
    pub bank: BankArgs,
}

pub fn run_price(
    args: PriceArgs,
    model: Option<RiskModelConfig>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut request: PricingRequest = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PricingRequest {
            collateral: args.collateral.to_profile()?,
            spot_rate: args.collateral.spot_rate,
            borrower: args.borrower.into_profile()?,
            bank: args.bank.into_parameters(),
            model: None,
        }
    };

    // --model-config wins over a model embedded in the request document
    if model.is_some() {
        request.model = model;
    }

    let result = engine::price_loan(&request)?;
    Ok(serde_json::to_value(result)?)
}

use clap::Args;
use serde_json::Value;

use gold_loan_core::collateral::purity;
use gold_loan_core::collateral::valuation::{self, CollateralInput};

use super::args::CollateralArgs;
use crate::input;

/// Arguments for stand-alone collateral valuation
#[derive(Args)]
pub struct CollateralValueArgs {
    /// Path to a JSON or YAML collateral document
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub collateral: CollateralArgs,
}

pub fn run_collateral(args: CollateralValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let collateral_input: CollateralInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let profile = args.collateral.to_profile()?;
        CollateralInput {
            gold_weight: profile.gold_weight,
            gold_purity: profile.gold_purity,
            spot_rate: args.collateral.spot_rate,
        }
    };

    let result = valuation::calculate_collateral_value(&collateral_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_purity_table() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(purity::purity_table())?)
}

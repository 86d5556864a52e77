use clap::Args;
use serde_json::Value;

use gold_loan_core::risk::{self, BorrowerProfile, RiskModelConfig};

use super::args::BorrowerArgs;
use crate::input;

/// Arguments for the borrower scorecards (PD, LTV, LGD)
#[derive(Args)]
pub struct RiskArgs {
    /// Path to a JSON or YAML borrower profile
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub borrower: BorrowerArgs,
}

pub fn run_risk(
    args: RiskArgs,
    model: Option<RiskModelConfig>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: BorrowerProfile = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        args.borrower.into_profile()?
    };

    let config = model.unwrap_or_default();
    let result = risk::assess_risk(&profile, &config)?;
    Ok(serde_json::to_value(result)?)
}

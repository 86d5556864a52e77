//! Borrower risk models: PD scorecard, LTV policy, and the LGD constant.

pub mod config;
pub mod lgd;
pub mod ltv;
pub mod pd;
pub mod profile;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

use crate::{types::*, GoldLoanResult};

pub use config::RiskModelConfig;
pub use lgd::{loss_given_default, recovery_rate, GOLD_LOAN_LGD};
pub use ltv::{estimate_ltv, LtvEstimate};
pub use pd::{estimate_pd, PdEstimate};
pub use profile::BorrowerProfile;

/// Borrower attribute a scorecard term is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    CreditScore,
    Income,
    WorkExperience,
    Age,
    DebtToIncome,
    Tenure,
    ExistingCustomer,
    Agriculture,
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskFactor::CreditScore => "Credit score",
            RiskFactor::Income => "Monthly income",
            RiskFactor::WorkExperience => "Work experience",
            RiskFactor::Age => "Age",
            RiskFactor::DebtToIncome => "Debt-to-income",
            RiskFactor::Tenure => "Tenure",
            RiskFactor::ExistingCustomer => "Existing customer",
            RiskFactor::Agriculture => "Agriculture sector",
        };
        write!(f, "{}", s)
    }
}

/// Signed contribution of one factor to a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: RiskFactor,
    pub value: Decimal,
}

impl FactorContribution {
    pub fn new(factor: RiskFactor, value: Decimal) -> Self {
        Self { factor, value }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub model_version: String,
    pub pd: PdEstimate,
    pub ltv: LtvEstimate,
    pub lgd: Rate,
}

/// Run both scorecards and attach the LGD for one borrower.
pub fn assess_risk(
    profile: &BorrowerProfile,
    config: &RiskModelConfig,
) -> GoldLoanResult<ComputationOutput<RiskAssessment>> {
    let start = Instant::now();
    config.validate()?;
    let warnings = profile.range_warnings();

    let assessment = RiskAssessment {
        model_version: config.version.clone(),
        pd: estimate_pd(profile, &config.pd),
        ltv: estimate_ltv(profile, &config.ltv),
        lgd: loss_given_default(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "pd_model": "additive score -> logistic -> cap",
        "pd_cap": config.pd.pd_cap.to_string(),
        "ltv_bounds": [config.ltv.ltv_floor.to_string(), config.ltv.ltv_cap.to_string()],
        "lgd": "policy constant (80% auction recovery)",
    });

    Ok(with_metadata(
        "Heuristic gold-loan borrower scorecard",
        &assumptions,
        warnings,
        elapsed,
        assessment,
    ))
}

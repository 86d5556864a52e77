//! Flag groups shared by several commands.

use clap::Args;
use rust_decimal::Decimal;

use gold_loan_core::collateral::{CollateralProfile, PurityGrade};
use gold_loan_core::pricing::BankParameters;
use gold_loan_core::risk::BorrowerProfile;

/// Borrower profile flags
#[derive(Args)]
pub struct BorrowerArgs {
    /// Customer reference echoed in the output
    #[arg(long)]
    pub customer_id: Option<String>,

    /// CIBIL score (300-900)
    #[arg(long)]
    pub cibil: Option<u32>,

    /// Monthly income
    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Work experience in years
    #[arg(long)]
    pub work_exp: Option<u32>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Debt-to-income ratio as a decimal (0.3 = 30%)
    #[arg(long)]
    pub dti: Option<Decimal>,

    /// Requested tenure in months
    #[arg(long)]
    pub tenure: Option<u32>,

    /// Borrower already banks with us
    #[arg(long)]
    pub existing_customer: bool,

    /// Borrower works in the agriculture sector
    #[arg(long)]
    pub agriculture: bool,
}

impl BorrowerArgs {
    pub fn into_profile(self) -> Result<BorrowerProfile, Box<dyn std::error::Error>> {
        Ok(BorrowerProfile {
            customer_id: self.customer_id,
            cibil: self.cibil.ok_or("--cibil is required (or provide --input)")?,
            monthly_income: self
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
            work_exp: self.work_exp.ok_or("--work-exp is required (or provide --input)")?,
            age: self.age.ok_or("--age is required (or provide --input)")?,
            dti: self.dti.ok_or("--dti is required (or provide --input)")?,
            tenure: self.tenure.ok_or("--tenure is required (or provide --input)")?,
            existing_customer: self.existing_customer,
            agriculture: self.agriculture,
        })
    }
}

/// Pledged gold flags
#[derive(Args)]
pub struct CollateralArgs {
    /// Gold weight in grams
    #[arg(long)]
    pub gold_weight: Option<Decimal>,

    /// Purity grade: 24K, 22K, 18K or 14K
    #[arg(long)]
    pub gold_purity: Option<String>,

    /// Spot rate per gram of pure gold (defaults to the fixed reference rate)
    #[arg(long)]
    pub spot_rate: Option<Decimal>,
}

impl CollateralArgs {
    pub fn to_profile(&self) -> Result<CollateralProfile, Box<dyn std::error::Error>> {
        let purity = self
            .gold_purity
            .as_deref()
            .ok_or("--gold-purity is required (or provide --input)")?;
        Ok(CollateralProfile {
            gold_weight: self
                .gold_weight
                .ok_or("--gold-weight is required (or provide --input)")?,
            gold_purity: purity.parse::<PurityGrade>()?,
        })
    }
}

/// Bank parameter flags; anything omitted keeps the house default
#[derive(Args)]
pub struct BankArgs {
    #[arg(long)]
    pub risk_free_rate: Option<Decimal>,

    #[arg(long)]
    pub funding_spread: Option<Decimal>,

    #[arg(long)]
    pub capital_requirement: Option<Decimal>,

    /// Cost-of-capital multiplier (0-2)
    #[arg(long)]
    pub cost_capital: Option<Decimal>,

    #[arg(long)]
    pub roe_target: Option<Decimal>,

    #[arg(long)]
    pub operating_cost_rate: Option<Decimal>,

    #[arg(long)]
    pub profit_margin: Option<Decimal>,
}

impl BankArgs {
    pub fn into_parameters(self) -> BankParameters {
        let defaults = BankParameters::default();
        BankParameters {
            risk_free_rate: self.risk_free_rate.unwrap_or(defaults.risk_free_rate),
            funding_spread: self.funding_spread.unwrap_or(defaults.funding_spread),
            capital_requirement: self
                .capital_requirement
                .unwrap_or(defaults.capital_requirement),
            cost_capital: self.cost_capital.unwrap_or(defaults.cost_capital),
            roe_target: self.roe_target.unwrap_or(defaults.roe_target),
            operating_cost_rate: self
                .operating_cost_rate
                .unwrap_or(defaults.operating_cost_rate),
            profit_margin: self.profit_margin.unwrap_or(defaults.profit_margin),
        }
    }
}

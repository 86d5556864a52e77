//! Coefficient tables for the heuristic PD and LTV scorecards.
//!
//! The tables hold numbers only. How they are accumulated lives in
//! [`super::pd`] and [`super::ltv`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::GoldLoanError;
use crate::types::{Money, Rate};
use crate::GoldLoanResult;

pub const DEFAULT_MODEL_VERSION: &str = "gold-heuristic-v1";

/// One step of a tiered rule: applies when the value is strictly below `below`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub below: Decimal,
    pub contribution: Decimal,
}

/// Step function evaluated top to bottom; the first tier that matches wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredRule {
    pub tiers: Vec<Tier>,
    /// Contribution when no tier matches.
    pub otherwise: Decimal,
}

impl TieredRule {
    pub fn apply(&self, value: Decimal) -> Decimal {
        self.tiers
            .iter()
            .find(|t| value < t.below)
            .map_or(self.otherwise, |t| t.contribution)
    }
}

/// Penalty applied when the borrower's age falls outside `[min_age, max_age]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub min_age: u32,
    pub max_age: u32,
    pub penalty: Decimal,
}

impl AgeBand {
    pub fn matches(&self, age: u32) -> bool {
        age < self.min_age || age > self.max_age
    }
}

/// Only the first matching band contributes, so the widest band goes first.
pub fn age_band_penalty(bands: &[AgeBand], age: u32) -> Decimal {
    bands
        .iter()
        .find(|b| b.matches(age))
        .map_or(Decimal::ZERO, |b| b.penalty)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdCoefficients {
    /// Score at which the credit-score term vanishes.
    pub cibil_anchor: Decimal,
    pub cibil_weight: Decimal,
    pub income: TieredRule,
    pub work_experience: TieredRule,
    pub age_bands: Vec<AgeBand>,
    pub dti_weight: Decimal,
    pub tenure_horizon_months: Decimal,
    pub tenure_weight: Decimal,
    pub existing_customer: Decimal,
    pub agriculture: Decimal,
    /// Hard ceiling on the reported PD.
    pub pd_cap: Rate,
}

impl Default for PdCoefficients {
    fn default() -> Self {
        Self {
            cibil_anchor: dec!(850),
            cibil_weight: dec!(0.5),
            income: TieredRule {
                tiers: vec![
                    Tier { below: dec!(25_000), contribution: dec!(0.30) },
                    Tier { below: dec!(50_000), contribution: dec!(0.20) },
                ],
                otherwise: dec!(0.10),
            },
            work_experience: TieredRule {
                tiers: vec![
                    Tier { below: dec!(2), contribution: dec!(0.20) },
                    Tier { below: dec!(5), contribution: dec!(0.10) },
                ],
                otherwise: Decimal::ZERO,
            },
            age_bands: vec![
                AgeBand { min_age: 25, max_age: 60, penalty: dec!(0.15) },
                AgeBand { min_age: 30, max_age: 55, penalty: dec!(0.10) },
            ],
            dti_weight: dec!(0.5),
            tenure_horizon_months: dec!(120),
            tenure_weight: dec!(0.1),
            existing_customer: dec!(-0.10),
            agriculture: dec!(0.15),
            pd_cap: dec!(0.30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LtvCoefficients {
    pub base_ltv: Rate,
    /// Score at which the credit-score adjustment is zero.
    pub cibil_pivot: Decimal,
    pub cibil_span: Decimal,
    pub cibil_weight: Decimal,
    pub high_income_above: Money,
    pub high_income: Decimal,
    pub low_income_below: Money,
    pub low_income: Decimal,
    pub work_exp_above: u32,
    pub work_experience: Decimal,
    pub prime_age_min: u32,
    pub prime_age_max: u32,
    pub prime_age: Decimal,
    pub existing_customer: Decimal,
    pub agriculture: Decimal,
    pub ltv_floor: Rate,
    pub ltv_cap: Rate,
}

impl Default for LtvCoefficients {
    fn default() -> Self {
        Self {
            base_ltv: dec!(0.70),
            cibil_pivot: dec!(600),
            cibil_span: dec!(250),
            cibil_weight: dec!(0.1),
            high_income_above: dec!(50_000),
            high_income: dec!(0.05),
            low_income_below: dec!(25_000),
            low_income: dec!(-0.05),
            work_exp_above: 5,
            work_experience: dec!(0.03),
            prime_age_min: 30,
            prime_age_max: 50,
            prime_age: dec!(0.02),
            existing_customer: dec!(0.05),
            agriculture: dec!(-0.03),
            ltv_floor: dec!(0.60),
            ltv_cap: dec!(0.85),
        }
    }
}

/// Versioned bundle of every scoring coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskModelConfig {
    pub version: String,
    #[serde(default)]
    pub pd: PdCoefficients,
    #[serde(default)]
    pub ltv: LtvCoefficients,
}

impl Default for RiskModelConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_MODEL_VERSION.to_string(),
            pd: PdCoefficients::default(),
            ltv: LtvCoefficients::default(),
        }
    }
}

impl RiskModelConfig {
    /// Reject tables the estimators cannot evaluate sensibly.
    pub fn validate(&self) -> GoldLoanResult<()> {
        if self.pd.cibil_anchor.is_zero() {
            return Err(invalid("pd.cibil_anchor", "Must be non-zero."));
        }
        if self.pd.tenure_horizon_months.is_zero() {
            return Err(invalid("pd.tenure_horizon_months", "Must be non-zero."));
        }
        if self.pd.pd_cap < Decimal::ZERO || self.pd.pd_cap > Decimal::ONE {
            return Err(invalid("pd.pd_cap", "Must lie within 0-1."));
        }
        if self.ltv.cibil_span.is_zero() {
            return Err(invalid("ltv.cibil_span", "Must be non-zero."));
        }
        if self.ltv.ltv_floor > self.ltv.ltv_cap {
            return Err(invalid("ltv.ltv_floor", "Floor must not exceed the cap."));
        }
        if self.ltv.ltv_floor < Decimal::ZERO || self.ltv.ltv_cap > Decimal::ONE {
            return Err(invalid("ltv", "Floor and cap must lie within 0-1."));
        }
        if self.ltv.prime_age_min > self.ltv.prime_age_max {
            return Err(invalid("ltv.prime_age_min", "Must not exceed prime_age_max."));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> GoldLoanError {
    GoldLoanError::InvalidInput {
        field: field.into(),
        reason: reason.into(),
    }
}

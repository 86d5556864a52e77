//! Heuristic probability-of-default scorecard.
//!
//! Additive risk score over the borrower profile, squashed through the
//! logistic function and capped. Gold loans are low-severity, so the reported
//! PD never exceeds the cap however adverse the profile is.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use super::config::{age_band_penalty, PdCoefficients};
use super::profile::BorrowerProfile;
use super::{FactorContribution, RiskFactor};
use crate::types::Rate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdEstimate {
    /// Unbounded accumulated risk score.
    pub score: Decimal,
    pub contributions: Vec<FactorContribution>,
    /// Logistic transform of the score before the cap.
    pub uncapped_pd: Rate,
    pub pd: Rate,
    pub capped: bool,
}

/// Score a borrower and derive the capped PD.
pub fn estimate_pd(profile: &BorrowerProfile, coeffs: &PdCoefficients) -> PdEstimate {
    let cibil = Decimal::from(profile.cibil);
    let tenure = Decimal::from(profile.tenure);

    let credit_score = ratio(coeffs.cibil_anchor - cibil, coeffs.cibil_anchor) * coeffs.cibil_weight;
    let tenure_term = ratio(tenure, coeffs.tenure_horizon_months) * coeffs.tenure_weight;

    let contributions = vec![
        FactorContribution::new(RiskFactor::CreditScore, credit_score),
        FactorContribution::new(RiskFactor::Income, coeffs.income.apply(profile.monthly_income)),
        FactorContribution::new(
            RiskFactor::WorkExperience,
            coeffs.work_experience.apply(Decimal::from(profile.work_exp)),
        ),
        FactorContribution::new(RiskFactor::Age, age_band_penalty(&coeffs.age_bands, profile.age)),
        FactorContribution::new(RiskFactor::DebtToIncome, profile.dti * coeffs.dti_weight),
        FactorContribution::new(RiskFactor::Tenure, tenure_term),
        FactorContribution::new(
            RiskFactor::ExistingCustomer,
            flag(profile.existing_customer, coeffs.existing_customer),
        ),
        FactorContribution::new(RiskFactor::Agriculture, flag(profile.agriculture, coeffs.agriculture)),
    ];

    let score: Decimal = contributions.iter().map(|c| c.value).sum();
    let uncapped_pd = logistic(score);
    let capped = uncapped_pd > coeffs.pd_cap;
    let pd = uncapped_pd.min(coeffs.pd_cap);

    PdEstimate {
        score,
        contributions,
        uncapped_pd,
        pd,
        capped,
    }
}

/// 1 / (1 + e^-x), saturating to 0 or 1 where the exponential overflows.
pub fn logistic(x: Decimal) -> Decimal {
    if x.is_sign_negative() {
        match (-x).checked_exp() {
            Some(e) => Decimal::ONE / (Decimal::ONE + e),
            None => Decimal::ZERO,
        }
    } else {
        match x.checked_exp() {
            Some(e) => Decimal::ONE - Decimal::ONE / (Decimal::ONE + e),
            None => Decimal::ONE,
        }
    }
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

fn flag(set: bool, contribution: Decimal) -> Decimal {
    if set {
        contribution
    } else {
        Decimal::ZERO
    }
}

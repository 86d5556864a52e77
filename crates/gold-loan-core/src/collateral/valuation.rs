use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::price::{ensure_positive, DEFAULT_SPOT_RATE};
use super::purity::{PurityGrade, PURITY_TABLE_VERSION};
use crate::{types::*, GoldLoanError, GoldLoanResult};

/// Pledged gold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollateralProfile {
    pub gold_weight: Grams,
    pub gold_purity: PurityGrade,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollateralValuation {
    pub gold_weight: Grams,
    pub gold_purity: PurityGrade,
    pub purity_multiplier: Decimal,
    pub spot_rate: Money,
    /// Weight of pure gold contained in the pledge.
    pub fine_gold_grams: Grams,
    pub collateral_value: Money,
}

/// Request document for a stand-alone valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollateralInput {
    pub gold_weight: Grams,
    pub gold_purity: PurityGrade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_rate: Option<Money>,
}

/// collateral_value = weight × spot_rate × fineness
pub fn value_collateral(
    collateral: &CollateralProfile,
    spot_rate: Money,
) -> GoldLoanResult<CollateralValuation> {
    let purity_multiplier = collateral.gold_purity.fineness();
    let fine_gold_grams = collateral
        .gold_weight
        .checked_mul(purity_multiplier)
        .ok_or_else(|| GoldLoanError::overflow("gold_weight"))?;
    let collateral_value = collateral
        .gold_weight
        .checked_mul(spot_rate)
        .and_then(|v| v.checked_mul(purity_multiplier))
        .ok_or_else(|| GoldLoanError::overflow("gold_weight"))?;

    Ok(CollateralValuation {
        gold_weight: collateral.gold_weight,
        gold_purity: collateral.gold_purity,
        purity_multiplier,
        spot_rate,
        fine_gold_grams,
        collateral_value,
    })
}

/// Value collateral on its own, outside a full pricing run.
pub fn calculate_collateral_value(
    input: &CollateralInput,
) -> GoldLoanResult<ComputationOutput<CollateralValuation>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let spot_rate = input.spot_rate.unwrap_or(DEFAULT_SPOT_RATE);
    ensure_positive(spot_rate)?;
    if input.spot_rate.is_none() {
        warnings.push(format!("No spot rate supplied; using fixed reference rate {spot_rate}/g."));
    }
    if input.gold_weight < Decimal::ZERO {
        warnings.push("Gold weight is negative; valuation is not meaningful.".into());
    }

    let collateral = CollateralProfile {
        gold_weight: input.gold_weight,
        gold_purity: input.gold_purity,
    };
    let valuation = value_collateral(&collateral, spot_rate)?;

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "purity_table_version": PURITY_TABLE_VERSION,
        "spot_rate_basis": "currency per gram of pure gold",
    });

    Ok(with_metadata(
        "Gold collateral valuation (weight x spot x fineness)",
        &assumptions,
        warnings,
        elapsed,
        valuation,
    ))
}

//! Single entry point for pricing one gold loan.
//!
//! Data flows one way: collateral value, then PD / LTV / LGD, then loan size,
//! then loss and capital charge, then the rate waterfall.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use super::bank::BankParameters;
use super::loss::{capital_charge, expected_loss};
use super::sizing::size_loan;
use super::waterfall::{build_waterfall, RateComponent, WaterfallInputs};
use crate::collateral::price::{ensure_positive, resolve_spot_rate, SpotPriceProvider};
use crate::collateral::purity::{PurityGrade, PURITY_TABLE_VERSION};
use crate::collateral::{value_collateral, CollateralProfile, FixedSpotPrice};
use crate::risk::{
    estimate_ltv, estimate_pd, loss_given_default, recovery_rate, BorrowerProfile, LtvEstimate,
    PdEstimate, RiskModelConfig,
};
use crate::{types::*, GoldLoanResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub model_version: String,

    // Collateral
    pub spot_rate: Money,
    pub gold_weight: Grams,
    pub gold_purity: PurityGrade,
    pub purity_multiplier: Decimal,
    pub collateral_value: Money,

    // Risk
    pub ltv: Rate,
    pub pd: Rate,
    pub lgd: Rate,

    // Loan and loss
    pub loan_amount: Money,
    pub expected_loss: Money,
    pub expected_loss_rate: Rate,
    pub amount_capital: Money,
    pub capital_charge: Money,
    pub capital_charge_rate: Rate,

    // Rate build-up
    pub cost_of_funds: Rate,
    pub operating_cost_rate: Rate,
    pub profit_margin: Rate,
    pub break_even_rate: Rate,
    pub final_rate: Rate,
    pub rate_components: Vec<RateComponent>,

    /// Carried through from the bank parameters; not priced in.
    pub roe_target: Rate,

    pub pd_breakdown: PdEstimate,
    pub ltv_breakdown: LtvEstimate,
}

/// Price a loan with the default scorecard coefficients.
pub fn price(
    borrower: &BorrowerProfile,
    collateral: &CollateralProfile,
    bank: &BankParameters,
    spot_rate: Money,
) -> GoldLoanResult<PricingResult> {
    price_with_config(borrower, collateral, bank, spot_rate, &RiskModelConfig::default())
}

pub fn price_with_config(
    borrower: &BorrowerProfile,
    collateral: &CollateralProfile,
    bank: &BankParameters,
    spot_rate: Money,
    config: &RiskModelConfig,
) -> GoldLoanResult<PricingResult> {
    ensure_positive(spot_rate)?;

    let valuation = value_collateral(collateral, spot_rate)?;
    debug!(
        collateral_value = %valuation.collateral_value,
        purity = %collateral.gold_purity,
        "valued collateral"
    );

    let pd = estimate_pd(borrower, &config.pd);
    let ltv = estimate_ltv(borrower, &config.ltv);
    let lgd = loss_given_default();
    debug!(pd = %pd.pd, ltv = %ltv.ltv, lgd = %lgd, score = %pd.score, "scored borrower");

    let loan_amount = size_loan(ltv.ltv, valuation.collateral_value)?;
    let loss = expected_loss(pd.pd, lgd, loan_amount)?;
    let capital = capital_charge(loan_amount, bank.capital_requirement, bank.cost_capital)?;
    debug!(
        loan_amount = %loan_amount,
        expected_loss = %loss.expected_loss,
        capital_charge = %capital.capital_charge,
        "sized loan"
    );

    let waterfall = build_waterfall(&WaterfallInputs {
        risk_free_rate: bank.risk_free_rate,
        funding_spread: bank.funding_spread,
        expected_loss_rate: loss.expected_loss_rate,
        capital_charge_rate: capital.capital_charge_rate,
        operating_cost_rate: bank.operating_cost_rate,
        profit_margin: bank.profit_margin,
    })?;
    debug!(
        break_even_rate = %waterfall.break_even_rate,
        final_rate = %waterfall.final_rate,
        "built rate waterfall"
    );

    Ok(PricingResult {
        customer_id: borrower.customer_id.clone(),
        model_version: config.version.clone(),
        spot_rate,
        gold_weight: valuation.gold_weight,
        gold_purity: valuation.gold_purity,
        purity_multiplier: valuation.purity_multiplier,
        collateral_value: valuation.collateral_value,
        ltv: ltv.ltv,
        pd: pd.pd,
        lgd,
        loan_amount,
        expected_loss: loss.expected_loss,
        expected_loss_rate: loss.expected_loss_rate,
        amount_capital: capital.amount_capital,
        capital_charge: capital.capital_charge,
        capital_charge_rate: capital.capital_charge_rate,
        cost_of_funds: waterfall.cost_of_funds,
        operating_cost_rate: bank.operating_cost_rate,
        profit_margin: bank.profit_margin,
        break_even_rate: waterfall.break_even_rate,
        final_rate: waterfall.final_rate,
        rate_components: waterfall.components,
        roe_target: bank.roe_target,
        pd_breakdown: pd,
        ltv_breakdown: ltv,
    })
}

/// Fetch the spot quote first, then price.
pub fn price_with_provider(
    borrower: &BorrowerProfile,
    collateral: &CollateralProfile,
    bank: &BankParameters,
    provider: &dyn SpotPriceProvider,
) -> GoldLoanResult<PricingResult> {
    let quote = resolve_spot_rate(provider)?;
    debug!(rate = %quote.rate_per_gram, source = %quote.source, "resolved spot quote");
    price(borrower, collateral, bank, quote.rate_per_gram)
}

/// One self-contained pricing request, as received from a front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRequest {
    pub borrower: BorrowerProfile,
    pub collateral: CollateralProfile,
    #[serde(default)]
    pub bank: BankParameters,
    /// Currency per gram of pure gold. Falls back to the fixed reference rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_rate: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<RiskModelConfig>,
}

/// Price a request and wrap the result in the standard envelope.
pub fn price_loan(request: &PricingRequest) -> GoldLoanResult<ComputationOutput<PricingResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let default_model = RiskModelConfig::default();
    let config = request.model.as_ref().unwrap_or(&default_model);
    config.validate()?;

    let spot_rate = match request.spot_rate {
        Some(rate) => rate,
        None => {
            let quote = resolve_spot_rate(&FixedSpotPrice::default())?;
            warnings.push(format!(
                "No spot rate supplied; using fixed reference rate {}/g.",
                quote.rate_per_gram
            ));
            quote.rate_per_gram
        }
    };

    warnings.extend(request.borrower.range_warnings());
    warnings.extend(request.bank.range_warnings());
    if request.collateral.gold_weight < Decimal::ZERO {
        warnings.push(format!(
            "gold_weight {} is negative.",
            request.collateral.gold_weight
        ));
    }
    for w in &warnings {
        warn!("{w}");
    }

    let result = price_with_config(
        &request.borrower,
        &request.collateral,
        &request.bank,
        spot_rate,
        config,
    )?;

    if result.loan_amount.is_zero() {
        warnings.push("Loan amount is zero; loss and capital-charge rates set to zero.".into());
    }
    if result.pd_breakdown.capped {
        warnings.push(format!(
            "Logistic PD {} exceeds the policy cap; reported PD is {}.",
            result.pd_breakdown.uncapped_pd.round_dp(4),
            result.pd
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "model_version": config.version,
        "purity_table_version": PURITY_TABLE_VERSION,
        "lgd": "policy constant (80% auction recovery)",
        "recovery_rate": recovery_rate(),
        "rate_basis": "annual, decimal fractions",
        "roe_target": "carried, not priced",
    });

    Ok(with_metadata(
        "Gold loan risk-based pricing (collateral -> PD/LTV/LGD -> EL -> rate waterfall)",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

use napi::Result as NapiResult;
use napi_derive::napi;

use gold_loan_core::collateral::{purity, valuation};
use gold_loan_core::pricing::engine;
use gold_loan_core::risk;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[napi]
pub fn price_gold_loan(input_json: String) -> NapiResult<String> {
    let input: engine::PricingRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = engine::price_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Risk
// ---------------------------------------------------------------------------

/// Expects `{ "borrower": {...}, "model": {...}? }`.
#[napi]
pub fn assess_risk(input_json: String) -> NapiResult<String> {
    #[derive(serde::Deserialize)]
    struct RiskRequest {
        borrower: risk::BorrowerProfile,
        #[serde(default)]
        model: Option<risk::RiskModelConfig>,
    }

    let input: RiskRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = input.model.unwrap_or_default();
    let output = risk::assess_risk(&input.borrower, &config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Collateral
// ---------------------------------------------------------------------------

#[napi]
pub fn value_collateral(input_json: String) -> NapiResult<String> {
    let input: valuation::CollateralInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = valuation::calculate_collateral_value(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn purity_table() -> NapiResult<String> {
    serde_json::to_string(&purity::purity_table()).map_err(to_napi_error)
}

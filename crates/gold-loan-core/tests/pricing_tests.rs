use gold_loan_core::collateral::{CollateralProfile, FixedSpotPrice, PurityGrade};
use gold_loan_core::pricing::{
    engine, price, price_loan, price_with_provider, BankParameters, PricingRequest,
    RateComponentKind,
};
use gold_loan_core::risk::BorrowerProfile;
use gold_loan_core::GoldLoanError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn approx_eq(a: Decimal, b: Decimal, eps: Decimal) -> bool {
    (a - b).abs() < eps
}

fn reference_borrower() -> BorrowerProfile {
    BorrowerProfile {
        customer_id: Some("CUST12345".into()),
        cibil: 750,
        monthly_income: dec!(50_000),
        work_exp: 5,
        age: 35,
        dti: dec!(0.3),
        tenure: 12,
        existing_customer: true,
        agriculture: false,
    }
}

fn reference_pledge() -> CollateralProfile {
    CollateralProfile {
        gold_weight: dec!(50),
        gold_purity: PurityGrade::K22,
    }
}

fn reference_bank() -> BankParameters {
    BankParameters {
        risk_free_rate: dec!(0.07),
        funding_spread: dec!(0.015),
        capital_requirement: dec!(0.01),
        cost_capital: dec!(1.0),
        roe_target: dec!(0.15),
        operating_cost_rate: dec!(0.015),
        profit_margin: dec!(0.025),
    }
}

// ===========================================================================
// End-to-end scenario
// ===========================================================================

#[test]
fn test_reference_scenario_end_to_end() {
    let r = price(
        &reference_borrower(),
        &reference_pledge(),
        &reference_bank(),
        dec!(5832.50),
    )
    .unwrap();

    // 50 × 5832.50 × 0.916
    assert_eq!(r.collateral_value, dec!(267250.90));
    // 0.70 + 0.06 + 0.02 + 0.05
    assert_eq!(r.ltv, dec!(0.83));
    assert!(approx_eq(r.loan_amount, dec!(221818.25), dec!(0.01)));
    assert_eq!(r.lgd, dec!(0.20));

    // Logistic score ≈ 0.55 so the cap binds.
    assert_eq!(r.pd, dec!(0.30));
    assert_eq!(r.expected_loss, r.pd * r.lgd * r.loan_amount);
    assert_eq!(r.expected_loss_rate, dec!(0.06));
    assert_eq!(r.capital_charge_rate, dec!(0.01));

    assert_eq!(r.cost_of_funds, dec!(0.085));
    assert_eq!(r.break_even_rate, dec!(0.17));
    let expected_final =
        dec!(0.07) + dec!(0.015) + r.expected_loss_rate + r.capital_charge_rate + dec!(0.015) + dec!(0.025);
    assert_eq!(r.final_rate, expected_final);
    assert_eq!(r.final_rate, dec!(0.195));
}

#[test]
fn test_reference_scenario_component_order() {
    let r = price(
        &reference_borrower(),
        &reference_pledge(),
        &reference_bank(),
        dec!(5832.50),
    )
    .unwrap();
    let kinds: Vec<RateComponentKind> = r.rate_components.iter().map(|c| c.component).collect();
    assert_eq!(kinds, RateComponentKind::ORDER.to_vec());
}

// ===========================================================================
// Waterfall properties
// ===========================================================================

#[test]
fn test_final_rate_equals_component_sum_across_profiles() {
    for cibil in [300, 550, 700, 900] {
        for purity in PurityGrade::ALL {
            let mut b = reference_borrower();
            b.cibil = cibil;
            let c = CollateralProfile {
                gold_weight: dec!(37.5),
                gold_purity: purity,
            };
            let r = price(&b, &c, &reference_bank(), dec!(6120.75)).unwrap();
            let sum: Decimal = r.rate_components.iter().map(|c| c.value).sum();
            assert_eq!(r.final_rate, sum, "cibil {cibil}, purity {purity}");
            assert_eq!(r.rate_components.last().unwrap().cumulative, r.final_rate);
            assert!(r
                .rate_components
                .windows(2)
                .all(|w| w[0].cumulative <= w[1].cumulative));
        }
    }
}

#[test]
fn test_profit_margin_delta_passes_straight_through() {
    let base = price(
        &reference_borrower(),
        &reference_pledge(),
        &reference_bank(),
        dec!(5832.50),
    )
    .unwrap();

    let mut bank = reference_bank();
    bank.profit_margin = dec!(0.040);
    let bumped = price(&reference_borrower(), &reference_pledge(), &bank, dec!(5832.50)).unwrap();

    assert_eq!(bumped.final_rate - base.final_rate, dec!(0.015));
    assert_eq!(bumped.break_even_rate, base.break_even_rate);
    assert_eq!(bumped.loan_amount, base.loan_amount);
    assert_eq!(bumped.pd, base.pd);
    for (a, b) in base.rate_components.iter().zip(&bumped.rate_components).take(4) {
        assert_eq!(a.value, b.value);
    }
}

// ===========================================================================
// Degenerate inputs
// ===========================================================================

#[test]
fn test_zero_weight_gives_zero_rates_not_fault() {
    let pledge = CollateralProfile {
        gold_weight: Decimal::ZERO,
        gold_purity: PurityGrade::K24,
    };
    let r = price(&reference_borrower(), &pledge, &reference_bank(), dec!(5832.50)).unwrap();
    assert_eq!(r.loan_amount, Decimal::ZERO);
    assert_eq!(r.expected_loss_rate, Decimal::ZERO);
    assert_eq!(r.capital_charge_rate, Decimal::ZERO);
    // Funding, opex and margin still apply.
    assert_eq!(r.final_rate, dec!(0.125));
}

#[test]
fn test_oversized_weight_document_is_rejected_without_panic() {
    let json = r#"{
        "borrower": {"cibil": 750, "monthly_income": 50000, "work_exp": 5, "age": 35, "dti": 0.3, "tenure": 12},
        "collateral": { "gold_weight": "100000000000000000000000000", "gold_purity": "24K" },
        "spot_rate": "5832.50"
    }"#;
    let request: PricingRequest = serde_json::from_str(json).unwrap();
    match price_loan(&request) {
        Err(GoldLoanError::InvalidInput { field, .. }) => assert_eq!(field, "gold_weight"),
        other => panic!("expected gold_weight overflow error, got {:?}", other.map(|o| o.result.final_rate)),
    }
}

#[test]
fn test_zero_weight_request_warns() {
    let request = PricingRequest {
        borrower: reference_borrower(),
        collateral: CollateralProfile {
            gold_weight: Decimal::ZERO,
            gold_purity: PurityGrade::K18,
        },
        bank: reference_bank(),
        spot_rate: Some(dec!(5832.50)),
        model: None,
    };
    let out = price_loan(&request).unwrap();
    assert!(out.warnings.iter().any(|w| w.contains("Loan amount is zero")));
}

// ===========================================================================
// Spot price provider
// ===========================================================================

#[test]
fn test_provider_rate_flows_into_result() {
    let provider = FixedSpotPrice::new(dec!(6000)).unwrap();
    let r = price_with_provider(
        &reference_borrower(),
        &reference_pledge(),
        &reference_bank(),
        &provider,
    )
    .unwrap();
    assert_eq!(r.spot_rate, dec!(6000));
    assert_eq!(r.collateral_value, dec!(274800));
}

#[test]
fn test_default_provider_matches_reference_rate() {
    let r = price_with_provider(
        &reference_borrower(),
        &reference_pledge(),
        &reference_bank(),
        &FixedSpotPrice::default(),
    )
    .unwrap();
    assert_eq!(r.collateral_value, dec!(267250.90));
}

// ===========================================================================
// Request documents
// ===========================================================================

#[test]
fn test_price_loan_from_json_document() {
    let json = r#"{
        "borrower": {
            "customer_id": "CUST12345",
            "cibil": 750, "monthly_income": 50000, "work_exp": 5, "age": 35,
            "dti": 0.3, "tenure": 12, "existing_customer": true, "agriculture": false
        },
        "collateral": { "gold_weight": 50, "gold_purity": "22K" },
        "spot_rate": "5832.50"
    }"#;
    let request: PricingRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.bank, BankParameters::default());

    let out = price_loan(&request).unwrap();
    assert_eq!(out.result.final_rate, dec!(0.195));
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    assert!(!out.methodology.is_empty());
}

#[test]
fn test_unknown_purity_in_document_fails() {
    let json = r#"{
        "borrower": {"cibil": 750, "monthly_income": 50000, "work_exp": 5, "age": 35, "dti": 0.3, "tenure": 12},
        "collateral": { "gold_weight": 50, "gold_purity": "23K" }
    }"#;
    let err = serde_json::from_str::<PricingRequest>(json).unwrap_err();
    assert!(err.to_string().contains("23K"));
}

#[test]
fn test_out_of_range_request_is_priced_with_warnings() {
    let mut borrower = reference_borrower();
    borrower.cibil = 1_000;
    borrower.dti = dec!(1.4);
    let request = PricingRequest {
        borrower,
        collateral: reference_pledge(),
        bank: reference_bank(),
        spot_rate: Some(dec!(5832.50)),
        model: None,
    };
    let out = price_loan(&request).unwrap();
    assert!(out.warnings.iter().any(|w| w.starts_with("cibil")));
    assert!(out.warnings.iter().any(|w| w.starts_with("dti")));
    assert!(out.result.ltv <= dec!(0.85));
}

#[test]
fn test_result_serialization_roundtrip() {
    let r = engine::price(
        &reference_borrower(),
        &reference_pledge(),
        &reference_bank(),
        dec!(5832.50),
    )
    .unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["gold_purity"], "22K");
    assert_eq!(json["rate_components"][4]["component"], "Profit Margin");
    let _: gold_loan_core::pricing::PricingResult = serde_json::from_value(json).unwrap();
}

#[test]
fn test_bad_spot_rate_is_an_error() {
    let request = PricingRequest {
        borrower: reference_borrower(),
        collateral: reference_pledge(),
        bank: reference_bank(),
        spot_rate: Some(dec!(-1)),
        model: None,
    };
    assert!(matches!(
        price_loan(&request),
        Err(GoldLoanError::InvalidSpotPrice { .. })
    ));
}

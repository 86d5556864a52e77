use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::LtvCoefficients;
use super::profile::BorrowerProfile;
use super::{FactorContribution, RiskFactor};
use crate::types::Rate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LtvEstimate {
    pub base_ltv: Rate,
    pub adjustments: Vec<FactorContribution>,
    /// base_ltv plus every adjustment, before the policy floor and cap.
    pub unclamped_ltv: Rate,
    pub ltv: Rate,
    pub clamped: bool,
}

/// Policy LTV for a borrower, clamped to `[ltv_floor, ltv_cap]`.
pub fn estimate_ltv(profile: &BorrowerProfile, coeffs: &LtvCoefficients) -> LtvEstimate {
    let cibil = Decimal::from(profile.cibil);
    let credit_score = (cibil - coeffs.cibil_pivot)
        .checked_div(coeffs.cibil_span)
        .unwrap_or(Decimal::ZERO)
        * coeffs.cibil_weight;

    let income = if profile.monthly_income > coeffs.high_income_above {
        coeffs.high_income
    } else if profile.monthly_income < coeffs.low_income_below {
        coeffs.low_income
    } else {
        Decimal::ZERO
    };

    let work_experience = if profile.work_exp > coeffs.work_exp_above {
        coeffs.work_experience
    } else {
        Decimal::ZERO
    };

    let age = if (coeffs.prime_age_min..=coeffs.prime_age_max).contains(&profile.age) {
        coeffs.prime_age
    } else {
        Decimal::ZERO
    };

    let adjustments = vec![
        FactorContribution::new(RiskFactor::CreditScore, credit_score),
        FactorContribution::new(RiskFactor::Income, income),
        FactorContribution::new(RiskFactor::WorkExperience, work_experience),
        FactorContribution::new(RiskFactor::Age, age),
        FactorContribution::new(
            RiskFactor::ExistingCustomer,
            if profile.existing_customer { coeffs.existing_customer } else { Decimal::ZERO },
        ),
        FactorContribution::new(
            RiskFactor::Agriculture,
            if profile.agriculture { coeffs.agriculture } else { Decimal::ZERO },
        ),
    ];

    let unclamped_ltv = coeffs.base_ltv + adjustments.iter().map(|a| a.value).sum::<Decimal>();
    let ltv = unclamped_ltv.min(coeffs.ltv_cap).max(coeffs.ltv_floor);

    LtvEstimate {
        base_ltv: coeffs.base_ltv,
        adjustments,
        unclamped_ltv,
        ltv,
        clamped: ltv != unclamped_ltv,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_borrower() -> BorrowerProfile {
        BorrowerProfile {
            customer_id: None,
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

    #[test]
    fn test_reference_borrower_ltv() {
        let est = estimate_ltv(&reference_borrower(), &LtvCoefficients::default());
        // 0.70 + 0.06 (cibil) + 0.02 (age) + 0.05 (existing)
        assert_eq!(est.ltv, dec!(0.83));
        assert!(!est.clamped);
    }

    #[test]
    fn test_income_exactly_at_threshold_gets_no_bonus() {
        let est = estimate_ltv(&reference_borrower(), &LtvCoefficients::default());
        let income = est
            .adjustments
            .iter()
            .find(|a| a.factor == RiskFactor::Income)
            .unwrap();
        assert_eq!(income.value, Decimal::ZERO);
    }

    #[test]
    fn test_strong_profile_clamped_at_cap() {
        let mut p = reference_borrower();
        p.cibil = 900;
        p.monthly_income = dec!(120_000);
        p.work_exp = 12;
        let est = estimate_ltv(&p, &LtvCoefficients::default());
        assert!(est.unclamped_ltv > dec!(0.85));
        assert_eq!(est.ltv, dec!(0.85));
        assert!(est.clamped);
    }

    #[test]
    fn test_weak_profile_clamped_at_floor() {
        let p = BorrowerProfile {
            customer_id: None,
            cibil: 300,
            monthly_income: dec!(10_000),
            work_exp: 0,
            age: 22,
            dti: dec!(0.9),
            tenure: 60,
            existing_customer: false,
            agriculture: true,
        };
        let est = estimate_ltv(&p, &LtvCoefficients::default());
        // 0.70 - 0.12 - 0.05 - 0.03 = 0.50
        assert_eq!(est.unclamped_ltv, dec!(0.50));
        assert_eq!(est.ltv, dec!(0.60));
        assert!(est.clamped);
    }

    #[test]
    fn test_prime_age_band_is_inclusive() {
        let coeffs = LtvCoefficients::default();
        let mut p = reference_borrower();
        p.existing_customer = false;
        p.age = 30;
        let at_min = estimate_ltv(&p, &coeffs).ltv;
        p.age = 50;
        let at_max = estimate_ltv(&p, &coeffs).ltv;
        p.age = 51;
        let outside = estimate_ltv(&p, &coeffs).ltv;
        assert_eq!(at_min, at_max);
        assert_eq!(at_min - outside, dec!(0.02));
    }

    #[test]
    fn test_higher_cibil_never_lowers_ltv() {
        let coeffs = LtvCoefficients::default();
        let mut p = reference_borrower();
        let mut last = Decimal::ZERO;
        for cibil in (300..=900).step_by(25) {
            p.cibil = cibil;
            let ltv = estimate_ltv(&p, &coeffs).ltv;
            assert!(ltv >= last, "LTV fell at cibil {cibil}");
            last = ltv;
        }
    }
}

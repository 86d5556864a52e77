use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

/// Borrower risk profile as captured at origination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowerProfile {
    /// Opaque reference echoed in results. Never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// CIBIL bureau score (300-900).
    pub cibil: u32,
    pub monthly_income: Money,
    /// Work experience in whole years.
    pub work_exp: u32,
    pub age: u32,
    /// Debt-to-income ratio as a decimal fraction.
    pub dti: Rate,
    /// Requested tenure in months (1-120).
    pub tenure: u32,
    #[serde(default)]
    pub existing_customer: bool,
    #[serde(default)]
    pub agriculture: bool,
}

impl BorrowerProfile {
    /// Describe every field that sits outside the origination form's range.
    ///
    /// Out-of-range profiles are still scored; the scores are just not
    /// calibrated for them.
    pub fn range_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !(300..=900).contains(&self.cibil) {
            warnings.push(format!("cibil {} is outside 300-900.", self.cibil));
        }
        if self.monthly_income < Decimal::ZERO {
            warnings.push(format!("monthly_income {} is negative.", self.monthly_income));
        }
        if self.work_exp > 50 {
            warnings.push(format!("work_exp {} exceeds 50 years.", self.work_exp));
        }
        if !(18..=80).contains(&self.age) {
            warnings.push(format!("age {} is outside 18-80.", self.age));
        }
        if self.dti < Decimal::ZERO || self.dti > Decimal::ONE {
            warnings.push(format!("dti {} is outside 0-1.", self.dti));
        }
        if !(1..=120).contains(&self.tenure) {
            warnings.push(format!("tenure {} is outside 1-120 months.", self.tenure));
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn in_range() -> BorrowerProfile {
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

    #[test]
    fn test_in_range_profile_has_no_warnings() {
        assert!(in_range().range_warnings().is_empty());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let mut p = in_range();
        p.cibil = 300;
        p.age = 80;
        p.tenure = 120;
        p.dti = Decimal::ONE;
        p.work_exp = 50;
        assert!(p.range_warnings().is_empty());
    }

    #[test]
    fn test_each_out_of_range_field_is_reported() {
        let mut p = in_range();
        p.cibil = 950;
        p.age = 17;
        p.dti = dec!(1.2);
        p.tenure = 0;
        let warnings = p.range_warnings();
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains("cibil"));
    }

    #[test]
    fn test_flags_default_to_false() {
        let p: BorrowerProfile = serde_json::from_str(
            r#"{"cibil": 700, "monthly_income": 40000, "work_exp": 3, "age": 40, "dti": 0.2, "tenure": 24}"#,
        )
        .unwrap();
        assert!(!p.existing_customer);
        assert!(!p.agriculture);
        assert!(p.customer_id.is_none());
    }
}

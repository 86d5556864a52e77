use rust_decimal::Decimal;

use crate::types::{Money, Rate};
use crate::{GoldLoanError, GoldLoanResult};

/// loan_amount = LTV × collateral_value, floored at zero.
pub fn size_loan(ltv: Rate, collateral_value: Money) -> GoldLoanResult<Money> {
    let loan_amount = ltv
        .checked_mul(collateral_value)
        .ok_or_else(|| GoldLoanError::overflow("collateral_value"))?;
    Ok(loan_amount.max(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_is_ltv_share_of_collateral() {
        // 0.83 × 267,250.90
        assert_eq!(size_loan(dec!(0.83), dec!(267250.90)).unwrap(), dec!(221818.247));
    }

    #[test]
    fn test_zero_collateral_gives_zero_loan() {
        assert_eq!(size_loan(dec!(0.75), Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_never_negative() {
        assert_eq!(size_loan(dec!(0.75), dec!(-100)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_ltv_above_one_on_huge_collateral_overflows_cleanly() {
        assert!(size_loan(dec!(2), Decimal::MAX).is_err());
    }
}

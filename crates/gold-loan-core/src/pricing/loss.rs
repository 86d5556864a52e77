//! Expected loss and capital charge on a sized loan.
//!
//! Both rates are expressed per unit of loan. A zero loan has zero rates by
//! convention rather than an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};
use crate::{GoldLoanError, GoldLoanResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedLoss {
    pub expected_loss: Money,
    pub expected_loss_rate: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalCharge {
    /// Capital set aside against the loan.
    pub amount_capital: Money,
    pub capital_charge: Money,
    pub capital_charge_rate: Rate,
}

/// EL = PD × LGD × exposure.
pub fn expected_loss(pd: Rate, lgd: Rate, loan_amount: Money) -> GoldLoanResult<ExpectedLoss> {
    let expected_loss = pd
        .checked_mul(lgd)
        .and_then(|v| v.checked_mul(loan_amount))
        .ok_or_else(|| GoldLoanError::overflow("loan_amount"))?;
    Ok(ExpectedLoss {
        expected_loss,
        expected_loss_rate: per_unit_of_loan(expected_loss, loan_amount),
    })
}

pub fn capital_charge(
    loan_amount: Money,
    capital_requirement: Rate,
    cost_of_capital: Decimal,
) -> GoldLoanResult<CapitalCharge> {
    let amount_capital = loan_amount
        .checked_mul(capital_requirement)
        .ok_or_else(|| GoldLoanError::overflow("capital_requirement"))?;
    let capital_charge = amount_capital
        .checked_mul(cost_of_capital)
        .ok_or_else(|| GoldLoanError::overflow("cost_capital"))?;
    Ok(CapitalCharge {
        amount_capital,
        capital_charge,
        capital_charge_rate: per_unit_of_loan(capital_charge, loan_amount),
    })
}

fn per_unit_of_loan(amount: Money, loan_amount: Money) -> Rate {
    if loan_amount > Decimal::ZERO {
        amount.checked_div(loan_amount).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Rate;

/// Funding and capital assumptions of the lending bank.
///
/// Every field is a decimal fraction (0.07 = 7%) except `cost_capital`,
/// which is a multiplier on the capital set aside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankParameters {
    pub risk_free_rate: Rate,
    pub funding_spread: Rate,
    /// Capital held per unit of loan.
    pub capital_requirement: Rate,
    pub cost_capital: Decimal,
    /// Carried for reporting. Not part of the rate build-up.
    pub roe_target: Rate,
    pub operating_cost_rate: Rate,
    pub profit_margin: Rate,
}

impl Default for BankParameters {
    fn default() -> Self {
        Self {
            risk_free_rate: dec!(0.07),
            funding_spread: dec!(0.015),
            capital_requirement: dec!(0.01),
            cost_capital: dec!(1.0),
            roe_target: dec!(0.15),
            operating_cost_rate: dec!(0.015),
            profit_margin: dec!(0.025),
        }
    }
}

impl BankParameters {
    pub fn range_warnings(&self) -> Vec<String> {
        let unit_fields = [
            ("risk_free_rate", self.risk_free_rate),
            ("funding_spread", self.funding_spread),
            ("capital_requirement", self.capital_requirement),
            ("roe_target", self.roe_target),
            ("operating_cost_rate", self.operating_cost_rate),
            ("profit_margin", self.profit_margin),
        ];
        let mut warnings: Vec<String> = unit_fields
            .iter()
            .filter(|(_, v)| *v < Decimal::ZERO || *v > Decimal::ONE)
            .map(|(name, v)| format!("{name} {v} is outside 0-1."))
            .collect();
        if self.cost_capital < Decimal::ZERO || self.cost_capital > dec!(2) {
            warnings.push(format!("cost_capital {} is outside 0-2.", self.cost_capital));
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_warnings() {
        assert!(BankParameters::default().range_warnings().is_empty());
    }

    #[test]
    fn test_percent_entered_as_whole_number_is_flagged() {
        let bank = BankParameters {
            risk_free_rate: dec!(7),
            cost_capital: dec!(2.5),
            ..BankParameters::default()
        };
        let warnings = bank.range_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("risk_free_rate"));
        assert!(warnings[1].starts_with("cost_capital"));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let bank: BankParameters = serde_json::from_str(r#"{"profit_margin": 0.03}"#).unwrap();
        assert_eq!(bank.profit_margin, dec!(0.03));
        assert_eq!(bank.risk_free_rate, dec!(0.07));
    }
}

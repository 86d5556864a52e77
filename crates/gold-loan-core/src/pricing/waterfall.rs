//! Interest-rate build-up.
//!
//! Funding cost first, profit last. The order is part of the output: the
//! cumulative series is what a waterfall chart plots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Rate;
use crate::{GoldLoanError, GoldLoanResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateComponentKind {
    #[serde(rename = "Cost of Funds")]
    CostOfFunds,
    #[serde(rename = "Expected Loss")]
    ExpectedLoss,
    #[serde(rename = "Capital Charge")]
    CapitalCharge,
    #[serde(rename = "Operating Costs")]
    OperatingCosts,
    #[serde(rename = "Profit Margin")]
    ProfitMargin,
}

impl RateComponentKind {
    pub const ORDER: [RateComponentKind; 5] = [
        RateComponentKind::CostOfFunds,
        RateComponentKind::ExpectedLoss,
        RateComponentKind::CapitalCharge,
        RateComponentKind::OperatingCosts,
        RateComponentKind::ProfitMargin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RateComponentKind::CostOfFunds => "Cost of Funds",
            RateComponentKind::ExpectedLoss => "Expected Loss",
            RateComponentKind::CapitalCharge => "Capital Charge",
            RateComponentKind::OperatingCosts => "Operating Costs",
            RateComponentKind::ProfitMargin => "Profit Margin",
        }
    }
}

impl fmt::Display for RateComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateComponent {
    pub component: RateComponentKind,
    pub value: Rate,
    /// Running total up to and including this component.
    pub cumulative: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterfallInputs {
    pub risk_free_rate: Rate,
    pub funding_spread: Rate,
    pub expected_loss_rate: Rate,
    pub capital_charge_rate: Rate,
    pub operating_cost_rate: Rate,
    pub profit_margin: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateWaterfall {
    pub cost_of_funds: Rate,
    /// Everything except profit.
    pub break_even_rate: Rate,
    pub final_rate: Rate,
    pub components: Vec<RateComponent>,
}

impl RateWaterfall {
    pub fn labels(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.component.label()).collect()
    }

    pub fn values(&self) -> Vec<Rate> {
        self.components.iter().map(|c| c.value).collect()
    }

    pub fn cumulative(&self) -> Vec<Rate> {
        self.components.iter().map(|c| c.cumulative).collect()
    }
}

pub fn build_waterfall(inputs: &WaterfallInputs) -> GoldLoanResult<RateWaterfall> {
    let cost_of_funds = inputs
        .risk_free_rate
        .checked_add(inputs.funding_spread)
        .ok_or_else(|| GoldLoanError::overflow("funding_spread"))?;
    let values = [
        cost_of_funds,
        inputs.expected_loss_rate,
        inputs.capital_charge_rate,
        inputs.operating_cost_rate,
        inputs.profit_margin,
    ];

    let mut running = Decimal::ZERO;
    let mut components = Vec::with_capacity(values.len());
    for (component, value) in RateComponentKind::ORDER.into_iter().zip(values) {
        running = running
            .checked_add(value)
            .ok_or_else(|| GoldLoanError::overflow(component.label()))?;
        components.push(RateComponent {
            component,
            value,
            cumulative: running,
        });
    }

    // cumulative[3] stops before profit margin
    let break_even_rate = components[3].cumulative;
    let final_rate = components[4].cumulative;

    Ok(RateWaterfall {
        cost_of_funds,
        break_even_rate,
        final_rate,
        components,
    })
}

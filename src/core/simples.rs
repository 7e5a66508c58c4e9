//! Simples Nacional: bracketed nominal rate with a fixed deduction

use super::error::CalculationError;
use super::money::{checked, round};
use super::regime::Annex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SimplesNacionalInput {
    /// Gross revenue over the last 12 months (RBT12)
    #[schemars(with = "f64")]
    pub revenue_12_months: Decimal,
    /// Revenue for the month being assessed
    #[schemars(with = "f64")]
    pub revenue_month: Decimal,
    /// Payroll for the month; informational only
    #[serde(default)]
    #[schemars(with = "f64")]
    pub payroll: Decimal,
    pub annex: Annex,
}

/// One row of the simplified Simples Nacional table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bracket {
    /// Upper bound of 12-month revenue, inclusive. `None` for the last bracket.
    pub ceiling: Option<Decimal>,
    pub nominal_rate: Decimal,
    pub deduction: Decimal,
}

pub const BRACKETS: [Bracket; 5] = [
    Bracket {
        ceiling: Some(dec!(180000)),
        nominal_rate: dec!(0.06),
        deduction: dec!(0),
    },
    Bracket {
        ceiling: Some(dec!(360000)),
        nominal_rate: dec!(0.112),
        deduction: dec!(9360),
    },
    Bracket {
        ceiling: Some(dec!(720000)),
        nominal_rate: dec!(0.135),
        deduction: dec!(17640),
    },
    Bracket {
        ceiling: Some(dec!(1800000)),
        nominal_rate: dec!(0.16),
        deduction: dec!(35640),
    },
    Bracket {
        ceiling: None,
        nominal_rate: dec!(0.21),
        deduction: dec!(125640),
    },
];

impl Bracket {
    /// Bracket for a given 12-month revenue
    pub fn for_revenue(revenue_12_months: Decimal) -> Bracket {
        BRACKETS
            .iter()
            .find(|b| b.ceiling.is_none_or(|ceiling| revenue_12_months <= ceiling))
            .copied()
            .unwrap_or(BRACKETS[BRACKETS.len() - 1])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplesNacionalAssessment {
    pub input: SimplesNacionalInput,
    pub bracket: Bracket,
    /// Effective rate as a percentage, rounded to 2 places
    pub effective_rate: Decimal,
    pub monthly_tax: Decimal,
}

impl SimplesNacionalAssessment {
    /// Nominal rate as a percentage
    pub fn nominal_rate(&self) -> Decimal {
        self.bracket.nominal_rate * Decimal::ONE_HUNDRED
    }
}

pub fn assess(input: &SimplesNacionalInput) -> Result<SimplesNacionalAssessment, CalculationError> {
    if input.revenue_12_months <= Decimal::ZERO {
        return Err(CalculationError::NonPositiveTrailingRevenue(
            input.revenue_12_months,
        ));
    }

    let bracket = Bracket::for_revenue(input.revenue_12_months);
    let gross = checked(
        input.revenue_12_months.checked_mul(bracket.nominal_rate),
        "nominal tax",
    )?;
    let effective_rate = checked(
        (gross - bracket.deduction)
            .checked_div(input.revenue_12_months)
            .and_then(|rate| rate.checked_mul(Decimal::ONE_HUNDRED)),
        "effective rate",
    )?;
    let monthly_tax = checked(
        input
            .revenue_month
            .checked_mul(effective_rate)
            .and_then(|tax| tax.checked_div(Decimal::ONE_HUNDRED)),
        "monthly tax",
    )?;

    log::debug!(
        "Simples Nacional: rbt12={}, nominal={}, deduction={}, effective={}%, tax={}",
        input.revenue_12_months,
        bracket.nominal_rate,
        bracket.deduction,
        effective_rate,
        monthly_tax
    );

    Ok(SimplesNacionalAssessment {
        input: input.clone(),
        bracket,
        effective_rate: round(effective_rate),
        monthly_tax: round(monthly_tax),
    })
}

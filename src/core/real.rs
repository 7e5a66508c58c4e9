//! Lucro Real: taxes on the actual monthly profit

use super::breakdown::TaxBreakdown;
use super::error::CalculationError;
use super::money::{checked, round};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// PIS rate in the non-cumulative regime
pub const PIS_RATE: Decimal = dec!(0.0165);
/// COFINS rate in the non-cumulative regime
pub const COFINS_RATE: Decimal = dec!(0.076);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LucroRealInput {
    #[schemars(with = "f64")]
    pub revenue_month: Decimal,
    #[schemars(with = "f64")]
    pub expense_month: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome")]
pub enum LucroRealAssessment {
    /// Expenses exceeded revenue; nothing is due and the loss can be
    /// carried forward.
    Loss {
        input: LucroRealInput,
        loss: Decimal,
    },
    Profit {
        input: LucroRealInput,
        net_profit: Decimal,
        breakdown: TaxBreakdown,
    },
}

impl LucroRealAssessment {
    pub fn input(&self) -> &LucroRealInput {
        match self {
            LucroRealAssessment::Loss { input, .. } | LucroRealAssessment::Profit { input, .. } => {
                input
            }
        }
    }

    pub fn tax_due(&self) -> Decimal {
        match self {
            LucroRealAssessment::Loss { .. } => Decimal::ZERO,
            LucroRealAssessment::Profit { breakdown, .. } => breakdown.total,
        }
    }
}

pub fn assess(input: &LucroRealInput) -> Result<LucroRealAssessment, CalculationError> {
    let net_profit = checked(
        input.revenue_month.checked_sub(input.expense_month),
        "net profit",
    )?;

    if net_profit < Decimal::ZERO {
        log::debug!("Lucro Real: loss of {}", -net_profit);
        return Ok(LucroRealAssessment::Loss {
            input: input.clone(),
            loss: round(net_profit.abs()),
        });
    }

    let breakdown = TaxBreakdown::compute(net_profit, input.revenue_month, PIS_RATE, COFINS_RATE)?;
    log::debug!(
        "Lucro Real: net profit={}, total={}",
        net_profit,
        breakdown.total
    );

    Ok(LucroRealAssessment::Profit {
        input: input.clone(),
        net_profit: round(net_profit),
        breakdown,
    })
}

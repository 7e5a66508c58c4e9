//! Lucro Presumido: profit presumed as a share of the average quarterly revenue

use super::breakdown::TaxBreakdown;
use super::error::CalculationError;
use super::money::{checked, round};
use super::regime::ActivityType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// PIS rate in the cumulative regime
pub const PIS_RATE: Decimal = dec!(0.0065);
/// COFINS rate in the cumulative regime
pub const COFINS_RATE: Decimal = dec!(0.03);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LucroPresumidoInput {
    #[schemars(with = "f64")]
    pub revenue_month_1: Decimal,
    #[schemars(with = "f64")]
    pub revenue_month_2: Decimal,
    #[schemars(with = "f64")]
    pub revenue_month_3: Decimal,
    pub activity: ActivityType,
}

impl LucroPresumidoInput {
    pub fn revenues(&self) -> [Decimal; 3] {
        [self.revenue_month_1, self.revenue_month_2, self.revenue_month_3]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LucroPresumidoAssessment {
    pub input: LucroPresumidoInput,
    pub average_revenue: Decimal,
    pub presumption_rate: Decimal,
    pub presumed_base: Decimal,
    pub breakdown: TaxBreakdown,
}

pub fn assess(input: &LucroPresumidoInput) -> Result<LucroPresumidoAssessment, CalculationError> {
    let quarter = input
        .revenues()
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, revenue| {
            checked(sum.checked_add(revenue), "quarterly revenue")
        })?;
    let average = quarter / dec!(3);
    let presumption_rate = input.activity.presumption_rate();
    let presumed_base = average * presumption_rate;
    let breakdown = TaxBreakdown::compute(presumed_base, average, PIS_RATE, COFINS_RATE)?;

    log::debug!(
        "Lucro Presumido: average={}, rate={}, base={}, total={}",
        average,
        presumption_rate,
        presumed_base,
        breakdown.total
    );

    Ok(LucroPresumidoAssessment {
        input: input.clone(),
        average_revenue: round(average),
        presumption_rate,
        presumed_base: round(presumed_base),
        breakdown,
    })
}

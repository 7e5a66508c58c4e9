use super::error::CalculationError;
use super::money::{checked, round};
use super::regime::{additional_irpj, CSLL_RATE, IRPJ_RATE};
use rust_decimal::Decimal;
use serde::Serialize;

/// The five federal components shared by Lucro Presumido and Lucro Real.
/// All figures rounded to centavos; `total` is summed before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    /// IRPJ
    pub corporate_income_tax: Decimal,
    /// Adicional de IRPJ
    pub additional_income_tax: Decimal,
    /// CSLL
    pub social_contribution: Decimal,
    pub pis: Decimal,
    pub cofins: Decimal,
    pub total: Decimal,
}

impl TaxBreakdown {
    /// IRPJ, additional IRPJ and CSLL on `profit_base`; PIS and COFINS on `revenue`.
    pub fn compute(
        profit_base: Decimal,
        revenue: Decimal,
        pis_rate: Decimal,
        cofins_rate: Decimal,
    ) -> Result<TaxBreakdown, CalculationError> {
        let irpj = checked(profit_base.checked_mul(IRPJ_RATE), "IRPJ")?;
        let additional = additional_irpj(profit_base);
        let csll = checked(profit_base.checked_mul(CSLL_RATE), "CSLL")?;
        let pis = checked(revenue.checked_mul(pis_rate), "PIS")?;
        let cofins = checked(revenue.checked_mul(cofins_rate), "COFINS")?;
        let total = [additional, csll, pis, cofins]
            .into_iter()
            .try_fold(irpj, |sum, tax| checked(sum.checked_add(tax), "total"))?;

        Ok(TaxBreakdown {
            corporate_income_tax: round(irpj),
            additional_income_tax: round(additional),
            social_contribution: round(csll),
            pis: round(pis),
            cofins: round(cofins),
            total: round(total),
        })
    }

    /// Components in report order, with their short names
    pub fn components(&self) -> [(&'static str, Decimal); 5] {
        [
            ("IRPJ", self.corporate_income_tax),
            ("Adicional IR", self.additional_income_tax),
            ("CSLL", self.social_contribution),
            ("PIS", self.pis),
            ("COFINS", self.cofins),
        ]
    }
}

use super::error::CalculationError;
use super::presumido::{self, LucroPresumidoAssessment, LucroPresumidoInput};
use super::real::{self, LucroRealAssessment, LucroRealInput};
use super::regime::Regime;
use super::report;
use super::simples::{self, SimplesNacionalAssessment, SimplesNacionalInput};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Calculator input, one shape per regime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "regime")]
pub enum TaxInput {
    #[serde(rename = "Simples Nacional")]
    SimplesNacional(SimplesNacionalInput),
    #[serde(rename = "Lucro Presumido")]
    LucroPresumido(LucroPresumidoInput),
    #[serde(rename = "Lucro Real")]
    LucroReal(LucroRealInput),
}

impl TaxInput {
    pub fn regime(&self) -> Regime {
        match self {
            TaxInput::SimplesNacional(_) => Regime::SimplesNacional,
            TaxInput::LucroPresumido(_) => Regime::LucroPresumido,
            TaxInput::LucroReal(_) => Regime::LucroReal,
        }
    }
}

/// Numeric result of a calculation, before rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "regime")]
pub enum TaxAssessment {
    #[serde(rename = "Simples Nacional")]
    SimplesNacional(SimplesNacionalAssessment),
    #[serde(rename = "Lucro Presumido")]
    LucroPresumido(LucroPresumidoAssessment),
    #[serde(rename = "Lucro Real")]
    LucroReal(LucroRealAssessment),
}

impl TaxAssessment {
    pub fn regime(&self) -> Regime {
        match self {
            TaxAssessment::SimplesNacional(_) => Regime::SimplesNacional,
            TaxAssessment::LucroPresumido(_) => Regime::LucroPresumido,
            TaxAssessment::LucroReal(_) => Regime::LucroReal,
        }
    }

    /// Amount due for the period
    pub fn tax_due(&self) -> Decimal {
        match self {
            TaxAssessment::SimplesNacional(a) => a.monthly_tax,
            TaxAssessment::LucroPresumido(a) => a.breakdown.total,
            TaxAssessment::LucroReal(a) => a.tax_due(),
        }
    }
}

pub fn calculate(input: &TaxInput) -> Result<TaxAssessment, CalculationError> {
    let assessment = match input {
        TaxInput::SimplesNacional(i) => TaxAssessment::SimplesNacional(simples::assess(i)?),
        TaxInput::LucroPresumido(i) => TaxAssessment::LucroPresumido(presumido::assess(i)?),
        TaxInput::LucroReal(i) => TaxAssessment::LucroReal(real::assess(i)?),
    };
    log::info!(
        "{} assessment: tax due {}",
        assessment.regime(),
        assessment.tax_due()
    );
    Ok(assessment)
}

pub fn compute_simples_nacional(input: &SimplesNacionalInput) -> Result<String, CalculationError> {
    Ok(report::render_simples_nacional(&simples::assess(input)?))
}

pub fn compute_lucro_presumido(input: &LucroPresumidoInput) -> Result<String, CalculationError> {
    Ok(report::render_lucro_presumido(&presumido::assess(input)?))
}

pub fn compute_lucro_real(input: &LucroRealInput) -> Result<String, CalculationError> {
    Ok(report::render_lucro_real(&real::assess(input)?))
}

/// Calculate and render in one go
pub fn compute(input: &TaxInput) -> Result<String, CalculationError> {
    match input {
        TaxInput::SimplesNacional(i) => compute_simples_nacional(i),
        TaxInput::LucroPresumido(i) => compute_lucro_presumido(i),
        TaxInput::LucroReal(i) => compute_lucro_real(i),
    }
}

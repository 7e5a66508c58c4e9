pub mod breakdown;
pub mod calculator;
pub mod company;
pub mod error;
pub mod fields;
pub mod money;
pub mod presumido;
pub mod real;
pub mod regime;
pub mod report;
pub mod simples;

// Flat public surface for domain types and functions.
pub use breakdown::TaxBreakdown;
pub use calculator::{
    calculate, compute, compute_lucro_presumido, compute_lucro_real, compute_simples_nacional,
    TaxAssessment, TaxInput,
};
pub use company::{
    format_cnpj, format_phone, Company, CompanyInput, CompanyRegistry, CompanyType, CsvColumn,
    NewCompany,
};
pub use error::{CalculationError, CompanyError, InputError};
pub use presumido::{LucroPresumidoAssessment, LucroPresumidoInput};
pub use real::{LucroRealAssessment, LucroRealInput};
pub use regime::{ActivityType, Annex, Regime};
pub use report::render_report;
pub use simples::{Bracket, SimplesNacionalAssessment, SimplesNacionalInput};

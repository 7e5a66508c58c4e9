use rust_decimal::Decimal;

/// Errors raised by the calculator itself.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("revenue for the last 12 months must be greater than zero (got {0})")]
    NonPositiveTrailingRevenue(Decimal),
    #[error("amounts too large to calculate (overflow in {0})")]
    Overflow(&'static str),
}

/// Errors raised while turning text fields into calculator inputs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("required field missing: {0}")]
    MissingField(&'static str),
    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid choice for {field}: '{value}' (expected one of: {expected})")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: String,
    },
    #[error("invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompanyError {
    #[error("duplicate company id: {id} ({name})")]
    Duplicate { id: String, name: String },
    #[error("company not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Input(#[from] InputError),
}

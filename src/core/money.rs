use super::error::CalculationError;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{define_currency_set, Formatter, Params, Position};

pub type Money<'a> = rusty_money::Money<'a, currencies::Currency>;

define_currency_set!(
    currencies {
        BRL: {
            code: "BRL",
            exponent: 2,
            locale: EnEu,
            minor_units: 100,
            name: "Brazilian Real",
            symbol: "R$",
            symbol_first: true,
        }
    }
);

/// Round a reported figure to centavos, midpoint away from zero.
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Result of a `checked_*` operation, naming the figure that overflowed
pub(crate) fn checked(
    value: Option<Decimal>,
    figure: &'static str,
) -> Result<Decimal, CalculationError> {
    value.ok_or(CalculationError::Overflow(figure))
}

/// Rounded amount in reais, always carrying two decimal places
pub fn brl<'a>(amount: Decimal) -> Money<'a> {
    let mut rounded = round(amount);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    rusty_money::Money::from_decimal(rounded, currencies::BRL)
}

fn pt_br_params(symbol: Option<&'static str>, rounding: Option<u32>) -> Params {
    let positions = match symbol {
        Some(_) => vec![Position::Symbol, Position::Space, Position::Sign, Position::Amount],
        None => vec![Position::Sign, Position::Amount],
    };
    Params {
        digit_separator: '.',
        exponent_separator: ',',
        // enough groups for the largest Decimal
        separator_pattern: vec![3; 9],
        positions,
        rounding,
        symbol,
        ..Default::default()
    }
}

/// pt-BR number with 2 decimal places, e.g. `1.234.567,89`
pub fn format_decimal(amount: Decimal) -> String {
    Formatter::money(&brl(amount), pt_br_params(None, Some(2)))
}

pub fn format_brl(amount: Decimal) -> String {
    Formatter::money(&brl(amount), pt_br_params(Some("R$"), Some(2)))
}

/// A value already expressed as a percentage, e.g. `9.09` -> `9,09%`
pub fn format_percent(percent: Decimal) -> String {
    format!("{}%", format_decimal(percent))
}

/// A fractional rate as a short percentage, e.g. `0.32` -> `32%`, `0.0065` -> `0,65%`
pub fn format_rate(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED).normalize();
    let money = rusty_money::Money::from_decimal(percent, currencies::BRL);
    format!("{}%", Formatter::money(&money, pt_br_params(None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_thousands_pt_br() {
        assert_eq!(format_decimal(dec!(1246.3)), "1.246,30");
        assert_eq!(format_decimal(dec!(1234567.891)), "1.234.567,89");
        assert_eq!(format_decimal(dec!(999)), "999,00");
        assert_eq!(format_decimal(dec!(100000)), "100.000,00");
    }

    #[test]
    fn small_and_zero_values() {
        assert_eq!(format_decimal(Decimal::ZERO), "0,00");
        assert_eq!(format_decimal(dec!(0.005)), "0,01");
        assert_eq!(format_decimal(dec!(-0.001)), "0,00");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_decimal(dec!(-3000)), "-3.000,00");
        assert_eq!(format_brl(dec!(-1234.5)), "R$ -1.234,50");
    }

    #[test]
    fn brl_symbol_and_scale() {
        assert_eq!(format_brl(dec!(600)), "R$ 600,00");
        assert_eq!(brl(dec!(2.345)).amount(), &dec!(2.35));
    }

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(round(dec!(2.345)), dec!(2.35));
        assert_eq!(round(dec!(-2.345)), dec!(-2.35));
        assert_eq!(round(dec!(2.344)), dec!(2.34));
    }

    #[test]
    fn checked_names_the_overflowing_figure() {
        assert_eq!(
            checked(Decimal::MAX.checked_add(Decimal::ONE), "sum"),
            Err(CalculationError::Overflow("sum"))
        );
        assert_eq!(checked(Some(Decimal::ONE), "sum"), Ok(Decimal::ONE));
    }

    #[test]
    fn rates_and_percentages() {
        assert_eq!(format_rate(dec!(0.32)), "32%");
        assert_eq!(format_rate(dec!(0.08)), "8%");
        assert_eq!(format_rate(dec!(0.0065)), "0,65%");
        assert_eq!(format_rate(dec!(0.076)), "7,6%");
        assert_eq!(format_percent(dec!(9.09)), "9,09%");
        assert_eq!(format_percent(dec!(6)), "6,00%");
    }
}

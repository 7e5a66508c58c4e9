//! Library boundary: one report-producing function per regime

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use taxbr::core::{
    calculate, compute_lucro_presumido, compute_lucro_real, compute_simples_nacional,
    ActivityType, Annex, CalculationError, LucroPresumidoInput, LucroRealInput,
    SimplesNacionalInput, TaxAssessment, TaxInput,
};

fn simples(revenue_12_months: Decimal, revenue_month: Decimal) -> SimplesNacionalInput {
    SimplesNacionalInput {
        revenue_12_months,
        revenue_month,
        payroll: dec!(1200),
        annex: Annex::I,
    }
}

#[test]
fn simples_nacional_report() {
    let report = compute_simples_nacional(&simples(dec!(150000), dec!(10000))).unwrap();
    assert!(report.contains("Alíquota efetiva: 6,00%"));
    assert!(report.contains("IMPOSTO A PAGAR: R$ 600,00"));
}

#[test]
fn simples_nacional_third_bracket() {
    let input = TaxInput::SimplesNacional(simples(dec!(400000), dec!(10000)));
    match calculate(&input).unwrap() {
        TaxAssessment::SimplesNacional(a) => {
            assert_eq!(a.effective_rate, dec!(9.09));
            assert_eq!(a.monthly_tax, dec!(909));
        }
        other => panic!("unexpected assessment {other:?}"),
    }
}

#[test]
fn simples_nacional_rejects_zero_revenue() {
    assert_eq!(
        compute_simples_nacional(&simples(Decimal::ZERO, dec!(10000))),
        Err(CalculationError::NonPositiveTrailingRevenue(Decimal::ZERO))
    );
}

#[test]
fn lucro_presumido_report() {
    let input = LucroPresumidoInput {
        revenue_month_1: dec!(10000),
        revenue_month_2: dec!(12000),
        revenue_month_3: dec!(11000),
        activity: ActivityType::Services,
    };
    let report = compute_lucro_presumido(&input).unwrap();
    assert!(report.contains("Receita média: R$ 11.000,00"));
    assert!(report.contains("Presunção (32%): R$ 3.520,00"));
    assert!(report.contains("TOTAL MENSAL: R$ 1.246,30"));
    assert_eq!(report, compute_lucro_presumido(&input).unwrap());
}

#[test]
fn lucro_real_reports() {
    let loss = compute_lucro_real(&LucroRealInput {
        revenue_month: dec!(5000),
        expense_month: dec!(8000),
    })
    .unwrap();
    assert!(loss.contains("PREJUÍZO NO PERÍODO: R$ 3.000,00"));
    assert!(loss.contains("IMPOSTO A PAGAR: R$ 0,00"));

    let profit = compute_lucro_real(&LucroRealInput {
        revenue_month: dec!(50000),
        expense_month: dec!(20000),
    })
    .unwrap();
    assert!(profit.contains("Adicional IR: R$ 1.000,00"));
    assert!(profit.contains("TOTAL A PAGAR: R$ 12.825,00"));
}

#[test]
fn amounts_beyond_decimal_range_are_errors() {
    let huge: Decimal = "79228162514264337593543950335".parse().unwrap();
    let input = LucroPresumidoInput {
        revenue_month_1: huge,
        revenue_month_2: huge,
        revenue_month_3: huge,
        activity: ActivityType::Services,
    };
    assert_eq!(
        compute_lucro_presumido(&input),
        Err(CalculationError::Overflow("quarterly revenue"))
    );
    assert_eq!(
        compute_simples_nacional(&simples(dec!(1000000), huge)),
        Err(CalculationError::Overflow("monthly tax"))
    );
}

//! Fixed-layout text reports. Numbers are formatted pt-BR.

use super::breakdown::TaxBreakdown;
use super::calculator::TaxAssessment;
use super::money::{format_brl, format_percent, format_rate};
use super::presumido::{self, LucroPresumidoAssessment};
use super::real::{self, LucroRealAssessment};
use super::simples::SimplesNacionalAssessment;
use rust_decimal::Decimal;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub fn render_report(assessment: &TaxAssessment) -> String {
    match assessment {
        TaxAssessment::SimplesNacional(a) => render_simples_nacional(a),
        TaxAssessment::LucroPresumido(a) => render_lucro_presumido(a),
        TaxAssessment::LucroReal(a) => render_lucro_real(a),
    }
}

pub fn render_simples_nacional(a: &SimplesNacionalAssessment) -> String {
    format!(
        "CÁLCULO SIMPLES NACIONAL - {annex}

{RULE}
Receita 12 meses: {revenue_12_months}
Receita do mês: {revenue_month}
Folha de pagamento: {payroll}
{RULE}

Alíquota nominal: {nominal_rate}
Alíquota efetiva: {effective_rate}

IMPOSTO A PAGAR: {tax}",
        annex = a.input.annex,
        revenue_12_months = format_brl(a.input.revenue_12_months),
        revenue_month = format_brl(a.input.revenue_month),
        payroll = format_brl(a.input.payroll),
        nominal_rate = format_percent(a.nominal_rate()),
        effective_rate = format_percent(a.effective_rate),
        tax = format_brl(a.monthly_tax),
    )
}

pub fn render_lucro_presumido(a: &LucroPresumidoAssessment) -> String {
    let [revenue_1, revenue_2, revenue_3] = a.input.revenues().map(format_brl);
    format!(
        "CÁLCULO LUCRO PRESUMIDO - {activity}

{RULE}
Receita mês 1: {revenue_1}
Receita mês 2: {revenue_2}
Receita mês 3: {revenue_3}
{RULE}

Receita média: {average}
Presunção ({rate}): {base}

{breakdown}

TOTAL MENSAL: {total}",
        activity = a.input.activity,
        average = format_brl(a.average_revenue),
        rate = format_rate(a.presumption_rate),
        base = format_brl(a.presumed_base),
        breakdown = render_breakdown(&a.breakdown, presumido::PIS_RATE, presumido::COFINS_RATE),
        total = format_brl(a.breakdown.total),
    )
}

pub fn render_lucro_real(a: &LucroRealAssessment) -> String {
    let input = a.input();
    let result = match a {
        LucroRealAssessment::Loss { loss, .. } => format!(
            "PREJUÍZO NO PERÍODO: {loss}

IMPOSTO A PAGAR: {zero}

O prejuízo pode ser compensado em períodos futuros.",
            loss = format_brl(*loss),
            zero = format_brl(Decimal::ZERO),
        ),
        LucroRealAssessment::Profit {
            net_profit,
            breakdown,
            ..
        } => format!(
            "Lucro líquido: {net_profit}

{details}

TOTAL A PAGAR: {total}",
            net_profit = format_brl(*net_profit),
            details = render_breakdown(breakdown, real::PIS_RATE, real::COFINS_RATE),
            total = format_brl(breakdown.total),
        ),
    };
    format!(
        "CÁLCULO LUCRO REAL

{RULE}
Receita do mês: {revenue}
Despesas do mês: {expense}
{RULE}

{result}",
        revenue = format_brl(input.revenue_month),
        expense = format_brl(input.expense_month),
    )
}

fn render_breakdown(b: &TaxBreakdown, pis_rate: Decimal, cofins_rate: Decimal) -> String {
    format!(
        "DETALHAMENTO:
  • IRPJ (15%): {irpj}
  • Adicional IR: {additional}
  • CSLL (9%): {csll}
  • PIS ({pis_rate}): {pis}
  • COFINS ({cofins_rate}): {cofins}",
        irpj = format_brl(b.corporate_income_tax),
        additional = format_brl(b.additional_income_tax),
        csll = format_brl(b.social_contribution),
        pis_rate = format_rate(pis_rate),
        pis = format_brl(b.pis),
        cofins_rate = format_rate(cofins_rate),
        cofins = format_brl(b.cofins),
    )
}

//! Calculate command - the tax form: collect fields, validate, calculate, print

use crate::cmd::read_companies;
use crate::core::fields::{optional_amount, required_amount, required_choice};
use crate::core::money::{format_brl, format_percent, format_rate};
use crate::core::{
    calculate, compute, ActivityType, Annex, Company, InputError, LucroPresumidoInput,
    LucroRealAssessment, LucroRealInput, Regime, SimplesNacionalInput, TaxAssessment, TaxInput,
};
use anyhow::Context;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CalculateCommand {
    /// Tax regime to calculate
    #[arg(short, long, value_enum)]
    regime: Option<RegimeArg>,

    /// Company id; the regime is taken from the company's registration
    #[arg(short, long)]
    company: Option<String>,

    /// Company file (JSON or CSV, "-" for stdin)
    #[arg(long, env = "TAXBR_COMPANIES")]
    companies: Option<PathBuf>,

    /// JSON file with a complete calculator input (see `schema json-schema`)
    #[arg(short, long, conflicts_with_all = ["regime", "company"])]
    input: Option<PathBuf>,

    #[command(flatten)]
    fields: FieldArgs,

    /// Output the assessment as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Output a table of every figure instead of the text report
    #[arg(long, conflicts_with = "json")]
    breakdown: bool,
}

/// Form fields, kept as text until the regime is known
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Simples Nacional: revenue over the last 12 months
    #[arg(long = "revenue-12-months", allow_hyphen_values = true)]
    pub revenue_12_months: Option<String>,

    /// Simples Nacional / Lucro Real: revenue for the month
    #[arg(long, allow_hyphen_values = true)]
    pub revenue_month: Option<String>,

    /// Simples Nacional: payroll for the month (optional)
    #[arg(long, allow_hyphen_values = true)]
    pub payroll: Option<String>,

    /// Simples Nacional: annex (I to V)
    #[arg(long)]
    pub annex: Option<String>,

    /// Lucro Presumido: revenue of the first month of the quarter
    #[arg(long = "revenue-1", allow_hyphen_values = true)]
    pub revenue_1: Option<String>,

    /// Lucro Presumido: revenue of the second month of the quarter
    #[arg(long = "revenue-2", allow_hyphen_values = true)]
    pub revenue_2: Option<String>,

    /// Lucro Presumido: revenue of the third month of the quarter
    #[arg(long = "revenue-3", allow_hyphen_values = true)]
    pub revenue_3: Option<String>,

    /// Lucro Presumido: activity type (Commerce, Services, Industry)
    #[arg(long)]
    pub activity: Option<String>,

    /// Lucro Real: expenses for the month
    #[arg(long, allow_hyphen_values = true)]
    pub expense_month: Option<String>,
}

impl FieldArgs {
    /// Presence checks and parsing for the fields of `regime`
    pub fn to_input(&self, regime: Regime) -> Result<TaxInput, InputError> {
        let input = match regime {
            Regime::SimplesNacional => TaxInput::SimplesNacional(SimplesNacionalInput {
                revenue_12_months: required_amount(
                    "revenue_12_months",
                    self.revenue_12_months.as_deref(),
                )?,
                revenue_month: required_amount("revenue_month", self.revenue_month.as_deref())?,
                payroll: optional_amount(self.payroll.as_deref()),
                annex: required_choice("annex", self.annex.as_deref(), Annex::parse, &Annex::ALL)?,
            }),
            Regime::LucroPresumido => TaxInput::LucroPresumido(LucroPresumidoInput {
                revenue_month_1: required_amount("revenue_1", self.revenue_1.as_deref())?,
                revenue_month_2: required_amount("revenue_2", self.revenue_2.as_deref())?,
                revenue_month_3: required_amount("revenue_3", self.revenue_3.as_deref())?,
                activity: required_choice(
                    "activity",
                    self.activity.as_deref(),
                    ActivityType::parse,
                    &ActivityType::ALL,
                )?,
            }),
            Regime::LucroReal => TaxInput::LucroReal(LucroRealInput {
                revenue_month: required_amount("revenue_month", self.revenue_month.as_deref())?,
                expense_month: required_amount("expense_month", self.expense_month.as_deref())?,
            }),
        };
        Ok(input)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RegimeArg {
    /// Simples Nacional
    #[value(alias = "simples")]
    SimplesNacional,
    /// Lucro Presumido
    #[value(alias = "presumido")]
    LucroPresumido,
    /// Lucro Real
    #[value(alias = "real")]
    LucroReal,
}

impl From<RegimeArg> for Regime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::SimplesNacional => Regime::SimplesNacional,
            RegimeArg::LucroPresumido => Regime::LucroPresumido,
            RegimeArg::LucroReal => Regime::LucroReal,
        }
    }
}

impl CalculateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let company = self.selected_company()?;
        let input = match &self.input {
            Some(path) => read_tax_input(path)?,
            None => {
                let regime = self.resolve_regime(company.as_ref())?;
                self.fields.to_input(regime)?
            }
        };
        log::info!("Calculating {}", input.regime());

        if self.json {
            let assessment = calculate(&input)?;
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        } else if self.breakdown {
            let assessment = calculate(&input)?;
            self.print_table(&assessment);
        } else {
            if let Some(company) = &company {
                println!("Empresa: {} - {}", company.name, company.cnpj);
                println!("Regime Tributário: {}", company.regime);
                println!();
            }
            println!("{}", compute(&input)?);
        }
        Ok(())
    }

    fn selected_company(&self) -> anyhow::Result<Option<Company>> {
        let Some(id) = &self.company else {
            return Ok(None);
        };
        let path = self
            .companies
            .as_ref()
            .context("a company file (--companies or TAXBR_COMPANIES) is required with --company")?;
        let registry = read_companies(path)?;
        Ok(Some(registry.require(id)?.clone()))
    }

    fn resolve_regime(&self, company: Option<&Company>) -> anyhow::Result<Regime> {
        match (company, self.regime.map(Regime::from)) {
            (Some(company), Some(regime)) if company.regime != regime => anyhow::bail!(
                "company {} is registered under {}, not {}",
                company.name,
                company.regime,
                regime
            ),
            (Some(company), _) => Ok(company.regime),
            (None, Some(regime)) => Ok(regime),
            (None, None) => anyhow::bail!("Select a company or a regime first (--company or --regime)"),
        }
    }

    fn print_table(&self, assessment: &TaxAssessment) {
        let rows = breakdown_rows(assessment);
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", assessment.regime());
        println!("{}", table);
    }
}

fn read_tax_input(path: &Path) -> anyhow::Result<TaxInput> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let input = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing calculator input {}", path.display()))?;
    Ok(input)
}

/// Row for the breakdown table output
#[derive(Debug, Clone, Tabled)]
pub struct BreakdownRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Valor")]
    value: String,
}

fn row(item: impl Into<String>, value: String) -> BreakdownRow {
    BreakdownRow {
        item: item.into(),
        value,
    }
}

fn component_rows(rows: &mut Vec<BreakdownRow>, components: [(&'static str, Decimal); 5]) {
    rows.extend(
        components
            .into_iter()
            .map(|(name, value)| row(name, format_brl(value))),
    );
}

pub fn breakdown_rows(assessment: &TaxAssessment) -> Vec<BreakdownRow> {
    let mut rows = Vec::new();
    match assessment {
        TaxAssessment::SimplesNacional(a) => {
            rows.push(row("Anexo", a.input.annex.label().to_string()));
            rows.push(row("Receita 12 meses", format_brl(a.input.revenue_12_months)));
            rows.push(row("Receita do mês", format_brl(a.input.revenue_month)));
            rows.push(row("Folha de pagamento", format_brl(a.input.payroll)));
            rows.push(row("Alíquota nominal", format_percent(a.nominal_rate())));
            rows.push(row("Dedução", format_brl(a.bracket.deduction)));
            rows.push(row("Alíquota efetiva", format_percent(a.effective_rate)));
            rows.push(row("Imposto a pagar", format_brl(a.monthly_tax)));
        }
        TaxAssessment::LucroPresumido(a) => {
            rows.push(row("Atividade", a.input.activity.to_string()));
            for (i, revenue) in a.input.revenues().iter().enumerate() {
                rows.push(row(format!("Receita mês {}", i + 1), format_brl(*revenue)));
            }
            rows.push(row("Receita média", format_brl(a.average_revenue)));
            rows.push(row(
                format!("Presunção ({})", format_rate(a.presumption_rate)),
                format_brl(a.presumed_base),
            ));
            component_rows(&mut rows, a.breakdown.components());
            rows.push(row("Total mensal", format_brl(a.breakdown.total)));
        }
        TaxAssessment::LucroReal(a) => {
            let input = a.input();
            rows.push(row("Receita do mês", format_brl(input.revenue_month)));
            rows.push(row("Despesas do mês", format_brl(input.expense_month)));
            match a {
                LucroRealAssessment::Loss { loss, .. } => {
                    rows.push(row("Prejuízo", format_brl(*loss)));
                    rows.push(row("Imposto a pagar", format_brl(Decimal::ZERO)));
                }
                LucroRealAssessment::Profit {
                    net_profit,
                    breakdown,
                    ..
                } => {
                    rows.push(row("Lucro líquido", format_brl(*net_profit)));
                    component_rows(&mut rows, breakdown.components());
                    rows.push(row("Total a pagar", format_brl(breakdown.total)));
                }
            }
        }
    }
    rows
}

//! Company command - register, list and inspect companies

use crate::cmd::read_companies;
use crate::core::money::format_brl;
use crate::core::{Company, NewCompany};
use clap::{Args, Subcommand};
use std::io;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct CompanyCommand {
    #[command(subcommand)]
    action: CompanyAction,
}

#[derive(Subcommand, Debug)]
enum CompanyAction {
    /// Validate a new company and print the normalized record
    Register(RegisterArgs),
    /// List the companies in a company file
    List(ListArgs),
    /// Show one company as JSON
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    /// Company name
    #[arg(long)]
    name: Option<String>,

    /// CNPJ, digits or masked
    #[arg(long)]
    cnpj: Option<String>,

    /// Company type (MEI, LTDA, SA, EIRELI, SLU)
    #[arg(long = "type")]
    company_type: Option<String>,

    /// Tax regime (Simples Nacional, Lucro Presumido, Lucro Real)
    #[arg(long)]
    regime: Option<String>,

    /// Monthly income in BRL
    #[arg(long)]
    monthly_income: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// Opening date (YYYY-MM-DD)
    #[arg(long)]
    opening_date: Option<String>,

    /// Print a CSV row (with header) instead of JSON
    #[arg(long)]
    csv: bool,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Company file (JSON or CSV, "-" for stdin)
    #[arg(long, env = "TAXBR_COMPANIES")]
    companies: PathBuf,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Company id
    id: String,

    /// Company file (JSON or CSV, "-" for stdin)
    #[arg(long, env = "TAXBR_COMPANIES")]
    companies: PathBuf,
}

impl CompanyCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match &self.action {
            CompanyAction::Register(args) => args.exec(),
            CompanyAction::List(args) => args.exec(),
            CompanyAction::Show(args) => args.exec(),
        }
    }
}

impl RegisterArgs {
    fn exec(&self) -> anyhow::Result<()> {
        let form = NewCompany {
            name: self.name.clone(),
            cnpj: self.cnpj.clone(),
            company_type: self.company_type.clone(),
            regime: self.regime.clone(),
            monthly_income: self.monthly_income.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            opening_date: self.opening_date.clone(),
        };
        let company = form.register()?;

        if self.csv {
            write_csv(std::iter::once(&company))
        } else {
            println!("{}", serde_json::to_string_pretty(&company)?);
            Ok(())
        }
    }
}

impl ListArgs {
    fn exec(&self) -> anyhow::Result<()> {
        let registry = read_companies(&self.companies)?;
        if self.csv {
            return write_csv(registry.iter());
        }

        if registry.is_empty() {
            println!("No companies registered");
            return Ok(());
        }

        let rows: Vec<CompanyRow> = registry.iter().map(CompanyRow::from).collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{}", table);
        Ok(())
    }
}

impl ShowArgs {
    fn exec(&self) -> anyhow::Result<()> {
        let registry = read_companies(&self.companies)?;
        let company = registry.require(&self.id)?;
        println!("{}", serde_json::to_string_pretty(company)?);
        Ok(())
    }
}

fn write_csv<'a, I>(companies: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a Company>,
{
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for company in companies {
        wtr.serialize(company)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Row for the company table output
#[derive(Debug, Clone, Tabled)]
struct CompanyRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Nome")]
    name: String,
    #[tabled(rename = "CNPJ")]
    cnpj: String,
    #[tabled(rename = "Tipo")]
    company_type: String,
    #[tabled(rename = "Renda Mensal")]
    monthly_income: String,
    #[tabled(rename = "Regime")]
    regime: String,
}

impl From<&Company> for CompanyRow {
    fn from(company: &Company) -> Self {
        CompanyRow {
            id: company.id.clone(),
            name: company.name.clone(),
            cnpj: company.cnpj.clone(),
            company_type: company.company_type.to_string(),
            monthly_income: format_brl(company.monthly_income),
            regime: company.regime.to_string(),
        }
    }
}

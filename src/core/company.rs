//! Company records, input masks and the in-memory registry

use super::error::{CompanyError, InputError};
use super::fields::{optional_amount, required_choice, required_text};
use super::regime::Regime;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use taxbr_derive::CsvSchema;

/// One column of the company CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvColumn {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompanyType {
    Mei,
    Ltda,
    Sa,
    Eireli,
    Slu,
}

impl CompanyType {
    pub const ALL: [CompanyType; 5] = [
        CompanyType::Mei,
        CompanyType::Ltda,
        CompanyType::Sa,
        CompanyType::Eireli,
        CompanyType::Slu,
    ];

    pub fn parse(s: &str) -> Option<CompanyType> {
        let s = s.trim().to_uppercase().replace('.', "");
        match s.split(" - ").next().unwrap_or_default() {
            "MEI" => Some(CompanyType::Mei),
            "LTDA" => Some(CompanyType::Ltda),
            "SA" => Some(CompanyType::Sa),
            "EIRELI" => Some(CompanyType::Eireli),
            "SLU" => Some(CompanyType::Slu),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CompanyType::Mei => "MEI",
            CompanyType::Ltda => "LTDA",
            CompanyType::Sa => "SA",
            CompanyType::Eireli => "EIRELI",
            CompanyType::Slu => "SLU",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanyType::Mei => "MEI - Microempreendedor Individual",
            CompanyType::Ltda => "LTDA - Sociedade Limitada",
            CompanyType::Sa => "S.A. - Sociedade Anônima",
            CompanyType::Eireli => "EIRELI - Empresa Individual",
            CompanyType::Slu => "SLU - Sociedade Limitada Unipessoal",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A registered company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, CsvSchema)]
pub struct Company {
    /// Registry id; derived from the CNPJ when left empty
    #[serde(default)]
    pub id: String,
    /// Company name
    pub name: String,
    /// CNPJ (00.000.000/0000-00)
    pub cnpj: String,
    /// MEI, LTDA, SA, EIRELI or SLU
    pub company_type: CompanyType,
    /// Simples Nacional, Lucro Presumido or Lucro Real
    pub regime: Regime,
    /// Monthly income in BRL
    #[serde(default, deserialize_with = "blank_as_zero")]
    #[schemars(with = "f64")]
    pub monthly_income: Decimal,
    /// Street, number, district, city - UF
    #[serde(default)]
    pub address: String,
    /// Phone ((00) 00000-0000)
    #[serde(default)]
    pub phone: String,
    /// Contact e-mail
    #[serde(default)]
    pub email: String,
    /// Opening date (YYYY-MM-DD)
    pub opening_date: Option<NaiveDate>,
}

/// Input root for the company JSON file
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompanyInput {
    pub companies: Vec<Company>,
}

/// Registration form: every field as typed by the user
#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: Option<String>,
    pub cnpj: Option<String>,
    pub company_type: Option<String>,
    pub regime: Option<String>,
    pub monthly_income: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_date: Option<String>,
}

impl NewCompany {
    /// Validate required fields, apply the CNPJ and phone masks and build the record
    pub fn register(&self) -> Result<Company, CompanyError> {
        let name = required_text("name", self.name.as_deref())?;
        let cnpj = format_cnpj(self.cnpj.as_deref().unwrap_or_default());
        let cnpj = required_text("cnpj", Some(cnpj.as_str()))?.to_string();
        let company_type = required_choice(
            "company_type",
            self.company_type.as_deref(),
            CompanyType::parse,
            &CompanyType::ALL,
        )?;
        let regime = required_choice("regime", self.regime.as_deref(), Regime::parse, &Regime::ALL)?;
        let opening_date = self
            .opening_date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| InputError::InvalidDate {
                    field: "opening_date",
                    value: d.to_string(),
                })
            })
            .transpose()?;

        let company = Company {
            id: company_id(&cnpj),
            name: name.to_string(),
            cnpj,
            company_type,
            regime,
            monthly_income: optional_amount(self.monthly_income.as_deref()),
            address: trimmed(&self.address),
            phone: format_phone(self.phone.as_deref().unwrap_or_default()),
            email: trimmed(&self.email),
            opening_date,
        };
        log::info!("Registered company {} ({})", company.name, company.id);
        Ok(company)
    }
}

/// CSV leaves absent amounts as empty cells
fn blank_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

fn trimmed(field: &Option<String>) -> String {
    field.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Stable id: first 16 hex chars of SHA-256 over the CNPJ digits
pub fn company_id(cnpj: &str) -> String {
    let digits: String = cnpj.chars().filter(char::is_ascii_digit).collect();
    let hash = Sha256::digest(digits.as_bytes());
    hex::encode(&hash[..8])
}

/// Progressive CNPJ mask `00.000.000/0000-00`; non-digits dropped, at most 14 digits
pub fn format_cnpj(text: &str) -> String {
    let mut out = String::with_capacity(18);
    for (i, d) in text.chars().filter(char::is_ascii_digit).take(14).enumerate() {
        match i {
            2 | 5 => out.push('.'),
            8 => out.push('/'),
            12 => out.push('-'),
            _ => {}
        }
        out.push(d);
    }
    out
}

/// Progressive phone mask: `(00) 0000-0000` for landlines, `(00) 00000-0000` for mobiles
pub fn format_phone(text: &str) -> String {
    let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).take(11).collect();
    if digits.len() <= 2 {
        return digits.into_iter().collect();
    }

    let (area, number) = digits.split_at(2);
    let split = if digits.len() <= 10 { 4 } else { 5 };
    let number: String = if number.len() > split {
        let (head, tail) = number.split_at(split);
        format!(
            "{}-{}",
            head.iter().collect::<String>(),
            tail.iter().collect::<String>()
        )
    } else {
        number.iter().collect()
    };
    format!("({}) {}", area.iter().collect::<String>(), number)
}

/// Companies held in memory for the lifetime of one command, keyed by id
#[derive(Debug, Default)]
pub struct CompanyRegistry {
    companies: Vec<Company>,
    index: HashMap<String, usize>,
}

impl CompanyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, assigning derived ids to records without one
    pub fn from_companies<I>(companies: I) -> Result<Self, CompanyError>
    where
        I: IntoIterator<Item = Company>,
    {
        let mut registry = Self::new();
        for company in companies {
            registry.add(company)?;
        }
        Ok(registry)
    }

    pub fn add(&mut self, mut company: Company) -> Result<&Company, CompanyError> {
        if company.id.trim().is_empty() {
            company.id = company_id(&company.cnpj);
        }
        if self.index.contains_key(&company.id) {
            return Err(CompanyError::Duplicate {
                id: company.id,
                name: company.name,
            });
        }
        log::debug!("Registry ADD {} {}", company.id, company.name);
        let pos = self.companies.len();
        self.index.insert(company.id.clone(), pos);
        self.companies.push(company);
        Ok(&self.companies[pos])
    }

    pub fn get(&self, id: &str) -> Option<&Company> {
        self.index.get(id.trim()).map(|&pos| &self.companies[pos])
    }

    pub fn require(&self, id: &str) -> Result<&Company, CompanyError> {
        self.get(id)
            .ok_or_else(|| CompanyError::NotFound(id.trim().to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

pub fn read_companies_json<R: Read>(reader: R) -> anyhow::Result<Vec<Company>> {
    let input: CompanyInput = serde_json::from_reader(reader)?;
    Ok(input.companies)
}

pub fn read_companies_csv<R: Read>(reader: R) -> anyhow::Result<Vec<Company>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut companies = Vec::new();
    for record in rdr.deserialize() {
        companies.push(record?);
    }
    log::info!("Read {} company csv records", companies.len());
    Ok(companies)
}

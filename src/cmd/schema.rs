//! Schema command - print expected input formats

use crate::core::{ActivityType, Annex, Company, CompanyInput, CompanyType, Regime, TaxInput};
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the calculator input (`calculate --input`)
    JsonSchema,
    /// JSON Schema for the company JSON file
    CompanyJsonSchema,
    /// CSV header row for the company CSV file
    CsvHeader,
    /// Company CSV column descriptions and accepted options
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                let schema = schema_for!(TaxInput);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::CompanyJsonSchema => {
                let schema = schema_for!(CompanyInput);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::CsvHeader => println!("{}", Company::csv_columns().join(",")),
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
        Ok(())
    }

    fn print_csv_fields(&self) {
        println!("Company CSV Format");
        println!("==================");
        println!();
        for column in Company::csv_schema() {
            let req = if column.required { "required" } else { "optional" };
            println!("{:16} ({:8})  {}", column.name, req, column.description);
        }
        println!();
        println!("Company types: {}", join(CompanyType::ALL.iter().map(|t| t.label())));
        println!("Regimes:       {}", join(Regime::ALL.iter().map(|r| r.name())));
        println!();
        println!("Simples Nacional annexes: {}", join(Annex::ALL.iter().map(|a| a.label())));
        println!(
            "Lucro Presumido activities: {}",
            join(ActivityType::ALL.iter().map(|a| a.name()))
        );
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

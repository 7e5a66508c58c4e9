pub mod calculate;
pub mod company;
pub mod schema;

use crate::core::company::{read_companies_csv, read_companies_json};
use crate::core::CompanyRegistry;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Load the company file (JSON or CSV, or stdin with "-") into a registry
pub fn read_companies(path: &Path) -> anyhow::Result<CompanyRegistry> {
    let companies = if path.as_os_str() == "-" {
        read_from_stdin()?
    } else {
        read_from_file(path).with_context(|| format!("reading companies from {}", path.display()))?
    };
    let registry = CompanyRegistry::from_companies(companies)?;
    log::info!("Loaded {} companies", registry.len());
    Ok(registry)
}

fn read_from_file(path: &Path) -> anyhow::Result<Vec<crate::core::Company>> {
    let reader = BufReader::new(File::open(path)?);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        read_companies_json(reader)
    } else {
        read_companies_csv(reader)
    }
}

fn read_from_stdin() -> anyhow::Result<Vec<crate::core::Company>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    let looks_like_json = buffer
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'{');
    let cursor = io::Cursor::new(buffer);
    if looks_like_json {
        read_companies_json(cursor)
    } else {
        read_companies_csv(cursor)
    }
}

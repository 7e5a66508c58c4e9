//! E2E tests for the calculate, company and schema commands

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::process::{Command, Output};

fn taxbr(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taxbr"))
        .args(args)
        .env_remove("TAXBR_COMPANIES")
        .output()
        .expect("Failed to execute command")
}

/// Simples Nacional in the first bracket from command line fields
#[test]
fn calculate_simples_nacional() {
    let output = taxbr(&[
        "calculate",
        "--regime",
        "simples-nacional",
        "--revenue-12-months",
        "150000",
        "--revenue-month",
        "10000",
        "--annex",
        "III",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("CÁLCULO SIMPLES NACIONAL - Anexo III"));
    assert!(stdout.contains("Folha de pagamento: R$ 0,00"));
    assert!(stdout.contains("Alíquota efetiva: 6,00%"));
    assert!(stdout.contains("IMPOSTO A PAGAR: R$ 600,00"));
}

/// Lucro Real with a loss reports nothing due
#[test]
fn calculate_lucro_real_loss() {
    let output = taxbr(&[
        "calculate",
        "-r",
        "real",
        "--revenue-month",
        "5000",
        "--expense-month",
        "8000",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("PREJUÍZO NO PERÍODO: R$ 3.000,00"));
    assert!(stdout.contains("IMPOSTO A PAGAR: R$ 0,00"));
}

/// Regime taken from a registered company
#[test]
fn calculate_for_company() {
    let output = taxbr(&[
        "calculate",
        "--company",
        "metalurgica",
        "--companies",
        "tests/data/companies.json",
        "--revenue-month",
        "50000",
        "--expense-month",
        "20000",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Empresa: Metalúrgica Beta - 33.444.555/0001-66"));
    assert!(stdout.contains("Regime Tributário: Lucro Real"));
    assert!(stdout.contains("TOTAL A PAGAR: R$ 12.825,00"));
}

/// Company registered under another regime than the one requested
#[test]
fn calculate_for_company_with_mismatched_regime() {
    let output = taxbr(&[
        "calculate",
        "--company",
        "padaria",
        "--companies",
        "tests/data/companies.json",
        "--regime",
        "lucro-real",
        "--revenue-month",
        "1",
        "--expense-month",
        "1",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("registered under Simples Nacional"));
}

/// No regime and no company
#[test]
fn calculate_without_regime_fails() {
    let output = taxbr(&["calculate", "--revenue-month", "1000"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Select a company or a regime first"));
}

/// Missing required field names the field
#[test]
fn calculate_missing_field_fails() {
    let output = taxbr(&[
        "calculate",
        "--regime",
        "lucro-presumido",
        "--revenue-1",
        "10000",
        "--revenue-2",
        "12000",
        "--activity",
        "Services",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("required field missing: revenue_3"));
}

/// Zero 12-month revenue is rejected instead of dividing by zero
#[test]
fn calculate_zero_trailing_revenue_fails() {
    let output = taxbr(&[
        "calculate",
        "--regime",
        "simples",
        "--revenue-12-months",
        "0",
        "--revenue-month",
        "1000",
        "--annex",
        "I",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("must be greater than zero"));
}

/// Amounts past the decimal range fail cleanly instead of crashing
#[test]
fn calculate_huge_revenue_fails() {
    let output = taxbr(&[
        "calculate",
        "-r",
        "presumido",
        "--revenue-1",
        "79228162514264337593543950335",
        "--revenue-2",
        "1",
        "--revenue-3",
        "1",
        "--activity",
        "Services",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("amounts too large to calculate"));
    assert!(!stderr.contains("panicked"));
}

/// JSON input file and JSON output
#[test]
fn calculate_json_input_and_output() {
    let output = taxbr(&[
        "calculate",
        "--input",
        "tests/data/presumido_services.json",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["regime"], "Lucro Presumido");
    let decimal = |v: &serde_json::Value| v.as_str().unwrap().parse::<Decimal>().unwrap();
    assert_eq!(decimal(&value["presumed_base"]), dec!(3520));
    assert_eq!(decimal(&value["breakdown"]["total"]), dec!(1246.30));
}

/// Breakdown table output
#[test]
fn calculate_breakdown_table() {
    let output = taxbr(&[
        "calculate",
        "--regime",
        "lucro-real",
        "--revenue-month",
        "50000",
        "--expense-month",
        "20000",
        "--breakdown",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Lucro líquido"));
    assert!(stdout.contains("R$ 30.000,00"));
    assert!(stdout.contains("Total a pagar"));
}

/// Register prints the masked record
#[test]
fn company_register() {
    let output = taxbr(&[
        "company",
        "register",
        "--name",
        "Oficina Delta",
        "--cnpj",
        "55666777000188",
        "--type",
        "MEI",
        "--regime",
        "Simples Nacional",
        "--phone",
        "1132345678",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("\"cnpj\": \"55.666.777/0001-88\""));
    assert!(stdout.contains("\"phone\": \"(11) 3234-5678\""));
    assert!(stdout.contains("\"company_type\": \"MEI\""));
}

/// Register without a regime fails with the field name
#[test]
fn company_register_missing_regime() {
    let output = taxbr(&[
        "company",
        "register",
        "--name",
        "Oficina Delta",
        "--cnpj",
        "55666777000188",
        "--type",
        "MEI",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("required field missing: regime"));
}

/// List companies from a CSV file
#[test]
fn company_list_csv_file() {
    let output = taxbr(&["company", "list", "--companies", "tests/data/companies.csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Padaria Pão Quente"));
    assert!(stdout.contains("Loja Gama"));
    assert!(stdout.contains("R$ 45.000,00"));
}

/// Show an unknown company
#[test]
fn company_show_unknown() {
    let output = taxbr(&[
        "company",
        "show",
        "nope",
        "--companies",
        "tests/data/companies.json",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("company not found: nope"));
}

/// Schema outputs
#[test]
fn schema_formats() {
    let output = taxbr(&["schema", "csv-header"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout.trim(),
        "id,name,cnpj,company_type,regime,monthly_income,address,phone,email,opening_date"
    );

    let output = taxbr(&["schema", "json-schema"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("revenue_12_months"));
    assert!(stdout.contains("Lucro Presumido"));

    let output = taxbr(&["schema", "csv-fields"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("cnpj"));
    assert!(stdout.contains("(required)"));
}

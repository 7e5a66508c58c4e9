use clap::{Parser, Subcommand};
use taxbr::cmd;

#[derive(Parser, Debug)]
#[command(name = "taxbr", version)]
#[command(about = "Simulate Brazilian company taxes: Simples Nacional, Lucro Presumido, Lucro Real")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the monthly tax estimate for a regime or a registered company
    Calculate(cmd::calculate::CalculateCommand),
    /// Register, list and inspect companies
    Company(cmd::company::CompanyCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calculate(calculate) => calculate.exec(),
        Command::Company(company) => company.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}

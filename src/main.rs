mod commands;

use clap::{Args, Parser, Subcommand};
use kredit_score::config::AppConfig;
use kredit_score::error::AppError;
use kredit_score::telemetry;
use kredit_score::LoanType;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "kreditscore",
    about = "Debt-to-income and credit score calculations for loan applicants",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate loan terms and compute the monthly payment and debt-to-income ratio
    Quote(QuoteArgs),
    /// Score an applicant profile read from a JSON file
    Score(ProfileArgs),
    /// Show which profile fields are locked or still editable
    Fields(ProfileArgs),
    /// Print the referral code and deep link for a user
    Referral(ReferralArgs),
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Loan product: microloan or carloan
    #[arg(long, value_parser = parse_loan_type)]
    pub(crate) loan_type: LoanType,
    /// Requested principal in UZS
    #[arg(long, value_parser = parse_decimal)]
    pub(crate) principal: Decimal,
    /// Annual interest rate in percent
    #[arg(long, value_parser = parse_decimal)]
    pub(crate) rate: Decimal,
    /// Term in months
    #[arg(long)]
    pub(crate) term: u32,
    /// Monthly income in UZS
    #[arg(long, value_parser = parse_decimal)]
    pub(crate) income: Decimal,
    /// Monthly payments on other loans in UZS
    #[arg(long, value_parser = parse_decimal)]
    pub(crate) other_payments: Option<Decimal>,
}

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Path to an applicant profile JSON document
    #[arg(long)]
    pub(crate) profile: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ReferralArgs {
    /// Numeric user identifier
    #[arg(long)]
    pub(crate) user_id: i64,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "kreditscore starting");

    match cli.command {
        Command::Quote(args) => print_json(&commands::quote(&config, &args)),
        Command::Score(args) => print_json(&commands::score(&config, &args.profile)?),
        Command::Fields(args) => print_json(&commands::fields(&args.profile)?),
        Command::Referral(args) => print_json(&commands::referral(&config, args.user_id)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();
    cleaned
        .parse::<Decimal>()
        .map_err(|err| format!("failed to parse '{raw}' as a decimal amount ({err})"))
}

fn parse_loan_type(raw: &str) -> Result<LoanType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "microloan" | "micro" => Ok(LoanType::Microloan),
        "carloan" | "car" => Ok(LoanType::Carloan),
        other => Err(format!(
            "unknown loan type '{other}', expected microloan or carloan"
        )),
    }
}

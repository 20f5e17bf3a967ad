use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::info;

use lending_core::config::AppConfig;
use lending_core::error::AppError;
use lending_core::telemetry;
use lending_core::underwriting::{
    AmortizationCalculator, BorrowerProfile, EligibilityEngine, InMemoryLendingStore,
    SimulatedBureau, UnderwritingService, UserId,
};

#[derive(Parser, Debug)]
#[command(
    name = "lending-core",
    about = "Run loan eligibility checks and EMI calculations from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a credit score against the tier ladder
    Evaluate(EvaluateArgs),
    /// Compute an EMI repayment plan with its amortization schedule
    Plan(PlanArgs),
    /// Run the full eligibility-then-calculation flow against the simulated bureau
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    #[arg(long)]
    credit_score: u16,
    #[arg(long, default_value = "0")]
    monthly_income: Decimal,
    #[arg(long, default_value = "0")]
    existing_emi: Decimal,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[arg(long)]
    principal: Decimal,
    /// Tenure in months (3, 6, 9, or 12)
    #[arg(long)]
    tenure: u32,
}

#[derive(Args, Debug)]
struct DemoArgs {
    #[arg(long, default_value = "demo-user")]
    user_id: String,
    #[arg(long, default_value = "40000")]
    monthly_income: Decimal,
    /// Tenure in months (3, 6, 9, or 12)
    #[arg(long, default_value = "12")]
    tenure: u32,
    /// Pin the simulated bureau to a fixed credit score
    #[arg(long)]
    credit_score: Option<u16>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Evaluate(args) => {
            let engine = EligibilityEngine::new(config.lending.clone());
            let decision =
                engine.evaluate(args.credit_score, args.monthly_income, args.existing_emi);
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        Command::Plan(args) => {
            let calculator = AmortizationCalculator::new(config.lending.clone());
            let result = calculator
                .plan(args.principal, args.tenure)
                .map_err(lending_core::underwriting::UnderwritingError::from)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Demo(args) => {
            let bureau = match args.credit_score {
                Some(score) => Arc::new(SimulatedBureau::with_fixed_score(score)),
                None => Arc::new(SimulatedBureau::default()),
            };
            let store = Arc::new(InMemoryLendingStore::default());
            let service = UnderwritingService::new(bureau, store, config.lending.clone());

            let borrower = BorrowerProfile {
                user_id: UserId(args.user_id),
                monthly_income: args.monthly_income,
            };

            let record = service.check_eligibility(&borrower)?;
            info!(status = record.status.label(), "eligibility check complete");

            let eligibility = record.status_view();
            match service.calculate_loan(&borrower.user_id, args.tenure) {
                Ok(result) => {
                    let output = json!({
                        "eligibility": eligibility,
                        "calculation": result,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                Err(err) => {
                    let output = json!({
                        "eligibility": eligibility,
                        "calculation_error": err.to_string(),
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
        }
    }

    Ok(())
}

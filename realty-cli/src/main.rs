use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use realty_analysis::{AnalysisClient, AnalysisConfig, down_payment_prompt, roi_prompt};
use realty_core::calculations::{DownPaymentWorksheet, InvestmentWorksheet};
use realty_core::models::{DownPaymentScenario, InvestmentScenario, LoanTerm, LoanType, ModeValue};
use realty_core::summary::{
    DownPaymentAnalysisData, RoiAnalysisData, down_payment_summary, investment_summary,
};
use realty_core::{FieldErrors, validate_down_payment, validate_investment};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Real-estate affordability and investment-return estimator.
///
/// Numeric flags take raw text, exactly as a form field would: currency
/// punctuation is tolerated and malformed input reads as zero.
#[derive(Debug, Parser)]
#[command(name = "realty")]
struct Cli {
    /// Analysis config file (TOML with `api_key` and optional `model`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Gemini API key; overrides the config file and GEMINI_API_KEY.
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Request narrative commentary after printing the summary.
    /// Skipped while any input is invalid.
    #[arg(long, global = true)]
    analyze: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate down payment, cash to close, and an optional monthly payment.
    DownPayment(DownPaymentArgs),
    /// Estimate investment returns: cash flow, cap rate, cash-on-cash.
    Roi(RoiArgs),
}

#[derive(Debug, Args)]
struct DownPaymentArgs {
    /// Home price, dollars.
    #[arg(long, default_value = "")]
    home_price: String,

    /// Down payment as a percentage of the home price.
    #[arg(long, conflicts_with = "down_payment_amount")]
    down_payment_percent: Option<String>,

    /// Down payment as a flat dollar amount.
    #[arg(long)]
    down_payment_amount: Option<String>,

    /// Loan program: Conventional, FHA, VA, USDA, or Other.
    /// Selecting FHA with no down payment given seeds it to 3.5%.
    #[arg(long, default_value = "conventional")]
    loan_type: LoanType,

    /// Closing costs as a percentage of the home price.
    #[arg(long, conflicts_with = "closing_costs_amount")]
    closing_costs_percent: Option<String>,

    /// Closing costs as a flat dollar amount.
    #[arg(long)]
    closing_costs_amount: Option<String>,

    /// Also estimate the monthly payment.
    #[arg(long)]
    estimate_monthly: bool,

    /// Annual interest rate (APR), percent.
    #[arg(long, default_value = "")]
    interest_rate: String,

    /// Loan term in years: 15 or 30.
    #[arg(long, default_value = "30")]
    loan_term: LoanTerm,

    /// Property tax as a percentage of the home price per year.
    #[arg(long, conflicts_with = "tax_annual")]
    tax_percent: Option<String>,

    /// Property tax as an annual dollar amount.
    #[arg(long)]
    tax_annual: Option<String>,

    /// Homeowners insurance, dollars per month.
    #[arg(long, default_value = "")]
    insurance: String,

    /// HOA dues, dollars per month.
    #[arg(long, default_value = "")]
    hoa: String,
}

#[derive(Debug, Args)]
struct RoiArgs {
    /// Purchase price, dollars.
    #[arg(long, default_value = "")]
    purchase_price: String,

    /// Optional property label used in the summary.
    #[arg(long, default_value = "")]
    address: String,

    /// Down payment, percent of purchase price.
    #[arg(long, default_value = "")]
    down_payment_percent: String,

    /// Annual interest rate (APR), percent.
    #[arg(long, default_value = "")]
    interest_rate: String,

    /// Loan term in years: 15 or 30.
    #[arg(long, default_value = "30")]
    loan_term: LoanTerm,

    /// Closing costs as a percentage of the purchase price.
    #[arg(long, conflicts_with = "closing_costs_amount")]
    closing_costs_percent: Option<String>,

    /// Closing costs as a flat dollar amount.
    #[arg(long)]
    closing_costs_amount: Option<String>,

    /// Rehab / initial repairs, dollars.
    #[arg(long, default_value = "")]
    rehab: String,

    /// Gross rent, dollars per month.
    #[arg(long, default_value = "")]
    monthly_rent: String,

    /// Other income, dollars per month.
    #[arg(long, default_value = "")]
    other_income: String,

    /// Vacancy rate, percent of gross income.
    #[arg(long, default_value = "")]
    vacancy_rate: String,

    /// Property management, percent of gross rent.
    #[arg(long, default_value = "")]
    prop_mgmt: String,

    /// Repairs and maintenance, dollars per month.
    #[arg(long, default_value = "")]
    repairs_maintenance: String,

    /// CapEx reserve, percent of gross income.
    #[arg(long, default_value = "")]
    capex: String,

    /// Property tax as a percentage of the purchase price per year.
    #[arg(long, conflicts_with = "tax_annual")]
    tax_percent: Option<String>,

    /// Property tax as an annual dollar amount.
    #[arg(long)]
    tax_annual: Option<String>,

    /// Insurance premium, dollars per YEAR.
    #[arg(long, default_value = "")]
    insurance: String,

    /// HOA dues, dollars per month.
    #[arg(long, default_value = "")]
    hoa: String,

    /// Utilities paid by the owner, dollars per month.
    #[arg(long, default_value = "")]
    utilities: String,
}

// ─── scenario assembly ───────────────────────────────────────────────────────

fn mode_value(
    percent: Option<String>,
    dollar: Option<String>,
) -> ModeValue {
    match (percent, dollar) {
        (_, Some(v)) => ModeValue::dollar(v),
        (Some(v), None) => ModeValue::percent(v),
        (None, None) => ModeValue::default(),
    }
}

fn build_down_payment_scenario(args: DownPaymentArgs) -> DownPaymentScenario {
    let mut scenario = DownPaymentScenario {
        home_price: args.home_price,
        down_payment: mode_value(args.down_payment_percent, args.down_payment_amount),
        closing_costs: mode_value(args.closing_costs_percent, args.closing_costs_amount),
        estimate_monthly: args.estimate_monthly,
        interest_rate: args.interest_rate,
        loan_term: args.loan_term,
        property_tax: mode_value(args.tax_percent, args.tax_annual),
        insurance: args.insurance,
        hoa: args.hoa,
        ..Default::default()
    };
    // Routed through the setter so the FHA seeding rule applies.
    scenario.set_loan_type(args.loan_type);
    scenario
}

fn build_investment_scenario(args: RoiArgs) -> InvestmentScenario {
    InvestmentScenario {
        purchase_price: args.purchase_price,
        property_address: args.address,
        down_payment_percent: args.down_payment_percent,
        interest_rate: args.interest_rate,
        loan_term: args.loan_term,
        closing_costs: mode_value(args.closing_costs_percent, args.closing_costs_amount),
        rehab: args.rehab,
        monthly_rent: args.monthly_rent,
        other_income: args.other_income,
        vacancy_rate: args.vacancy_rate,
        prop_mgmt: args.prop_mgmt,
        repairs_maintenance: args.repairs_maintenance,
        capex: args.capex,
        property_tax: mode_value(args.tax_percent, args.tax_annual),
        insurance: args.insurance,
        hoa: args.hoa,
        utilities: args.utilities,
    }
}

// ─── analysis wiring ─────────────────────────────────────────────────────────

/// Resolves the analysis configuration: config file first, then the
/// GEMINI_API_KEY environment variable, then the --api-key override. The
/// environment is read here at the edge; nothing below main touches it.
fn resolve_analysis_config(
    config_path: Option<&PathBuf>,
    api_key_flag: Option<String>,
) -> anyhow::Result<AnalysisConfig> {
    let mut config = match config_path {
        Some(path) => AnalysisConfig::from_toml_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Ok(env_key) = std::env::var("GEMINI_API_KEY") {
        config.api_key.get_or_insert(env_key);
    }
    if api_key_flag.is_some() {
        config.api_key = api_key_flag;
    }
    Ok(config)
}

fn report_errors(errors: &FieldErrors) {
    for (field, message) in errors {
        warn!("{field}: {message}");
    }
}

fn run_analysis(
    inputs_valid: bool,
    config: AnalysisConfig,
    prompt: String,
) {
    if !inputs_valid {
        warn!("analysis skipped while inputs are invalid");
        return;
    }
    let client = AnalysisClient::new(config);
    println!("\n{}", client.analyze(&prompt));
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let analysis_config = resolve_analysis_config(cli.config.as_ref(), cli.api_key)?;

    match cli.command {
        Command::DownPayment(args) => {
            let scenario = build_down_payment_scenario(args);
            let errors = validate_down_payment(&scenario);
            report_errors(&errors);

            let result = DownPaymentWorksheet::new().calculate(&scenario);
            println!("{}", down_payment_summary(&scenario, &result));

            if cli.analyze {
                let data = DownPaymentAnalysisData::from_scenario(&scenario, &result);
                run_analysis(errors.is_empty(), analysis_config, down_payment_prompt(&data));
            }
        }
        Command::Roi(args) => {
            let scenario = build_investment_scenario(args);
            let errors = validate_investment(&scenario);
            report_errors(&errors);

            let result = InvestmentWorksheet::new().calculate(&scenario);
            println!("{}", investment_summary(&scenario, &result));

            if cli.analyze {
                let data = RoiAnalysisData::from_scenario(&scenario, &result);
                run_analysis(errors.is_empty(), analysis_config, roi_prompt(&data));
            }
        }
    }

    Ok(())
}

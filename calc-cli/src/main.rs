use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use calc_forms::catalog::Calculator;
use calc_forms::forms::{BmiForm, BmrForm, InstallmentForm};
use calc_forms::options::{DownPaymentRate, LoanTerm};
use calc_forms::utils::{parse_age, parse_field, parse_sex, parse_text};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Everyday calculators: BMI, BMR and car installments.
///
/// Each subcommand fills the matching form from the given field values and
/// prints the resulting snapshot. Fields accept raw text; a blank or
/// unparseable field is simply left unset, and an incomplete form shows
/// its result as the 0.00 placeholder rather than failing.
#[derive(Debug, Parser)]
#[command(name = "calc", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Body-mass index from weight and height.
    Bmi {
        /// Body weight in kilograms.
        #[arg(long, default_value = "")]
        weight: String,

        /// Body height in centimetres.
        #[arg(long, default_value = "")]
        height: String,
    },

    /// Basal metabolic rate (Mifflin-St Jeor).
    Bmr {
        /// Body weight in kilograms.
        #[arg(long, default_value = "")]
        weight: String,

        /// Body height in centimetres.
        #[arg(long, default_value = "")]
        height: String,

        /// Age in whole years.
        #[arg(long, default_value = "")]
        age: String,

        /// Either "male" or "female".
        #[arg(long, default_value = "")]
        sex: String,
    },

    /// Monthly car-loan installment.
    Installment {
        /// Name of the person running the numbers.
        #[arg(long, default_value = "")]
        name: String,

        /// Purchase price in currency units.
        #[arg(long, default_value = "")]
        price: String,

        /// Down payment percentage: 15, 20, 30 or 35.
        #[arg(long, default_value = "15")]
        down: String,

        /// Term in months: 12, 24, 36, 48, 60 or 72.
        #[arg(long, default_value = "12")]
        term: String,

        /// Annual interest rate in percent.
        #[arg(long, default_value = "")]
        rate: String,
    },

    /// List the available calculators.
    List,
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

// ─── subcommand handlers ─────────────────────────────────────────────────────

fn run_bmi(
    weight: &str,
    height: &str,
) {
    let mut form = BmiForm::new();
    form.set_weight(parse_field(weight));
    form.set_height(parse_field(height));

    let snapshot = form.calculate();
    debug!(phase = snapshot.phase.as_str(), "bmi form evaluated");
    println!("{snapshot}");
}

fn run_bmr(
    weight: &str,
    height: &str,
    age: &str,
    sex: &str,
) {
    let mut form = BmrForm::new();
    form.set_weight(parse_field(weight));
    form.set_height(parse_field(height));
    form.set_age(parse_age(age));
    form.set_sex(parse_sex(sex));

    let snapshot = form.calculate();
    debug!(phase = snapshot.phase.as_str(), "bmr form evaluated");
    println!("{snapshot}");
}

fn run_installment(
    name: &str,
    price: &str,
    down: &str,
    term: &str,
    rate: &str,
) {
    let mut form = InstallmentForm::new();
    form.set_user_name(parse_text(name));
    form.set_price(parse_field(price));
    form.set_annual_rate(parse_field(rate));

    match DownPaymentRate::parse(down) {
        Some(down_payment) => {
            form.set_down_payment(down_payment);
        }
        None => warn!(input = %down, "down payment not in the allowed set, keeping default"),
    }
    match LoanTerm::parse(term) {
        Some(loan_term) => {
            form.set_term(loan_term);
        }
        None => warn!(input = %term, "term not in the allowed set, keeping default"),
    }

    let snapshot = form.calculate();
    debug!(phase = snapshot.phase.as_str(), "installment form evaluated");
    println!("{snapshot}");
}

fn run_list() {
    for calculator in Calculator::ALL {
        println!(
            "{:<16}{:<28}{}",
            calculator.slug(),
            calculator.title(),
            calculator.description()
        );
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Bmi { weight, height } => run_bmi(&weight, &height),
        Command::Bmr {
            weight,
            height,
            age,
            sex,
        } => run_bmr(&weight, &height, &age, &sex),
        Command::Installment {
            name,
            price,
            down,
            term,
            rate,
        } => run_installment(&name, &price, &down, &term, &rate),
        Command::List => run_list(),
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use miette::Result;
use std::io::BufRead;
use std::io::BufReader;
use tenet::{
    AggregateFailure, Batch, EmailOptions, Outcome, Shape, divide, render_error,
    validate_email_address_with, validate_integer,
};

/// Tenet - typed outcomes and validated values
#[derive(Parser, Debug)]
#[command(name = "tenet")]
#[command(about = "Divide numbers, validate values and measure shapes", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Divide `a/b` pairs and print each outcome
    Divide {
        /// Exit with an error when any division failed
        #[arg(long)]
        fail_fast: bool,

        /// Divisions such as `6/3` (if not provided, reads lines from stdin)
        pairs: Vec<String>,
    },

    /// Check that numbers have no fractional part
    Integer {
        /// Numbers to check (if not provided, reads lines from stdin)
        values: Vec<String>,
    },

    /// Check addresses against the RFC 5321 mailbox grammar
    Email {
        /// Reject `[...]` address literals
        #[arg(long)]
        no_address_literals: bool,

        /// Longest accepted address, in octets
        #[arg(long, default_value_t = EmailOptions::default().max_address_len)]
        max_address_len: usize,

        /// Addresses to check (if not provided, reads lines from stdin)
        addresses: Vec<String>,
    },

    /// Print the largest dimension of a shape
    Shape {
        /// Scale every dimension by two first
        #[arg(long)]
        doubled: bool,

        #[command(subcommand)]
        shape: ShapeArgs,
    },
}

#[derive(Subcommand, Debug)]
enum ShapeArgs {
    Sphere { radius: f64 },
    Cuboid { length: f64, width: f64, height: f64 },
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
enum CliError {
    #[error("expected a division such as `6/3`, got {0:?}")]
    #[diagnostic(code(tenet::divide::syntax))]
    NotADivision(String),

    #[error("{0:?} is not a number")]
    #[diagnostic(code(tenet::number))]
    NotANumber(String),

    #[error("{0}")]
    #[diagnostic(code(tenet::divide::failed))]
    Divisions(AggregateFailure),

    #[error("{rejected} of {total} values were rejected")]
    #[diagnostic(code(tenet::rejected))]
    Rejected { rejected: usize, total: usize },

    #[error("error reading line from stdin")]
    #[diagnostic(code(tenet::io))]
    Stdin(#[source] std::io::Error),
}

/// Positional values, or stdin lines when there are none.
fn gather_inputs(values: Vec<String>) -> Result<Vec<String>, CliError> {
    if !values.is_empty() {
        return Ok(values);
    }

    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(CliError::Stdin)?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    tracing::debug!(count = lines.len(), "read values from stdin");
    Ok(lines)
}

fn parse_number(text: &str) -> Result<f64, CliError> {
    text.trim()
        .parse()
        .map_err(|_| CliError::NotANumber(text.to_string()))
}

fn parse_division(text: &str) -> Result<(f64, f64), CliError> {
    let (dividend, divisor) = text
        .split_once('/')
        .ok_or_else(|| CliError::NotADivision(text.to_string()))?;
    Ok((parse_number(dividend)?, parse_number(divisor)?))
}

fn run_divide(pairs: Vec<String>, fail_fast: bool) -> Result<(), CliError> {
    let mut batch = Batch::new();
    for text in gather_inputs(pairs)? {
        let (dividend, divisor) = parse_division(&text)?;
        let outcome = divide(dividend, divisor);
        match &outcome {
            Outcome::Success(quotient) => println!("{} = {}", text, quotient),
            Outcome::Failure(failure) => println!("{}: {}", text, failure),
        }
        batch.push(outcome);
    }

    if fail_fast {
        batch.into_result().map_err(CliError::Divisions)?;
    }
    Ok(())
}

fn run_integer(values: Vec<String>) -> Result<(), CliError> {
    let values = gather_inputs(values)?;
    let mut rejected = 0;
    for text in &values {
        match validate_integer(parse_number(text)?) {
            Ok(valid) => println!("{}: integer", valid),
            Err(e) => {
                render_error(&e);
                rejected += 1;
            }
        }
    }
    check_rejected(rejected, values.len())
}

fn run_email(addresses: Vec<String>, options: &EmailOptions) -> Result<(), CliError> {
    let addresses = gather_inputs(addresses)?;
    let mut rejected = 0;
    for address in &addresses {
        match validate_email_address_with(address, options) {
            Ok(valid) => println!(
                "{}: valid (local part {:?}, domain {:?})",
                valid,
                valid.local_part(),
                valid.domain()
            ),
            Err(e) => {
                render_error(&e);
                rejected += 1;
            }
        }
    }
    check_rejected(rejected, addresses.len())
}

fn check_rejected(rejected: usize, total: usize) -> Result<(), CliError> {
    if rejected > 0 {
        return Err(CliError::Rejected { rejected, total });
    }
    Ok(())
}

fn run_shape(shape: ShapeArgs, doubled: bool) {
    let shape = match shape {
        ShapeArgs::Sphere { radius } => Shape::sphere(radius),
        ShapeArgs::Cuboid {
            length,
            width,
            height,
        } => Shape::cuboid(length, width, height),
    };
    let shape = if doubled { shape.doubled() } else { shape };
    println!("{:?}", shape);
    println!("max dimension: {}", shape.max_dimension());
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match args.command {
        Command::Divide { fail_fast, pairs } => run_divide(pairs, fail_fast)?,
        Command::Integer { values } => run_integer(values)?,
        Command::Email {
            no_address_literals,
            max_address_len,
            addresses,
        } => {
            let options = EmailOptions {
                allow_address_literals: !no_address_literals,
                max_address_len,
                ..EmailOptions::default()
            };
            run_email(addresses, &options)?
        }
        Command::Shape { doubled, shape } => run_shape(shape, doubled),
    }

    Ok(())
}

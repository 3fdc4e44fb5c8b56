//! `addrspec` - check and parse email addresses from the command line.
//!
//! Addresses are taken from the arguments, or one per line from stdin when
//! no argument is given.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod report;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use report::{Format, Report};

#[derive(Debug, Parser)]
#[command(name = "addrspec", version, about = "Validate and parse RFC 5322 email addresses")]
struct Cli {
    /// Log why each rejected address failed
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report whether each address is valid
    Check(InputArgs),
    /// Split each address into display name, local part and domain
    Parse(ParseArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Addresses to examine; read from stdin, one per line, when omitted
    addresses: Vec<String>,
}

#[derive(Debug, Args)]
struct ParseArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Print one JSON object per line
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Runs a command, returning whether every input was a valid address.
fn run(cli: Cli) -> Result<bool> {
    let (inputs, format) = match cli.command {
        Command::Check(args) => (read_inputs(args)?, Format::Verdict),
        Command::Parse(ParseArgs { input, json: false }) => (read_inputs(input)?, Format::Parts),
        Command::Parse(ParseArgs { input, json: true }) => (read_inputs(input)?, Format::Json),
    };
    debug!(count = inputs.len(), "Checking addresses");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut invalid = 0usize;

    for input in &inputs {
        let report = Report::new(input);
        if !report.valid {
            invalid += 1;
        }

        writeln!(out, "{}", report.render(format)?).context("write to stdout")?;
    }

    debug!(total = inputs.len(), invalid, "Finished");
    Ok(invalid == 0)
}

fn read_inputs(args: InputArgs) -> Result<Vec<String>> {
    if !args.addresses.is_empty() {
        return Ok(args.addresses);
    }

    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("read address from stdin")?;
        if !line.is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "addrspec=debug" } else { "addrspec=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

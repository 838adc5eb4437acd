//! cohortgen CLI - generate study SQL from value sets and cube definitions

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;
use commands::common::ExitCode;
use commands::{criteria, csv, cube, define, docref, filter, make, schema, union};

/// Install the log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        cli::Commands::Csv(args) => csv::execute(args, &cli.global),
        cli::Commands::Define(args) => define::execute(args, &cli.global),
        cli::Commands::Filter(args) => filter::execute(args, &cli.global),
        cli::Commands::Criteria(args) => criteria::execute(args, &cli.global),
        cli::Commands::Union(args) => union::execute(args, &cli.global),
        cli::Commands::Cube(args) => cube::execute(args, &cli.global),
        cli::Commands::Make(args) => make::execute(args, &cli.global),
        cli::Commands::Schema(args) => schema::execute(args),
        cli::Commands::Docref(args) => docref::execute(args),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match run(&cli) {
        Err(err) => match err.downcast_ref::<ExitCode>() {
            Some(ExitCode(code)) => std::process::exit(*code),
            None => Err(err),
        },
        ok => ok,
    }
}

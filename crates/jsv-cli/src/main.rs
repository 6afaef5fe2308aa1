//! # jsv CLI Entry Point
//!
//! Parses arguments, installs logging, dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// jsv: exclusiveMaximum checks with exact numbers and `$`-path bounds.
#[derive(Parser, Debug)]
#[command(name = "jsv", version, about)]
struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Check a document value against a schema's exclusiveMaximum.
    Check(jsv_cli::check::CheckArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Commands::Check(args) => jsv_cli::check::run(&args),
    }
}

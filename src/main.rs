use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Check password records against the occurrence and position policies
#[derive(Parser, Debug)]
#[command(name = "pwd-policy", version)]
struct Args {
    /// Input file (defaults to $PWD_POLICY_INPUT, then ./input.txt)
    input: Option<PathBuf>,
}

/// Logs go to stderr so stdout only carries the report.
/// The filter comes from `RUST_LOG`, falling back to `warn`.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging();

    let path = args.input.unwrap_or_else(pwd_policy::get_input_path);
    tracing::info!("pwd-policy v{} reading {}", env!("CARGO_PKG_VERSION"), path.display());

    let report = pwd_policy::evaluate_file(&path)
        .with_context(|| format!("failed to evaluate {}", path.display()))?;

    for line in report.lines() {
        println!("{}", line);
    }

    Ok(())
}

//! resolve-aws-account - print the AWS account id for a tower and environment.
//!
//! The account id is the only thing written to stdout. Log lines and errors
//! go to stderr.

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use acctmap_core::{AccountResolver, ResolutionRequest, ResolveError};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run() -> Result<()> {
    let cli = cli::parse_args(std::env::args_os())?;

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let resolver = AccountResolver::for_executable(&exe).with_context(|| {
        format!("Cannot derive the action directory from {}", exe.display())
    })?;

    let request = ResolutionRequest::new(cli.tower, cli.environment);
    let account_id = resolver.resolve(&request)?;

    writeln!(std::io::stdout().lock(), "{account_id}")
        .context("Failed to write the account id to stdout")?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// One line, in GitHub Actions workflow-command form, titled with the
/// failure kind.
fn report(err: &anyhow::Error) {
    eprintln!("{}", error_line(err));
}

fn error_line(err: &anyhow::Error) -> String {
    let title = err
        .downcast_ref::<ResolveError>()
        .map_or("Error", ResolveError::kind);
    format!("::error title={title}::{}", escape_data(&format!("{err:#}")))
}

/// Workflow-command data escaping; keeps the message on one line.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ResolveError>()
        .map_or(1, ResolveError::exit_code)
}

use std::ffi::OsString;

use acctmap_core::ResolveError;
use clap::Parser;

const PROGRAM: &str = "resolve-aws-account";

#[derive(Parser, Debug)]
#[command(name = PROGRAM, disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Print the AWS account id mapped to a tower and environment", long_about = None)]
pub struct Cli {
    #[arg(allow_hyphen_values = true, help = "Tower, the top-level key of the mapping")]
    pub tower: String,

    #[arg(
        allow_hyphen_values = true,
        help = "Environment under the tower (e.g. 'prod')"
    )]
    pub environment: String,
}

/// Parse the command line. Exactly two arguments are taken literally as
/// tower and environment, even when they look like flags; any other count is
/// a usage error.
pub fn parse_args<I, T>(args: I) -> Result<Cli, ResolveError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from(PROGRAM));
    let values: Vec<OsString> = args.collect();

    if values.len() != 2 {
        tracing::debug!(count = values.len(), "expected exactly two arguments");
        return Err(ResolveError::Usage);
    }

    // `--` ends option parsing, so both values reach the positionals verbatim.
    let argv = [program, OsString::from("--")].into_iter().chain(values);
    Cli::try_parse_from(argv).map_err(|err| {
        tracing::debug!(kind = ?err.kind(), "rejected command line");
        ResolveError::Usage
    })
}

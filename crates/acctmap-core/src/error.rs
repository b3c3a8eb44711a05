use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "Usage: resolve-aws-account <tower> <environment>";

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{}", USAGE)]
    Usage,

    #[error("Mapping file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read mapping file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in mapping file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No mapping found for tower '{tower}' and environment '{environment}'")]
    Lookup { tower: String, environment: String },

    #[error("account_id is empty for tower '{tower}' and environment '{environment}'")]
    EmptyValue { tower: String, environment: String },
}

impl ResolveError {
    /// Tag identifying the failure on the error line.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Usage => "UsageError",
            Self::NotFound(_) => "NotFoundError",
            Self::Read { .. } => "ReadError",
            Self::Parse { .. } => "ParseError",
            Self::Lookup { .. } => "LookupError",
            Self::EmptyValue { .. } => "EmptyValueError",
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage
            | Self::NotFound(_)
            | Self::Read { .. }
            | Self::Parse { .. }
            | Self::Lookup { .. }
            | Self::EmptyValue { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;

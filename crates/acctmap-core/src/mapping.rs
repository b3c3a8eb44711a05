//! JSON loader for the tower → environment → account mapping.

use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ResolveError, Result};

/// Key holding the account id inside an environment entry.
pub const ACCOUNT_ID_KEY: &str = "account_id";

/// The mapping file, kept as untyped JSON.
///
/// Only the keys a lookup touches are ever inspected, so a document with
/// unrelated malformed entries still resolves the well-formed ones.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct MappingDocument {
    root: Value,
}

impl MappingDocument {
    /// Read and parse the mapping file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ResolveError::NotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(ResolveError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_slice(&contents).map_err(|source| ResolveError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub const fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// The raw `account_id` value for a tower/environment pair, if the whole
    /// key chain is present.
    pub fn account_entry(&self, tower: &str, environment: &str) -> Option<&Value> {
        self.root.get(tower)?.get(environment)?.get(ACCOUNT_ID_KEY)
    }

    pub fn towers(&self) -> Vec<&str> {
        object_keys(&self.root)
    }

    pub fn environments(&self, tower: &str) -> Vec<&str> {
        self.root.get(tower).map_or_else(Vec::new, object_keys)
    }
}

impl FromStr for MappingDocument {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

fn object_keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

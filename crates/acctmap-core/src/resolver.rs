use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ResolveError, Result};
use crate::mapping::MappingDocument;
use crate::paths;

/// The (tower, environment) pair to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub tower: String,
    pub environment: String,
}

impl ResolutionRequest {
    pub fn new(tower: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            tower: tower.into(),
            environment: environment.into(),
        }
    }

    fn lookup_error(&self) -> ResolveError {
        ResolveError::Lookup {
            tower: self.tower.clone(),
            environment: self.environment.clone(),
        }
    }

    fn empty_value_error(&self) -> ResolveError {
        ResolveError::EmptyValue {
            tower: self.tower.clone(),
            environment: self.environment.clone(),
        }
    }
}

/// Look up `document[tower][environment]["account_id"]` and require it to be
/// truthy.
pub fn resolve(mapping: &MappingDocument, request: &ResolutionRequest) -> Result<String> {
    let value = mapping
        .account_entry(&request.tower, &request.environment)
        .ok_or_else(|| request.lookup_error())?;

    render_account_id(value).ok_or_else(|| request.empty_value_error())
}

/// Strings are returned verbatim, other truthy values as compact JSON.
/// `null`, `false`, `""`, zero and empty containers count as empty.
fn render_account_id(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if is_zero(n) => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}

#[allow(clippy::float_cmp)]
fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().is_some_and(|f| f == 0.0)
}

/// Loads the mapping file on every call and resolves a request against it.
#[derive(Debug)]
pub struct AccountResolver {
    mapping_path: PathBuf,
}

impl AccountResolver {
    pub const fn new(mapping_path: PathBuf) -> Self {
        Self { mapping_path }
    }

    /// Resolver reading the mapping shipped alongside `executable`.
    pub fn for_executable(executable: &Path) -> Option<Self> {
        paths::default_mapping_path(executable).map(Self::new)
    }

    pub fn mapping_path(&self) -> &Path {
        &self.mapping_path
    }

    pub fn resolve(&self, request: &ResolutionRequest) -> Result<String> {
        tracing::info!(
            tower = %request.tower,
            environment = %request.environment,
            "resolving AWS account"
        );
        tracing::info!(path = %self.mapping_path.display(), "using mapping file");

        let mapping = MappingDocument::load(&self.mapping_path)?;

        let account_id = resolve(&mapping, request).inspect_err(|err| {
            if matches!(err, ResolveError::Lookup { .. }) {
                tracing::debug!(
                    towers = ?mapping.towers(),
                    environments = ?mapping.environments(&request.tower),
                    "available mapping keys"
                );
            }
        })?;

        tracing::info!(account_id = %account_id, "resolved AWS account");
        Ok(account_id)
    }
}

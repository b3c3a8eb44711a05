//! # acctmap-core
//!
//! Resolves an AWS account id from a tower → environment → `account_id`
//! JSON mapping.
//!
//! ## Example
//!
//! ```
//! use acctmap_core::{MappingDocument, ResolutionRequest, resolve};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mapping: MappingDocument = r#"{"ops": {"prod": {"account_id": "123456789012"}}}"#.parse()?;
//! let request = ResolutionRequest::new("ops", "prod");
//!
//! assert_eq!(resolve(&mapping, &request)?, "123456789012");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod mapping;
pub mod paths;
pub mod resolver;

pub use error::{ResolveError, Result, USAGE};
pub use mapping::MappingDocument;
pub use resolver::{AccountResolver, ResolutionRequest, resolve};

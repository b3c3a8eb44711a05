//! Location of the mapping file relative to the installed executable.
//!
//! The binary ships as `<action dir>/bin/resolve-aws-account` and the
//! mapping lives at `<action dir>/mappings/aws-accounts-mapping.json`.

use std::path::{Path, PathBuf};

pub const MAPPINGS_DIR: &str = "mappings";
pub const MAPPING_FILE_NAME: &str = "aws-accounts-mapping.json";

/// One directory up from the directory holding `executable`.
pub fn action_dir(executable: &Path) -> Option<&Path> {
    executable.parent()?.parent()
}

pub fn mapping_path(action_dir: &Path) -> PathBuf {
    action_dir.join(MAPPINGS_DIR).join(MAPPING_FILE_NAME)
}

pub fn default_mapping_path(executable: &Path) -> Option<PathBuf> {
    action_dir(executable).map(mapping_path)
}

//! Filesystem probes used by the checklist
//!
//! All paths are resolved against an explicit base directory. Nothing here
//! changes the process working directory or writes to disk.

use std::fs;
use std::path::Path;

use crate::error::{VerifyError, VerifyResult};

/// Size in bytes of `rel` under `base_dir`, or `None` if it does not exist.
pub fn file_size(base_dir: &Path, rel: &str) -> VerifyResult<Option<u64>> {
    let path = base_dir.join(rel);
    if !path.exists() {
        return Ok(None);
    }

    let metadata = fs::metadata(&path).map_err(|source| VerifyError::Metadata {
        path: path.clone(),
        source,
    })?;
    Ok(Some(metadata.len()))
}

/// Read `rel` under `base_dir` as UTF-8 text.
///
/// Permission and encoding failures are returned to the caller; only the
/// manifest group recovers from them.
pub fn read_text(base_dir: &Path, rel: &str) -> VerifyResult<String> {
    let path = base_dir.join(rel);
    fs::read_to_string(&path).map_err(|source| VerifyError::Read { path, source })
}

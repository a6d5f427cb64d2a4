// SPDX-License-Identifier: AGPL-3.0-only

//! JSON report output for the verification binaries.

use std::path::{Path, PathBuf};

use crate::error::GoldenPointError;

/// Directory where binaries drop their JSON reports, relative to the
/// working directory.
#[must_use]
pub fn results_dir() -> PathBuf {
    PathBuf::from("results")
}

/// Write a pretty-printed JSON value to `results/{filename}`, creating
/// the directory if needed. Returns the path written.
///
/// # Errors
///
/// Returns an error if the results directory cannot be created or the
/// file cannot be written.
pub fn save_json_to_results(
    filename: &str,
    value: &serde_json::Value,
) -> Result<PathBuf, GoldenPointError> {
    let dir = results_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| GoldenPointError::DataLoad(format!("results dir: {e}")))?;
    let path = dir.join(filename);
    write_json(&path, value)?;
    Ok(path)
}

/// Write a pretty-printed JSON value to an explicit path, creating parent
/// directories if needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// file cannot be written.
pub fn write_json(path: &Path, value: &serde_json::Value) -> Result<(), GoldenPointError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GoldenPointError::DataLoad(format!("report dir: {e}")))?;
        }
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| GoldenPointError::DataLoad(format!("JSON serialize: {e}")))?;
    std::fs::write(path, json)
        .map_err(|e| GoldenPointError::DataLoad(format!("write {}: {e}", path.display())))?;
    Ok(())
}

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::BatchResult;

/// Write a batch result as pretty-printed JSON.
pub fn write_json_report<P: AsRef<Path>>(path: P, result: &BatchResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}

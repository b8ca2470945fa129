//! Reading and writing OIDC client records and issue files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use xavyo_claim_remapping::{OidcClientRecord, ValidationIssues};

use crate::error::{CliError, CliResult};

/// Load an OIDC client record from a JSON file.
pub fn load_record(path: &Path) -> CliResult<OidcClientRecord> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let record: OidcClientRecord =
        serde_json::from_str(&content).map_err(|e| CliError::json(path, e))?;
    debug!(
        path = %path.display(),
        remappings = record.claim_remappings.len(),
        "Loaded client record"
    );
    Ok(record)
}

/// Write a record back, replacing the file in one rename.
pub fn save_record(path: &Path, record: &OidcClientRecord) -> CliResult<()> {
    let mut content = serde_json::to_string_pretty(record).map_err(|e| CliError::json(path, e))?;
    content.push('\n');

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, content).map_err(|e| CliError::io(&tmp_path, e))?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CliError::io(path, e));
    }

    info!(
        path = %path.display(),
        remappings = record.claim_remappings.len(),
        "Saved client record"
    );
    Ok(())
}

/// Load validation issues. A missing path means "no issues".
pub fn load_issues(path: Option<&Path>) -> CliResult<Option<ValidationIssues>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let issues: ValidationIssues =
        serde_json::from_str(&content).map_err(|e| CliError::json(path, e))?;
    debug!(path = %path.display(), count = issues.len(), "Loaded validation issues");
    Ok(Some(issues))
}

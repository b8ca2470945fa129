//! Subcommand implementations.
//!
//! Each command opens an [`EditSession`] over a client record file, drives
//! the editor, and writes the record back only when the editor published a
//! new list.

pub mod catalog;
pub mod edit;
pub mod show;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;
use xavyo_claim_remapping::{ClaimRemappingEditor, OidcClientRecord, SharedRemappings};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::store;

/// Output format for read-only commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table (default)
    #[default]
    Table,
    /// JSON document
    Json,
}

/// A client record loaded from disk with an editor bound to its remappings.
pub struct EditSession {
    path: PathBuf,
    record: OidcClientRecord,
    owner: SharedRemappings,
    editor: ClaimRemappingEditor<SharedRemappings>,
}

impl EditSession {
    /// Load the record at `path` and the configured issues, if any.
    pub fn open(path: &Path, config: &CliConfig) -> CliResult<Self> {
        let record = store::load_record(path)?;
        let issues = store::load_issues(config.issues_path.as_deref())?;

        let owner = SharedRemappings::new(record.claim_remappings.clone());
        let editor = ClaimRemappingEditor::new(owner.clone())
            .with_client(record.client_ref())
            .with_issues(issues);

        Ok(Self {
            path: path.to_path_buf(),
            record,
            owner,
            editor,
        })
    }

    pub fn editor(&mut self) -> &mut ClaimRemappingEditor<SharedRemappings> {
        &mut self.editor
    }

    pub fn view(&self) -> &ClaimRemappingEditor<SharedRemappings> {
        &self.editor
    }

    /// Current number of remappings.
    pub fn len(&self) -> usize {
        self.owner.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Error for an index the editor ignored.
    pub fn out_of_range(&self, index: usize) -> CliError {
        CliError::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }

    /// Write the record back if anything was published.
    ///
    /// Returns whether the file was written.
    pub fn save_if_changed(mut self) -> CliResult<bool> {
        if self.owner.revision() == 0 {
            debug!(path = %self.path.display(), "No changes to save");
            return Ok(false);
        }
        self.record.claim_remappings = self.owner.get();
        store::save_record(&self.path, &self.record)?;
        Ok(true)
    }
}

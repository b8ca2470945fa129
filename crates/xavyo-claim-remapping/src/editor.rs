//! Claim remapping editor.
//!
//! Owns no authoritative data: each operation reads the owner's list through
//! the binding, computes a replacement list and publishes it exactly once.
//! Out-of-range indices degrade to a no-op (nothing is published), because
//! indices coming from UI events can lag behind the list they refer to.

use tracing::{debug, instrument};

use crate::binding::RemappingBinding;
use crate::controls::EntryView;
use crate::error::RemappingResult;
use crate::models::{
    CatalogOption, ClaimRemapping, ClaimRemappingList, ClaimSource, OidcClientRef, SourceType,
};
use crate::validation::{FieldName, ValidationIssues};

/// A new value for one field of a remapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    ClaimName(String),
    SourceType(SourceType),
    SourceValue(String),
}

impl FieldUpdate {
    /// Field this update writes.
    #[must_use]
    pub fn field(&self) -> FieldName {
        match self {
            FieldUpdate::ClaimName(_) => FieldName::ClaimName,
            FieldUpdate::SourceType(_) => FieldName::SourceType,
            FieldUpdate::SourceValue(_) => FieldName::SourceValue,
        }
    }

    /// Build an update from a field name and its raw string value.
    pub fn parse(field: FieldName, value: &str) -> RemappingResult<Self> {
        Ok(match field {
            FieldName::ClaimName => FieldUpdate::ClaimName(value.to_string()),
            FieldName::SourceType => FieldUpdate::SourceType(value.parse()?),
            FieldName::SourceValue => FieldUpdate::SourceValue(value.to_string()),
        })
    }

    /// The entry that results from applying this update to `entry`.
    ///
    /// A real source type change always clears the source value.
    #[must_use]
    pub fn apply(self, entry: &ClaimRemapping) -> ClaimRemapping {
        match self {
            FieldUpdate::ClaimName(claim_name) => ClaimRemapping {
                claim_name,
                source: entry.source.clone(),
            },
            FieldUpdate::SourceType(source_type) => ClaimRemapping {
                claim_name: entry.claim_name.clone(),
                source: entry.source.retyped(source_type),
            },
            FieldUpdate::SourceValue(value) => ClaimRemapping {
                claim_name: entry.claim_name.clone(),
                source: entry.source.with_value(value),
            },
        }
    }
}

/// Editor for the claim remappings of one OIDC client.
pub struct ClaimRemappingEditor<B: RemappingBinding> {
    binding: B,
    issues: ValidationIssues,
    client: Option<OidcClientRef>,
}

impl<B: RemappingBinding> ClaimRemappingEditor<B> {
    pub fn new(binding: B) -> Self {
        Self {
            binding,
            issues: ValidationIssues::default(),
            client: None,
        }
    }

    /// Attach the client being edited, for log context only.
    #[must_use]
    pub fn with_client(mut self, client: Option<OidcClientRef>) -> Self {
        self.client = client;
        self
    }

    #[must_use]
    pub fn with_issues(mut self, issues: Option<ValidationIssues>) -> Self {
        self.set_issues(issues);
        self
    }

    /// Replace the issue list after a save/validate cycle. `None` means no issues.
    pub fn set_issues(&mut self, issues: Option<ValidationIssues>) {
        self.issues = issues.unwrap_or_default();
    }

    #[must_use]
    pub fn issues(&self) -> &ValidationIssues {
        &self.issues
    }

    #[must_use]
    pub fn client(&self) -> Option<&OidcClientRef> {
        self.client.as_ref()
    }

    fn client_id(&self) -> Option<&str> {
        self.client.as_ref().map(|c| c.client_id.as_str())
    }

    /// The owner's current list.
    #[must_use]
    pub fn remappings(&self) -> ClaimRemappingList {
        self.binding.current()
    }

    /// Append a blank `user_field` remapping.
    #[instrument(skip(self), fields(client_id = ?self.client_id()))]
    pub fn add_remapping(&mut self) {
        let next = self.binding.current().with_appended(ClaimRemapping::blank());
        debug!(len = next.len(), "Claim remapping added");
        self.binding.publish(next);
    }

    /// Remove the entry at `index`. Later entries shift down by one.
    ///
    /// Returns `false`, publishing nothing, when `index` is out of range.
    #[instrument(skip(self), fields(client_id = ?self.client_id()))]
    pub fn remove_remapping(&mut self, index: usize) -> bool {
        let current = self.binding.current();
        match current.without(index) {
            Some(next) => {
                debug!(len = next.len(), "Claim remapping removed");
                self.binding.publish(next);
                true
            }
            None => {
                debug!(len = current.len(), "Remove skipped: index out of range");
                false
            }
        }
    }

    /// Write one field of the entry at `index`.
    ///
    /// The entry is replaced by a fresh value; all other entries keep their
    /// identity. Returns `false`, publishing nothing, when `index` is out of
    /// range.
    #[instrument(skip(self, update), fields(client_id = ?self.client_id(), field = %update.field()))]
    pub fn update_field(&mut self, index: usize, update: FieldUpdate) -> bool {
        let current = self.binding.current();
        match current.with_replaced(index, |entry| update.apply(entry)) {
            Some(next) => {
                debug!("Claim remapping field updated");
                self.binding.publish(next);
                true
            }
            None => {
                debug!(len = current.len(), "Update skipped: index out of range");
                false
            }
        }
    }

    /// Source type selector changed.
    ///
    /// Setting the type and clearing the value happen in one replacement, so
    /// the owner only ever observes the combined result.
    pub fn change_source_type(&mut self, index: usize, source_type: SourceType) -> bool {
        self.update_field(index, FieldUpdate::SourceType(source_type))
    }

    /// User-field selector changed.
    ///
    /// The selector only exists for `user_field` entries; for any other
    /// source type this is a no-op.
    #[instrument(skip(self, option), fields(client_id = ?self.client_id(), value = option.value))]
    pub fn select_user_field(&mut self, index: usize, option: &CatalogOption) -> bool {
        let current = self.binding.current();
        let is_user_field = current
            .get(index)
            .is_some_and(|entry| entry.source_type() == Some(SourceType::UserField));
        if !is_user_field {
            debug!("User field selection skipped: entry is not a user_field source");
            return false;
        }
        let Some(next) = current.with_replaced(index, |entry| ClaimRemapping {
            claim_name: entry.claim_name.clone(),
            source: ClaimSource::UserField(option.value.to_string()),
        }) else {
            return false;
        };
        self.binding.publish(next);
        true
    }

    /// Inline error for `(index, field)`: the first matching issue's message.
    #[must_use]
    pub fn get_field_error(&self, index: usize, field: FieldName) -> Option<&str> {
        self.issues.field_error(index, field)
    }

    /// Row view models for `list`, in display order.
    #[must_use]
    pub fn entry_views<'a>(&'a self, list: &'a ClaimRemappingList) -> Vec<EntryView<'a>> {
        list.iter()
            .enumerate()
            .map(|(index, remapping)| EntryView::new(index, remapping, &self.issues))
            .collect()
    }
}

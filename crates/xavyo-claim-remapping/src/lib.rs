//! xavyo Claim Remapping
//!
//! Editor core for the claim remapping rules of an OIDC client configuration.
//! Each rule says "output claim X using a value derived from source Y".
//!
//! # Modules
//!
//! - [`models`] - Remapping rules, the ordered list, reference catalogs, client context
//! - [`editor`] - Add/remove/update operations and error lookup
//! - [`binding`] - Change notification to the owning form
//! - [`validation`] - Externally supplied validation issues and their lookup
//! - [`controls`] - Per-entry view models (control kind, labels, inline errors)
//! - [`error`] - Decoding errors
//!
//! # Example
//!
//! ```
//! use xavyo_claim_remapping::{
//!     ClaimRemappingEditor, FieldName, FieldUpdate, SharedRemappings, SourceType,
//!     ValidationIssues,
//! };
//!
//! let owner = SharedRemappings::default();
//! let mut editor = ClaimRemappingEditor::new(owner.clone());
//!
//! editor.add_remapping();
//! editor.update_field(0, FieldUpdate::ClaimName("tenant".to_string()));
//! editor.change_source_type(0, SourceType::Static);
//! editor.update_field(0, FieldUpdate::SourceValue("\"acme\"".to_string()));
//!
//! assert_eq!(owner.get().get(0).unwrap().source_value(), "\"acme\"");
//!
//! let issues: ValidationIssues = serde_json::from_str(
//!     r#"[{"path": [0, "claimName"], "message": "reserved claim"}]"#,
//! )
//! .unwrap();
//! editor.set_issues(Some(issues));
//! assert_eq!(editor.get_field_error(0, FieldName::ClaimName), Some("reserved claim"));
//! ```

pub mod binding;
pub mod controls;
pub mod editor;
pub mod error;
pub mod models;
pub mod validation;

pub use binding::{CallbackBinding, RemappingBinding, SharedRemappings};
pub use controls::{EntryView, SourceValueControl};
pub use editor::{ClaimRemappingEditor, FieldUpdate};
pub use error::{RemappingError, RemappingResult};
pub use models::{
    find_option, resolve_label, CatalogOption, ClaimRemapping, ClaimRemappingList, ClaimSource,
    OidcClientRecord, OidcClientRef, SourceType, SOURCE_TYPES, USER_FIELDS,
};
pub use validation::{FieldKey, FieldName, PathSegment, ValidationIssue, ValidationIssues};

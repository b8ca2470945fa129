//! Per-entry view models.
//!
//! Rendering belongs to the host; these types only describe which control
//! each entry needs and which inline errors to show next to it.

use serde::Serialize;

use crate::models::{
    resolve_label, CatalogOption, ClaimRemapping, ClaimSource, SOURCE_TYPES, USER_FIELDS,
};
use crate::validation::{FieldName, ValidationIssues};

/// Input control for the source value, chosen by the entry's source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceValueControl<'a> {
    /// Restricted to the user-field catalog.
    UserFieldSelect {
        options: &'static [CatalogOption],
        value: &'a str,
        /// Catalog label, or the raw value when it is not in the catalog.
        label: &'a str,
    },
    /// Free text naming an arbitrary claim.
    CustomClaimInput { value: &'a str },
    /// Free text holding a literal or JSON-encoded value.
    StaticInput { value: &'a str },
    /// Free text for a source type outside the catalog.
    RawInput { value: &'a str },
}

impl<'a> SourceValueControl<'a> {
    #[must_use]
    pub fn for_source(source: &'a ClaimSource) -> Self {
        match source {
            ClaimSource::UserField(value) => SourceValueControl::UserFieldSelect {
                options: USER_FIELDS,
                value,
                label: resolve_label(USER_FIELDS, value),
            },
            ClaimSource::CustomClaim(value) => SourceValueControl::CustomClaimInput { value },
            ClaimSource::Static(value) => SourceValueControl::StaticInput { value },
            ClaimSource::Unknown { value, .. } => SourceValueControl::RawInput { value },
        }
    }
}

/// Everything needed to render one remapping row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView<'a> {
    pub index: usize,
    pub claim_name: &'a str,
    /// Stored type tag, which may lie outside the catalog.
    pub source_type: &'a str,
    /// Catalog label, or the raw tag when it is not in the catalog.
    pub source_type_label: &'a str,
    pub source_value: SourceValueControl<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_name_error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_value_error: Option<&'a str>,
}

impl<'a> EntryView<'a> {
    /// Build the row for the entry at `index`.
    ///
    /// Only `claimName` and `sourceValue` get inline errors. Issues addressed
    /// to `sourceType` are left for the host to report.
    #[must_use]
    pub fn new(index: usize, remapping: &'a ClaimRemapping, issues: &'a ValidationIssues) -> Self {
        let source_type = remapping.source_type_tag();
        Self {
            index,
            claim_name: &remapping.claim_name,
            source_type,
            source_type_label: resolve_label(SOURCE_TYPES, source_type),
            source_value: SourceValueControl::for_source(&remapping.source),
            claim_name_error: issues.field_error(index, FieldName::ClaimName),
            source_value_error: issues.field_error(index, FieldName::SourceValue),
        }
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.claim_name_error.is_some() || self.source_value_error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldKey, ValidationIssue};

    #[test]
    fn test_user_field_control_resolves_label() {
        let source = ClaimSource::UserField("display_name".to_string());
        let control = SourceValueControl::for_source(&source);
        assert_eq!(
            control,
            SourceValueControl::UserFieldSelect {
                options: USER_FIELDS,
                value: "display_name",
                label: "Display Name",
            }
        );
    }

    #[test]
    fn test_user_field_control_out_of_catalog_value() {
        let source = ClaimSource::UserField("employee_id".to_string());
        match SourceValueControl::for_source(&source) {
            SourceValueControl::UserFieldSelect { label, .. } => assert_eq!(label, "employee_id"),
            other => panic!("unexpected control: {other:?}"),
        }
    }

    #[test]
    fn test_free_text_controls() {
        let custom = ClaimSource::CustomClaim("groups".to_string());
        let literal = ClaimSource::Static("{\"a\":1}".to_string());
        assert_eq!(
            SourceValueControl::for_source(&custom),
            SourceValueControl::CustomClaimInput { value: "groups" }
        );
        assert_eq!(
            SourceValueControl::for_source(&literal),
            SourceValueControl::StaticInput { value: "{\"a\":1}" }
        );
    }

    #[test]
    fn test_entry_view_unknown_source_type_uses_raw_label() {
        let remapping = ClaimRemapping::new(
            "legacy",
            ClaimSource::Unknown {
                source_type: "ldap_attribute".to_string(),
                value: "cn".to_string(),
            },
        );
        let issues = ValidationIssues::default();

        let view = EntryView::new(0, &remapping, &issues);
        assert_eq!(view.source_type, "ldap_attribute");
        assert_eq!(view.source_type_label, "ldap_attribute");
        assert_eq!(view.source_value, SourceValueControl::RawInput { value: "cn" });
    }

    #[test]
    fn test_entry_view_ignores_source_type_issues() {
        let remapping = ClaimRemapping::new("tier", ClaimSource::Static(String::new()));
        let issues = ValidationIssues::from(vec![
            ValidationIssue::new(FieldKey::new(0, FieldName::SourceType), "unsupported"),
            ValidationIssue::new(FieldKey::new(0, FieldName::SourceValue), "required"),
        ]);

        let view = EntryView::new(0, &remapping, &issues);
        assert_eq!(view.source_type_label, "Static Value");
        assert_eq!(view.claim_name_error, None);
        assert_eq!(view.source_value_error, Some("required"));
        assert!(view.has_errors());
    }
}

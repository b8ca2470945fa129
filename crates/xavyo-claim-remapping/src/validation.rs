//! Lookup of externally computed validation issues.
//!
//! Issues arrive from the host form after each save/validate cycle. Each one
//! carries a JSON path such as `[1, "claimName"]` and a message. This module
//! only reads them: the editor surfaces at most one message per
//! `(index, field)` pair, the first matching issue in supplied order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RemappingError;

/// Remapping field names as they appear in validation paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    ClaimName,
    /// Reserved. No inline error is rendered for it.
    SourceType,
    SourceValue,
}

impl FieldName {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::ClaimName => "claimName",
            FieldName::SourceType => "sourceType",
            FieldName::SourceValue => "sourceValue",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldName {
    type Err = RemappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claimName" => Ok(FieldName::ClaimName),
            "sourceType" => Ok(FieldName::SourceType),
            "sourceValue" => Ok(FieldName::SourceValue),
            _ => Err(RemappingError::UnknownFieldName(s.to_string())),
        }
    }
}

/// Typed `(index, field)` address of one remapping field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub index: usize,
    pub field: FieldName,
}

impl FieldKey {
    #[must_use]
    pub fn new(index: usize, field: FieldName) -> Self {
        Self { index, field }
    }

    /// The issue path addressing this field.
    #[must_use]
    pub fn path(&self) -> Vec<PathSegment> {
        vec![
            PathSegment::Index(self.index as u64),
            PathSegment::Key(self.field.as_str().to_string()),
        ]
    }
}

/// One element of an issue path.
///
/// Paths come from an external validator and are not guaranteed to follow
/// the `[number, string]` shape; anything else is kept as raw JSON and never
/// matches a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(u64),
    Key(String),
    Other(Value),
}

/// An externally supplied `(path, message)` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(key: FieldKey, message: impl Into<String>) -> Self {
        Self {
            path: key.path(),
            message: message.into(),
        }
    }

    /// Whether the first two path segments are exactly `index` and `field`.
    ///
    /// Plain comparisons only, so an index past the end of the current list
    /// simply never matches.
    #[must_use]
    pub fn matches(&self, index: usize, field: FieldName) -> bool {
        let index_matches = matches!(
            self.path.first(),
            Some(PathSegment::Index(i)) if *i == index as u64
        );
        let field_matches = matches!(
            self.path.get(1),
            Some(PathSegment::Key(name)) if name == field.as_str()
        );
        index_matches && field_matches
    }
}

/// Ordered sequence of issues for the remapping list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationIssues(Vec<ValidationIssue>);

impl ValidationIssues {
    #[must_use]
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self(issues)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.0.iter()
    }

    /// Message of the first issue addressing `(index, field)`.
    #[must_use]
    pub fn field_error(&self, index: usize, field: FieldName) -> Option<&str> {
        self.0
            .iter()
            .find(|issue| issue.matches(index, field))
            .map(|issue| issue.message.as_str())
    }

    #[must_use]
    pub fn field_error_at(&self, key: FieldKey) -> Option<&str> {
        self.field_error(key.index, key.field)
    }
}

impl From<Vec<ValidationIssue>> for ValidationIssues {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self(issues)
    }
}

impl FromIterator<ValidationIssue> for ValidationIssues {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issues(value: Value) -> ValidationIssues {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_field_name_round_trip_str() {
        for field in [
            FieldName::ClaimName,
            FieldName::SourceType,
            FieldName::SourceValue,
        ] {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
        assert!("claim_name".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_exact_match_on_both_components() {
        let issues = issues(json!([{"path": [1, "claimName"], "message": "required"}]));
        assert_eq!(issues.field_error(1, FieldName::ClaimName), Some("required"));
        assert_eq!(issues.field_error(0, FieldName::ClaimName), None);
        assert_eq!(issues.field_error(1, FieldName::SourceValue), None);
    }

    #[test]
    fn test_first_match_wins() {
        let issues = issues(json!([
            {"path": [0, "sourceValue"], "message": "invalid JSON"},
            {"path": [0, "sourceValue"], "message": "too long"}
        ]));
        assert_eq!(
            issues.field_error(0, FieldName::SourceValue),
            Some("invalid JSON")
        );
    }

    #[test]
    fn test_foreign_path_shapes_never_match() {
        let issues = issues(json!([
            {"path": ["name"], "message": "name required"},
            {"path": [], "message": "form invalid"},
            {"path": [-1, "claimName"], "message": "negative"},
            {"path": [0.5, "claimName"], "message": "fraction"},
            {"path": [null, "claimName"], "message": "null"},
            {"path": ["0", "claimName"], "message": "string index"},
            {"message": "no path"}
        ]));
        assert_eq!(issues.len(), 7);
        assert_eq!(issues.field_error(0, FieldName::ClaimName), None);
    }

    #[test]
    fn test_out_of_range_index_is_harmless() {
        let issues = issues(json!([{"path": [99, "claimName"], "message": "stale"}]));
        assert_eq!(issues.field_error(0, FieldName::ClaimName), None);
        assert_eq!(issues.field_error(99, FieldName::ClaimName), Some("stale"));
    }

    #[test]
    fn test_issue_built_from_key() {
        let key = FieldKey::new(2, FieldName::SourceValue);
        let issue = ValidationIssue::new(key, "bad");
        assert_eq!(
            serde_json::to_value(&issue).unwrap(),
            json!({"path": [2, "sourceValue"], "message": "bad"})
        );
        let issues = ValidationIssues::from(vec![issue]);
        assert_eq!(issues.field_error_at(key), Some("bad"));
    }

    #[test]
    fn test_empty_issues() {
        let issues = ValidationIssues::default();
        assert!(issues.is_empty());
        assert_eq!(issues.field_error(0, FieldName::ClaimName), None);
    }
}

//! Claim remapping rule models.

use crate::error::RemappingError;
use serde::{Deserialize, Serialize};

/// Kind of origin for a remapped claim's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// A known user attribute (see [`crate::USER_FIELDS`]).
    #[default]
    UserField,
    /// An arbitrary claim name.
    CustomClaim,
    /// A literal or JSON-encoded value.
    Static,
}

impl SourceType {
    /// All source types in catalog order.
    pub const ALL: [SourceType; 3] = [
        SourceType::UserField,
        SourceType::CustomClaim,
        SourceType::Static,
    ];

    /// Wire value of this source type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::UserField => "user_field",
            SourceType::CustomClaim => "custom_claim",
            SourceType::Static => "static",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceType {
    type Err = RemappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user_field" => Ok(SourceType::UserField),
            "custom_claim" => Ok(SourceType::CustomClaim),
            "static" => Ok(SourceType::Static),
            _ => Err(RemappingError::UnknownSourceType(s.to_string())),
        }
    }
}

/// Where a remapped claim takes its value from.
///
/// Each variant carries only the value meaningful for that source type, so a
/// value is never reinterpreted under a different type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClaimSource {
    /// Key of a known user attribute, e.g. `email`.
    UserField(String),
    /// Name of an arbitrary claim.
    CustomClaim(String),
    /// Literal or JSON-encoded text.
    Static(String),
    /// Stored with a type tag outside the catalog. Kept verbatim so the
    /// record still loads and saves unchanged.
    Unknown { source_type: String, value: String },
}

impl Default for ClaimSource {
    fn default() -> Self {
        ClaimSource::empty(SourceType::default())
    }
}

impl ClaimSource {
    /// A source of the given type with an empty value.
    #[must_use]
    pub fn empty(source_type: SourceType) -> Self {
        ClaimSource::new(source_type, String::new())
    }

    /// Build a source from its type tag and raw value.
    #[must_use]
    pub fn new(source_type: SourceType, value: impl Into<String>) -> Self {
        let value = value.into();
        match source_type {
            SourceType::UserField => ClaimSource::UserField(value),
            SourceType::CustomClaim => ClaimSource::CustomClaim(value),
            SourceType::Static => ClaimSource::Static(value),
        }
    }

    /// Catalog source type, or `None` for an unknown tag.
    #[must_use]
    pub fn source_type(&self) -> Option<SourceType> {
        match self {
            ClaimSource::UserField(_) => Some(SourceType::UserField),
            ClaimSource::CustomClaim(_) => Some(SourceType::CustomClaim),
            ClaimSource::Static(_) => Some(SourceType::Static),
            ClaimSource::Unknown { .. } => None,
        }
    }

    /// Type tag as stored on the wire.
    #[must_use]
    pub fn source_type_tag(&self) -> &str {
        match self {
            ClaimSource::UserField(_) => SourceType::UserField.as_str(),
            ClaimSource::CustomClaim(_) => SourceType::CustomClaim.as_str(),
            ClaimSource::Static(_) => SourceType::Static.as_str(),
            ClaimSource::Unknown { source_type, .. } => source_type.as_str(),
        }
    }

    /// Raw source value, interpreted according to the variant.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            ClaimSource::UserField(v) | ClaimSource::CustomClaim(v) | ClaimSource::Static(v) => v,
            ClaimSource::Unknown { value, .. } => value,
        }
    }

    /// Same variant, new value.
    #[must_use]
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        match self {
            ClaimSource::UserField(_) => ClaimSource::UserField(value.into()),
            ClaimSource::CustomClaim(_) => ClaimSource::CustomClaim(value.into()),
            ClaimSource::Static(_) => ClaimSource::Static(value.into()),
            ClaimSource::Unknown { source_type, .. } => ClaimSource::Unknown {
                source_type: source_type.clone(),
                value: value.into(),
            },
        }
    }

    /// Switch to `source_type`.
    ///
    /// The value survives only when the type does not change; any real type
    /// change, including leaving an unknown tag, yields an empty value.
    #[must_use]
    pub fn retyped(&self, source_type: SourceType) -> Self {
        if self.source_type() == Some(source_type) {
            self.clone()
        } else {
            ClaimSource::empty(source_type)
        }
    }
}

/// One rule: output claim `claim_name` using a value derived from `source`.
///
/// Serialized in the flat form used by OIDC client records:
/// `{"claimName": "...", "sourceType": "user_field", "sourceValue": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawClaimRemapping", into = "RawClaimRemapping")]
pub struct ClaimRemapping {
    /// Output claim identifier. Uniqueness is not enforced here.
    pub claim_name: String,
    pub source: ClaimSource,
}

impl ClaimRemapping {
    #[must_use]
    pub fn new(claim_name: impl Into<String>, source: ClaimSource) -> Self {
        Self {
            claim_name: claim_name.into(),
            source,
        }
    }

    /// The entry appended by "add remapping": empty claim, `user_field`, empty value.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source_type(&self) -> Option<SourceType> {
        self.source.source_type()
    }

    #[must_use]
    pub fn source_type_tag(&self) -> &str {
        self.source.source_type_tag()
    }

    #[must_use]
    pub fn source_value(&self) -> &str {
        self.source.value()
    }
}

/// Flat wire representation of a [`ClaimRemapping`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawClaimRemapping {
    claim_name: String,
    source_type: String,
    source_value: String,
}

impl From<RawClaimRemapping> for ClaimRemapping {
    fn from(raw: RawClaimRemapping) -> Self {
        let source = if raw.source_type.is_empty() {
            ClaimSource::new(SourceType::default(), raw.source_value)
        } else {
            match raw.source_type.parse::<SourceType>() {
                Ok(source_type) => ClaimSource::new(source_type, raw.source_value),
                Err(_) => ClaimSource::Unknown {
                    source_type: raw.source_type,
                    value: raw.source_value,
                },
            }
        };
        ClaimRemapping {
            claim_name: raw.claim_name,
            source,
        }
    }
}

impl From<ClaimRemapping> for RawClaimRemapping {
    fn from(remapping: ClaimRemapping) -> Self {
        let source_type = remapping.source_type_tag().to_string();
        let source_value = match remapping.source {
            ClaimSource::UserField(v) | ClaimSource::CustomClaim(v) | ClaimSource::Static(v) => v,
            ClaimSource::Unknown { value, .. } => value,
        };
        RawClaimRemapping {
            claim_name: remapping.claim_name,
            source_type,
            source_value,
        }
    }
}

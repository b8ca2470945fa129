//! OIDC client context handed to the editor by its host.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::list::ClaimRemappingList;

/// Read-only reference to the OIDC client whose remappings are being edited.
///
/// Only used to contextualize log events; the editor never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcClientRef {
    /// Public client ID.
    pub client_id: String,
    /// Internal ID, when the client has been persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<Uuid>,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl OidcClientRef {
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            id: None,
            tenant_id: None,
            name: None,
        }
    }
}

/// OIDC client configuration record as stored by the host form.
///
/// Only `claimRemappings` is interpreted; every other field is carried
/// through untouched so the record can be written back as it was read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcClientRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub claim_remappings: ClaimRemappingList,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OidcClientRecord {
    /// Context reference for this record, if it carries a client ID.
    #[must_use]
    pub fn client_ref(&self) -> Option<OidcClientRef> {
        self.client_id.as_ref().map(|client_id| OidcClientRef {
            client_id: client_id.clone(),
            id: self.id,
            tenant_id: self.tenant_id,
            name: self.name.clone(),
        })
    }
}

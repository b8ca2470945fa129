//! Data models for claim remapping.

pub mod catalog;
pub mod client;
pub mod list;
pub mod remapping;

pub use catalog::{find_option, resolve_label, CatalogOption, SOURCE_TYPES, USER_FIELDS};
pub use client::{OidcClientRecord, OidcClientRef};
pub use list::ClaimRemappingList;
pub use remapping::{ClaimRemapping, ClaimSource, SourceType};

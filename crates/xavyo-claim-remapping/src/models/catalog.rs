//! Static reference catalogs for selector controls.

use serde::Serialize;

/// A selectable `{value, label}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl CatalogOption {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// User attributes selectable as a `user_field` source.
pub const USER_FIELDS: &[CatalogOption] = &[
    CatalogOption::new("email", "Email"),
    CatalogOption::new("first_name", "First Name"),
    CatalogOption::new("last_name", "Last Name"),
    CatalogOption::new("display_name", "Display Name"),
    CatalogOption::new("username", "Username"),
    CatalogOption::new("locale", "Locale"),
];

/// The three source types, in selector order.
pub const SOURCE_TYPES: &[CatalogOption] = &[
    CatalogOption::new("user_field", "User Field"),
    CatalogOption::new("custom_claim", "Custom Claim"),
    CatalogOption::new("static", "Static Value"),
];

/// Find the catalog entry whose value is `value`.
#[must_use]
pub fn find_option(options: &'static [CatalogOption], value: &str) -> Option<&'static CatalogOption> {
    options.iter().find(|option| option.value == value)
}

/// Label to display for a stored value.
///
/// Falls back to the raw value when the catalog has no such entry, so data
/// from an out-of-catalog source still renders.
#[must_use]
pub fn resolve_label<'a>(options: &'static [CatalogOption], value: &'a str) -> &'a str {
    match find_option(options, value) {
        Some(option) => option.label,
        None => value,
    }
}

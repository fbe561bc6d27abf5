//! Resolve requested display names against a lookup table.
//!
//! The resolver only depends on the [`Lookup`] trait, so it works over a
//! loaded [`MappingTable`] or any plain map.

use serde::Serialize;
use std::collections::HashMap;

use crate::mapping::MappingTable;

/// Identifier reported for names missing from the table.
pub const UNKNOWN_ITEM: &str = "Unknown item";

/// Anything that can map a display name to an API identifier.
pub trait Lookup {
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl Lookup for MappingTable {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl Lookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// One requested name and what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub item: String,
    /// `None` when the name is not in the table.
    pub api_name: Option<String>,
}

impl Resolution {
    /// The identifier, or [`UNKNOWN_ITEM`] if unresolved.
    pub fn api_name_or_unknown(&self) -> &str {
        self.api_name.as_deref().unwrap_or(UNKNOWN_ITEM)
    }

    pub fn is_resolved(&self) -> bool {
        self.api_name.is_some()
    }
}

/// Looks up every requested name, preserving order. Names are matched
/// verbatim (case-sensitive, no trimming).
pub fn resolve_items<L, S>(table: &L, items: &[S]) -> Vec<Resolution>
where
    L: Lookup + ?Sized,
    S: AsRef<str>,
{
    items
        .iter()
        .map(|item| {
            let item = item.as_ref();
            Resolution {
                item: item.to_string(),
                api_name: table.lookup(item).map(str::to_string),
            }
        })
        .collect()
}

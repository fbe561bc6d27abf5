//! In-memory lookup from composite display name to API identifier.

use std::collections::HashMap;

use super::parse::MappingEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: HashMap<String, String>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry under its composite key. Last write wins; the
    /// identifier it replaced, if any, is returned.
    pub fn insert(&mut self, entry: MappingEntry) -> Option<String> {
        let key = entry.key();
        self.entries.insert(key, entry.identifier)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<MappingEntry> for MappingTable {
    fn from_iter<I: IntoIterator<Item = MappingEntry>>(iter: I) -> Self {
        let mut table = MappingTable::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;

    fn entry(identifier: &str, name: &str) -> MappingEntry {
        MappingEntry {
            identifier: identifier.to_string(),
            display_name: name.to_string(),
            tier: Tier::from_identifier(identifier),
        }
    }

    #[test]
    fn tiers_get_distinct_keys() {
        let table: MappingTable = [
            entry("T5_MEAL_PIE", "Pork Pie"),
            entry("T5_MEAL_PIE@1", "Pork Pie"),
            entry("T5_MEAL_PIE@2", "Pork Pie"),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("Pork Pie"), Some("T5_MEAL_PIE"));
        assert_eq!(table.get("Pork Pie@2"), Some("T5_MEAL_PIE@2"));
        assert!(!table.contains("Pork Pie@3"));
    }

    #[test]
    fn last_write_wins() {
        let mut table = MappingTable::new();
        assert_eq!(table.insert(entry("T1_BREAD", "Bread")), None);
        assert_eq!(
            table.insert(entry("T4_BREAD", "Bread")).as_deref(),
            Some("T1_BREAD")
        );
        assert_eq!(table.get("Bread"), Some("T4_BREAD"));
        assert_eq!(table.len(), 1);
    }
}

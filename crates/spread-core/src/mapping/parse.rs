//! Line parser for the colon-delimited mapping file.

use crate::tier::Tier;

/// Display name used when a line has no third field.
pub const UNKNOWN_DISPLAY_NAME: &str = "UNKNOWN";

/// One usable line of the mapping file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// API identifier, e.g. `T4_MEAL_OMELETTE@1`.
    pub identifier: String,
    /// Display name as written in the file, without any tier tag.
    pub display_name: String,
    pub tier: Tier,
}

impl MappingEntry {
    /// Composite key: display name plus the tier tag of the identifier.
    pub fn key(&self) -> String {
        self.tier.compose_key(&self.display_name)
    }
}

/// Outcome of parsing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Empty or whitespace-only.
    Blank,
    Entry(MappingEntry),
    /// Fewer than two `:`-separated fields, so there is no identifier.
    Malformed,
}

/// Parses `ordinal:identifier[:display_name]`.
///
/// The ordinal is ignored and fields past the third are dropped. Identifier
/// and display name are trimmed; a missing display name becomes `UNKNOWN`.
pub fn parse_line(line: &str) -> ParsedLine {
    if line.trim().is_empty() {
        return ParsedLine::Blank;
    }

    let mut fields = line.split(':');
    let _ordinal = fields.next();
    let identifier = match fields.next() {
        Some(id) => id.trim(),
        None => return ParsedLine::Malformed,
    };
    let display_name = fields
        .next()
        .map(str::trim)
        .unwrap_or(UNKNOWN_DISPLAY_NAME);

    ParsedLine::Entry(MappingEntry {
        identifier: identifier.to_string(),
        display_name: display_name.to_string(),
        tier: Tier::from_identifier(identifier),
    })
}

//! Mapping file loader.
//!
//! Each non-blank line of the mapping file looks like
//! `ordinal:API_IDENTIFIER:Display Name`. The loader builds a table keyed by
//! display name plus enchantment tag, so `Pork Pie@2` and `Pork Pie` map to
//! different identifiers.

mod load;
mod parse;
mod table;

pub use load::{load_mapping, parse_mapping, read_mapping, LoadStats, LoadedMapping, MalformedLines};
pub use parse::{parse_line, MappingEntry, ParsedLine, UNKNOWN_DISPLAY_NAME};
pub use table::MappingTable;

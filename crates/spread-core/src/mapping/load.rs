//! Load a mapping file into a [`MappingTable`].

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::MappingError;

use super::parse::{parse_line, ParsedLine};
use super::table::MappingTable;

/// What to do with a line that has no identifier field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLines {
    /// Log a warning and continue.
    #[default]
    Skip,
    /// Abort the load with [`MappingError::MalformedLine`].
    Strict,
}

/// Counters collected while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Non-blank lines seen.
    pub lines: usize,
    /// Lines inserted into the table (including ones that replaced a key).
    pub entries: usize,
    /// Malformed lines skipped.
    pub skipped: usize,
    /// Inserts that replaced an earlier identifier for the same key.
    pub overwritten: usize,
}

#[derive(Debug, Clone)]
pub struct LoadedMapping {
    pub table: MappingTable,
    pub stats: LoadStats,
}

struct TableBuilder {
    policy: MalformedLines,
    table: MappingTable,
    stats: LoadStats,
}

impl TableBuilder {
    fn new(policy: MalformedLines) -> Self {
        Self {
            policy,
            table: MappingTable::new(),
            stats: LoadStats::default(),
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<(), MappingError> {
        match parse_line(line) {
            ParsedLine::Blank => {}
            ParsedLine::Entry(entry) => {
                self.stats.lines += 1;
                self.stats.entries += 1;
                let key = entry.key();
                if let Some(previous) = self.table.insert(entry) {
                    self.stats.overwritten += 1;
                    tracing::debug!(line_no, key = %key, previous = %previous, "mapping key overwritten");
                }
            }
            ParsedLine::Malformed => {
                self.stats.lines += 1;
                match self.policy {
                    MalformedLines::Skip => {
                        self.stats.skipped += 1;
                        tracing::warn!(line_no, line = %line.trim(), "skipping mapping line without identifier");
                    }
                    MalformedLines::Strict => {
                        return Err(MappingError::MalformedLine {
                            line_no,
                            line: line.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> LoadedMapping {
        LoadedMapping {
            table: self.table,
            stats: self.stats,
        }
    }
}

/// Reads and parses the mapping file at `path`.
///
/// Blank lines are skipped. Lines without an identifier follow `policy`.
/// The file must be UTF-8; invalid bytes surface as an IO error.
pub fn load_mapping(path: &Path, policy: MalformedLines) -> Result<LoadedMapping, MappingError> {
    let io_err = |source| MappingError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut builder = TableBuilder::new(policy);
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(io_err)?;
        builder.feed(idx + 1, &line)?;
    }
    let loaded = builder.finish();
    tracing::info!(
        path = %path.display(),
        keys = loaded.table.len(),
        lines = loaded.stats.lines,
        skipped = loaded.stats.skipped,
        overwritten = loaded.stats.overwritten,
        "mapping loaded"
    );
    Ok(loaded)
}

/// Parses mapping text already in memory.
pub fn parse_mapping(text: &str, policy: MalformedLines) -> Result<LoadedMapping, MappingError> {
    let mut builder = TableBuilder::new(policy);
    for (idx, line) in text.lines().enumerate() {
        builder.feed(idx + 1, line)?;
    }
    Ok(builder.finish())
}

/// Reads mapping lines from any buffered reader (e.g. stdin).
pub fn read_mapping<R: BufRead>(
    reader: R,
    source: &Path,
    policy: MalformedLines,
) -> Result<LoadedMapping, MappingError> {
    let mut builder = TableBuilder::new(policy);
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_err| MappingError::Io {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        builder.feed(idx + 1, &line)?;
    }
    Ok(builder.finish())
}

//! Batch driver: load mapping, resolve the request list, write CSV, build URL.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::SpreadConfig;
use crate::export;
use crate::mapping::{self, MalformedLines, MappingTable};
use crate::resolver::{self, Resolution};

/// Mapping path that reads the table from standard input.
pub const STDIN_PATH: &str = "-";

/// Outcome of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub url: String,
    pub csv_path: PathBuf,
    pub resolved: usize,
    pub unknown: usize,
    pub records: Vec<Resolution>,
}

/// Loads the mapping table from `path`, or from stdin when `path` is `-`.
pub fn load_table(path: &Path, policy: MalformedLines) -> Result<MappingTable> {
    let loaded = if path == Path::new(STDIN_PATH) {
        mapping::read_mapping(io::stdin().lock(), Path::new("<stdin>"), policy)?
    } else {
        mapping::load_mapping(path, policy)?
    };
    if loaded.table.is_empty() {
        tracing::warn!(path = %path.display(), "mapping table is empty; every item will be unknown");
    }
    Ok(loaded.table)
}

/// Resolves `items` against the configured mapping without writing anything.
pub fn resolve(cfg: &SpreadConfig, items: &[String]) -> Result<Vec<Resolution>> {
    let table = load_table(&cfg.mapping_path, cfg.malformed_lines)
        .with_context(|| format!("load mapping: {}", cfg.mapping_path.display()))?;
    Ok(resolver::resolve_items(&table, items))
}

/// Query URL for already resolved records using the configured endpoint.
pub fn query_url(cfg: &SpreadConfig, records: &[Resolution]) -> String {
    export::build_query_url(&cfg.base_url, records, &cfg.locations)
}

/// Runs the whole batch: resolve `items`, write `cfg.output_csv`, build the URL.
pub fn run(cfg: &SpreadConfig, items: &[String]) -> Result<RunSummary> {
    tracing::info!(
        mapping = %cfg.mapping_path.display(),
        items = items.len(),
        "starting run"
    );
    let records = resolve(cfg, items)?;

    let resolved = records.iter().filter(|r| r.is_resolved()).count();
    let unknown = records.len() - resolved;
    for r in records.iter().filter(|r| !r.is_resolved()) {
        tracing::debug!(item = %r.item, "item not found in mapping");
    }
    tracing::info!(resolved, unknown, "items resolved");

    export::write_csv(&cfg.output_csv, &records)?;
    let url = query_url(cfg, &records);

    Ok(RunSummary {
        url,
        csv_path: cfg.output_csv.clone(),
        resolved,
        unknown,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(dir: &Path, mapping: &str) -> SpreadConfig {
        let mapping_path = dir.join("items.txt");
        fs::write(&mapping_path, mapping).unwrap();
        SpreadConfig {
            mapping_path,
            output_csv: dir.join("item_api_mapping.csv"),
            base_url: "http://prices".to_string(),
            locations: vec!["Martlock".to_string(), "Thetford".to_string()],
            ..SpreadConfig::default()
        }
    }

    #[test]
    fn run_writes_csv_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(
            dir.path(),
            "1:T1_FISH_OMELET_AVALON@1:Avalonian Pork Omelette\n2:T4_BREAD:Bread\n",
        );
        let items = vec![
            "Avalonian Pork Omelette@1".to_string(),
            "Nonexistent Item".to_string(),
            "Bread".to_string(),
        ];
        let summary = run(&cfg, &items).unwrap();
        assert_eq!(summary.resolved, 2);
        assert_eq!(summary.unknown, 1);
        assert_eq!(
            summary.url,
            "http://prices/T1_FISH_OMELET_AVALON@1,Unknown item,T4_BREAD.xml?locations=Martlock,Thetford"
        );
        let csv = fs::read_to_string(&summary.csv_path).unwrap();
        assert_eq!(
            csv,
            "Item,API Name\n\
             Avalonian Pork Omelette@1,T1_FISH_OMELET_AVALON@1\n\
             Nonexistent Item,Unknown item\n\
             Bread,T4_BREAD\n"
        );
    }

    #[test]
    fn missing_mapping_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SpreadConfig {
            mapping_path: dir.path().join("absent.txt"),
            output_csv: dir.path().join("out.csv"),
            ..SpreadConfig::default()
        };
        let err = run(&cfg, &["Bread".to_string()]).unwrap_err();
        assert!(format!("{err:#}").contains("absent.txt"));
        assert!(!cfg.output_csv.exists());
    }

    #[test]
    fn strict_mode_fails_on_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config_in(dir.path(), "1:T4_BREAD:Bread\njunk\n");
        assert!(resolve(&cfg, &["Bread".to_string()]).is_ok());
        cfg.malformed_lines = MalformedLines::Strict;
        let err = resolve(&cfg, &["Bread".to_string()]).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }
}

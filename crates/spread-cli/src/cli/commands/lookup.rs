//! `spread lookup <names>...` – print identifiers for the given names.

use anyhow::{Context, Result};
use spread_core::config::SpreadConfig;
use spread_core::pipeline;

pub fn run_lookup(cfg: &SpreadConfig, names: &[String], json: bool) -> Result<()> {
    let records = pipeline::resolve(cfg, names)?;
    if json {
        let out = serde_json::to_string_pretty(&records).context("serialize lookup results")?;
        println!("{out}");
    } else {
        for r in &records {
            println!("{}\t{}", r.item, r.api_name_or_unknown());
        }
    }
    Ok(())
}

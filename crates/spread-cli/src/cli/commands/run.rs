//! `spread run` – full batch: resolve, write CSV, print URL.

use anyhow::{Context, Result};
use spread_core::config::SpreadConfig;
use spread_core::pipeline;

pub fn run_batch(cfg: &SpreadConfig, json: bool) -> Result<()> {
    let items = cfg.request_items()?;
    let summary = pipeline::run(cfg, &items)?;
    if json {
        let out = serde_json::to_string_pretty(&summary).context("serialize run summary")?;
        println!("{out}");
    } else {
        println!("{}", summary.url);
    }
    Ok(())
}

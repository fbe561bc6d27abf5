//! `spread url <names>...` – print the query URL only; no CSV is written.

use anyhow::Result;
use spread_core::config::SpreadConfig;
use spread_core::pipeline;

pub fn run_url(cfg: &SpreadConfig, names: &[String]) -> Result<()> {
    let records = pipeline::resolve(cfg, names)?;
    println!("{}", pipeline::query_url(cfg, &records));
    Ok(())
}

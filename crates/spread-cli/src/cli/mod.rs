//! CLI for spread.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use spread_core::config::{self, SpreadConfig};
use spread_core::mapping::MalformedLines;
use std::path::PathBuf;

use commands::{run_batch, run_completions, run_lookup, run_man, run_url};

/// Top-level CLI for spread.
#[derive(Debug, Parser)]
#[command(name = "spread", version)]
#[command(
    about = "Map item names to price API identifiers, write a CSV and print a price query URL",
    long_about = None
)]
pub struct Cli {
    /// Config file to use instead of ~/.config/spread/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // `None` runs the batch with defaults.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Mapping-file options shared by the commands that load a table.
#[derive(Debug, Default, Args)]
pub struct MappingArgs {
    /// Mapping file (`ordinal:identifier:name` per line); `-` reads stdin.
    #[arg(long, value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Fail on mapping lines without an identifier instead of skipping them.
    #[arg(long)]
    pub strict: bool,
}

impl MappingArgs {
    fn apply(&self, cfg: &mut SpreadConfig) {
        if let Some(path) = &self.mapping {
            cfg.mapping_path = path.clone();
        }
        if self.strict {
            cfg.malformed_lines = MalformedLines::Strict;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve the request list, write the CSV and print the query URL.
    Run {
        #[command(flatten)]
        mapping: MappingArgs,

        /// CSV output path (overwritten).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// File with one item name per line, replacing the configured list.
        #[arg(long, value_name = "PATH")]
        items_file: Option<PathBuf>,

        /// Print a JSON summary instead of the bare URL.
        #[arg(long)]
        json: bool,
    },

    /// Look up item names and print their API identifiers.
    Lookup {
        /// Display names, tier tag included (e.g. "Pork Pie@2").
        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        mapping: MappingArgs,

        /// Print JSON records instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },

    /// Print only the query URL for the given item names.
    Url {
        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        mapping: MappingArgs,
    },

    /// Generate a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

fn load_config(path: Option<&PathBuf>) -> Result<SpreadConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or(CliCommand::Run {
            mapping: MappingArgs::default(),
            output: None,
            items_file: None,
            json: false,
        });

        match command {
            CliCommand::Run {
                mapping,
                output,
                items_file,
                json,
            } => {
                let mut cfg = load_config(cli.config.as_ref())?;
                mapping.apply(&mut cfg);
                if let Some(output) = output {
                    cfg.output_csv = output;
                }
                if items_file.is_some() {
                    cfg.items_file = items_file;
                }
                run_batch(&cfg, json)?;
            }
            CliCommand::Lookup {
                names,
                mapping,
                json,
            } => {
                let mut cfg = load_config(cli.config.as_ref())?;
                mapping.apply(&mut cfg);
                run_lookup(&cfg, &names, json)?;
            }
            CliCommand::Url { names, mapping } => {
                let mut cfg = load_config(cli.config.as_ref())?;
                mapping.apply(&mut cfg);
                run_url(&cfg, &names)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

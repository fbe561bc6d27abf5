//! Tests for the default command and `run`.

use super::{parse, parse_cli};
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_no_subcommand() {
    let cli = parse_cli(&["spread"]);
    assert!(cli.command.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_run_defaults() {
    match parse(&["spread", "run"]) {
        CliCommand::Run {
            mapping,
            output,
            items_file,
            json,
        } => {
            assert!(mapping.mapping.is_none());
            assert!(!mapping.strict);
            assert!(output.is_none());
            assert!(items_file.is_none());
            assert!(!json);
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_all_flags() {
    match parse(&[
        "spread",
        "run",
        "--mapping",
        "/data/items.txt",
        "--output",
        "out.csv",
        "--items-file",
        "wanted.txt",
        "--strict",
        "--json",
    ]) {
        CliCommand::Run {
            mapping,
            output,
            items_file,
            json,
        } => {
            assert_eq!(mapping.mapping.as_deref(), Some(Path::new("/data/items.txt")));
            assert!(mapping.strict);
            assert_eq!(output.as_deref(), Some(Path::new("out.csv")));
            assert_eq!(items_file.as_deref(), Some(Path::new("wanted.txt")));
            assert!(json);
        }
        _ => panic!("expected Run with flags"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = parse_cli(&["spread", "run", "--config", "/etc/spread.toml"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/spread.toml")));
}

#[test]
fn cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["spread", "run", "--jobs", "4"]).is_err());
}

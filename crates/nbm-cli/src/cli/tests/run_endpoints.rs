//! Tests for run and endpoints subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_run() {
    match parse(&["nbm", "run"]) {
        CliCommand::Run {
            download_dir,
            concurrency,
        } => {
            assert!(download_dir.is_none());
            assert!(concurrency.is_none());
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_download_dir() {
    match parse(&["nbm", "run", "--download-dir", "/tmp/mirror"]) {
        CliCommand::Run { download_dir, .. } => {
            assert_eq!(
                download_dir.as_deref(),
                Some(std::path::Path::new("/tmp/mirror"))
            );
        }
        _ => panic!("expected Run with --download-dir"),
    }
}

#[test]
fn cli_parse_run_concurrency() {
    match parse(&["nbm", "run", "--concurrency", "8"]) {
        CliCommand::Run { concurrency, .. } => assert_eq!(concurrency, Some(8)),
        _ => panic!("expected Run with --concurrency 8"),
    }
}

#[test]
fn cli_parse_endpoints() {
    match parse(&["nbm", "endpoints"]) {
        CliCommand::Endpoints => {}
        _ => panic!("expected Endpoints"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["nbm", "frobnicate"]).is_err());
}

#[test]
fn cli_rejects_non_numeric_concurrency() {
    assert!(Cli::try_parse_from(["nbm", "run", "--concurrency", "lots"]).is_err());
}

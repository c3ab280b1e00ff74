//! Vaultward CLI - permission-boundary checker.
//!
//! Checks that a child rule set (a role being duplicated, a token being
//! scoped, a sub-identity being created) never grants more access than
//! the parent rule set it is delegated from.
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Child stays within the parent's boundary |
//! | 1 | Boundary violation (missing permissions listed) |
//! | 2 | Malformed input (bad JSON, invalid rule, unreadable file) |
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: tracing filter (overrides `--debug`)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vaultward_boundary::{validate_boundary, BoundaryVerdict};
use vaultward_rules::RuleSet;

/// Check that a child rule set stays within a parent's permission boundary.
#[derive(Parser, Debug)]
#[command(name = "vaultward")]
#[command(version, about, long_about = None)]
struct Args {
    /// Rule-set JSON file of the delegating identity (the boundary)
    parent: PathBuf,

    /// Rule-set JSON file proposed for the subordinate identity
    child: PathBuf,

    /// Print the verdict as JSON instead of a human-readable summary
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    match run(&args) {
        Ok(verdict) if verdict.is_valid() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<BoundaryVerdict> {
    let parent = load_rule_set(&args.parent)?;
    let child = load_rule_set(&args.child)?;
    debug!(
        parent_rules = parent.len(),
        child_rules = child.len(),
        "validating boundary"
    );

    let verdict = validate_boundary(&parent, &child);

    if args.json {
        println!(
            "{}",
            serde_json::to_string(&verdict).context("serialize verdict")?
        );
    } else if verdict.is_valid() {
        println!("ok: child rule set stays within the parent's permission boundary");
    } else {
        println!(
            "boundary violation: child would grant {} permission(s) the parent does not hold:",
            verdict.missing_permissions().len()
        );
        for missing in verdict.missing_permissions() {
            println!("  - {missing}");
        }
    }

    Ok(verdict)
}

fn load_rule_set(path: &Path) -> Result<RuleSet> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read rule set {}", path.display()))?;
    let set = RuleSet::from_json(&raw)
        .with_context(|| format!("parse rule set {}", path.display()))?;
    debug!(path = %path.display(), rules = set.len(), "loaded rule set");
    Ok(set)
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // Diagnostics go to stderr; stdout carries only the verdict.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

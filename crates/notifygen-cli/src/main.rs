//! Developer CLI for the notifygen source generator.
//!
//! Collects `.rs` sources from the given inputs, derives each file's module
//! path from its location, runs one generation pass, and writes every
//! generated unit into the output directory under its hint key. `--check`
//! compares against what is already on disk instead of writing, for CI.

use clap::Parser;
use log::warn;
use notifygen::prelude::*;
use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};
use thiserror::Error as ThisError;

///
/// CliError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
enum CliError {
    #[error("io error on '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

///
/// Cli
///

/// Scan Rust sources for `#[observable]` fields and emit observable
/// property implementations.
#[derive(Debug, Parser)]
#[command(name = "notifygen", version, about)]
struct Cli {
    /// Files or directories to scan for `.rs` sources.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory the generated units are written to.
    #[arg(long, default_value = "generated")]
    out: PathBuf,

    /// Compare against existing output instead of writing; exits non-zero
    /// when any unit is missing or out of date.
    #[arg(long)]
    check: bool,

    /// Print the run report as JSON on stdout.
    #[arg(long)]
    report: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match generate(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        // drift detected in --check mode
        Ok(true) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn generate(cli: &Cli) -> Result<bool, CliError> {
    let mut trees = Vec::new();

    for input in &cli.inputs {
        let mut files = Vec::new();
        collect_sources(input, &mut files)?;
        files.sort();

        let base = if input.is_dir() {
            input.clone()
        } else {
            input.parent().map(Path::to_path_buf).unwrap_or_default()
        };

        for file in files {
            let source = fs::read_to_string(&file).map_err(|source| CliError::Io {
                path: file.clone(),
                source,
            })?;

            match SourceTree::parse(
                file.display().to_string(),
                module_path_for(&base, &file),
                &source,
            ) {
                Ok(tree) => trees.push(tree),
                // an unparsable file is skipped, matching the per-field
                // skip policy of the pipeline itself
                Err(err) => warn!("{err}"),
            }
        }
    }

    let (units, report) = run_to_vec(&trees);

    for diagnostic in &report.diagnostics {
        warn!("{diagnostic}");
    }

    let drift = if cli.check {
        check_units(&cli.out, &units)
    } else {
        write_units(&cli.out, &units)?;
        false
    };

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(drift)
}

fn check_units(out: &Path, units: &[GeneratedUnit]) -> bool {
    let mut drift = false;

    for unit in units {
        let path = out.join(&unit.hint);
        let existing = fs::read_to_string(&path).ok();

        if existing.as_deref() != Some(unit.text.as_str()) {
            eprintln!("out of date: {}", path.display());
            drift = true;
        }
    }

    drift
}

fn write_units(out: &Path, units: &[GeneratedUnit]) -> Result<(), CliError> {
    fs::create_dir_all(out).map_err(|source| CliError::Io {
        path: out.to_path_buf(),
        source,
    })?;

    for unit in units {
        let path = out.join(&unit.hint);
        fs::write(&path, &unit.text).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}

/// Collect `.rs` files under `path`, recursively for directories.
fn collect_sources(path: &Path, files: &mut Vec<PathBuf>) -> Result<(), CliError> {
    let io_err = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };

    if path.is_dir() {
        for entry in fs::read_dir(path).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            collect_sources(&entry.path(), files)?;
        }
    } else if path.extension().is_some_and(|ext| ext == "rs") {
        files.push(path.to_path_buf());
    }

    Ok(())
}

/// Module path of a source file relative to its input base.
///
/// `src/demo.rs` lives under module `demo`; crate roots and `mod.rs` files
/// do not contribute a segment of their own.
fn module_path_for(base: &Path, file: &Path) -> Vec<String> {
    let relative = file.strip_prefix(base).unwrap_or(file);

    let mut segments: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();

    if let Some(last) = segments.last_mut() {
        *last = last.trim_end_matches(".rs").to_string();
    }

    if matches!(
        segments.last().map(String::as_str),
        Some("lib" | "main" | "mod")
    ) {
        segments.pop();
    }

    segments
}

//! `lox-astgen`: regenerate the checked-in syntax-tree node types.
//!
//! Usage: `lox-astgen [--check] [out-dir]`
//!
//! Without `--check` the artifacts are written into `out-dir` (default: the
//! `lox_ir` AST module). With `--check` nothing is written and the exit code
//! is 1 if any file is missing or out of date.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;

use lox_astgen::{generate, lox_node_table, stale_artifacts, write_artifacts, AstGenError};

const DEFAULT_OUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../lox_ir/src/ast");

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn print_usage() {
    eprintln!("Usage: lox-astgen [--check] [out-dir]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --check    Fail if the checked-in files are out of date");
}

fn main() -> ExitCode {
    init_tracing();

    let mut check = false;
    let mut out_dir = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--check" => check = true,
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            flag if flag.starts_with('-') => {
                eprintln!("error: unknown option `{flag}`");
                print_usage();
                return ExitCode::from(64);
            }
            _ if out_dir.is_some() => {
                eprintln!("error: more than one output directory");
                print_usage();
                return ExitCode::from(64);
            }
            _ => out_dir = Some(PathBuf::from(&arg)),
        }
    }
    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    match run(&out_dir, check) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when `--check` found stale files.
fn run(out_dir: &Path, check: bool) -> Result<bool, AstGenError> {
    let artifacts = generate(&lox_node_table())?;

    if check {
        let stale = stale_artifacts(out_dir, &artifacts)?;
        for path in &stale {
            eprintln!("out of date: {}", path.display());
        }
        return Ok(stale.is_empty());
    }

    let written = write_artifacts(out_dir, &artifacts)?;
    if written.is_empty() {
        println!("{} is up to date", out_dir.display());
    }
    for path in &written {
        println!("wrote {}", path.display());
    }
    Ok(true)
}

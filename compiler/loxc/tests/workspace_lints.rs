#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Reads the workspace manifests to check that every crate builds under the
//! shared lint table, with unused code rejected rather than warned about.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

const WORKSPACE_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../..");

/// Lines of the `[header]` table in `manifest`, up to the next table.
fn table<'a>(manifest: &'a str, header: &str) -> Vec<&'a str> {
    manifest
        .lines()
        .skip_while(|line| line.trim() != header)
        .skip(1)
        .take_while(|line| !line.trim_start().starts_with('['))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[test]
fn unused_code_is_denied() {
    let manifest = fs::read_to_string(Path::new(WORKSPACE_ROOT).join("Cargo.toml")).unwrap();
    let rust_lints = table(&manifest, "[workspace.lints.rust]");

    for lint in ["dead_code = \"deny\"", "unused = \"deny\"", "unsafe_code = \"deny\""] {
        assert!(rust_lints.contains(&lint), "missing `{lint}` in {rust_lints:?}");
    }
}

#[test]
fn every_crate_inherits_the_workspace_lints() {
    let compiler = Path::new(WORKSPACE_ROOT).join("compiler");
    let mut checked = 0;
    for entry in fs::read_dir(&compiler).unwrap() {
        let manifest_path = entry.unwrap().path().join("Cargo.toml");
        let Ok(manifest) = fs::read_to_string(&manifest_path) else {
            continue;
        };
        assert_eq!(
            table(&manifest, "[lints]"),
            ["workspace = true"],
            "{} does not use the workspace lints",
            manifest_path.display()
        );
        checked += 1;
    }
    assert_eq!(checked, 7);
}

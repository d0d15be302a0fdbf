//! Writing generated artifacts to disk and checking them for staleness.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{Artifact, AstGenError};

/// Write every artifact into `dir`, overwriting existing files.
///
/// Files whose contents already match are left untouched. Every stale file
/// is first written to a temporary file beside it, and only once all of
/// them are written are they renamed into place; a failed write leaves the
/// old files as they were. Returns the paths that were (re)written.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, AstGenError> {
    fs::create_dir_all(dir).map_err(|source| AstGenError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut staged = Vec::new();
    for path in stale_artifacts(dir, artifacts)? {
        let Some(artifact) = artifacts.iter().find(|a| dir.join(&a.file_name) == path) else {
            continue;
        };
        let file = stage(dir, &path, &artifact.source)?;
        staged.push((path, file));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (path, file) in staged {
        file.persist(&path).map_err(|e| AstGenError::Write {
            path: path.clone(),
            source: e.error,
        })?;
        info!(path = %path.display(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}

/// Write `text` to a temporary file in the directory of `path`. The file is
/// deleted again if it is dropped without being persisted.
fn stage(dir: &Path, path: &Path, text: &str) -> Result<NamedTempFile, AstGenError> {
    let write_error = |source| AstGenError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".lox-astgen");
    if let Some(permissions) = target_permissions(path) {
        builder.permissions(permissions);
    }
    let mut file = builder
        .tempfile_in(path.parent().unwrap_or(dir))
        .map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)?;
    debug!(path = %path.display(), temp = %file.path().display(), "staged artifact");
    Ok(file)
}

/// Permissions the rewritten file should keep: those of the file it
/// replaces, or the usual `rw-r--r--` for a new one.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Paths in `dir` that are missing or differ from the artifacts.
pub fn stale_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, AstGenError> {
    let mut stale = Vec::new();
    for artifact in artifacts {
        let path = dir.join(&artifact.file_name);
        let current = match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(source) => return Err(AstGenError::Read { path, source }),
        };
        if current.as_deref() == Some(artifact.source.as_str()) {
            debug!(path = %path.display(), "artifact up to date");
        } else {
            stale.push(path);
        }
    }
    Ok(stale)
}

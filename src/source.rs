// src/source.rs

//! Source materialization.
//!
//! The relay only ever runs a real file on disk. This module guarantees
//! that: an `OnDisk` source is passed through untouched, while an
//! `InMemory` source is written to a temporary file whose removal is tied
//! to the returned handle's lifetime.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::{Result, RunrelayError};

/// The code to run: either backed by a file on disk, or held only as text.
///
/// Exactly one variant is active per invocation. Callers pass this
/// explicitly; there is no ambient "current buffer" lookup.
#[derive(Debug, Clone)]
pub enum ScriptSource {
    OnDisk(PathBuf),
    InMemory(String),
}

/// A resolved, runnable script path.
///
/// - `Borrowed` wraps a caller-owned path; nothing is created or deleted.
/// - `Temp` owns a temporary file that is removed when the handle is
///   dropped, whether the run completed, failed, or never started.
#[derive(Debug)]
pub enum MaterializedScript {
    Borrowed(PathBuf),
    Temp(NamedTempFile),
}

impl MaterializedScript {
    /// The path to launch the subprocess against.
    pub fn path(&self) -> &Path {
        match self {
            MaterializedScript::Borrowed(path) => path,
            MaterializedScript::Temp(file) => file.path(),
        }
    }

    /// Whether this handle owns a temporary file.
    pub fn is_temporary(&self) -> bool {
        matches!(self, MaterializedScript::Temp(_))
    }
}

/// Resolve a `ScriptSource` to a runnable path.
///
/// For `InMemory` sources the text is written verbatim to a uniquely named
/// file in the system temp directory; `suffix` (e.g. `".py"`) is appended
/// to the generated name so the interpreter sees a familiar extension.
/// Each invocation gets its own file, so overlapping runs cannot contend
/// for the same path.
pub fn resolve(source: ScriptSource, suffix: &str) -> Result<MaterializedScript> {
    match source {
        ScriptSource::OnDisk(path) => Ok(MaterializedScript::Borrowed(path)),
        ScriptSource::InMemory(text) => {
            let mut file = tempfile::Builder::new()
                .prefix("runrelay-")
                .suffix(suffix)
                .tempfile()
                .map_err(|source| RunrelayError::Materialize {
                    path: std::env::temp_dir(),
                    source,
                })?;

            file.write_all(text.as_bytes())
                .and_then(|()| file.flush())
                .map_err(|source| RunrelayError::Materialize {
                    path: file.path().to_path_buf(),
                    source,
                })?;

            debug!(path = ?file.path(), bytes = text.len(), "wrote in-memory script to temp file");
            Ok(MaterializedScript::Temp(file))
        }
    }
}

//! File-processing core: the transient record behind the `process` command.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::errors::{AppError, AppResult};

/// Transient value for one `process` invocation: the input path, its raw
/// contents, and the derived transformed output. Constructed per call,
/// discarded when the command returns.
#[derive(Debug, Clone)]
pub struct InputRecord {
    pub path: PathBuf,
    pub contents: String,
    pub transformed: String,
}

impl InputRecord {
    /// Read `path` and derive the transformed output.
    ///
    /// The path must refer to an existing regular file.
    #[instrument]
    pub fn load(path: &Path) -> AppResult<Self> {
        ensure_input_file(path)?;

        let contents = fs::read_to_string(path).map_err(|e| AppError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("read {} bytes from {}", contents.len(), path.display());

        let transformed = transform(&contents);

        Ok(Self {
            path: path.to_path_buf(),
            contents,
            transformed,
        })
    }

    /// Write the transformed output to `target`, replacing existing content.
    #[instrument]
    pub fn write_to(&self, target: &Path) -> AppResult<()> {
        fs::write(target, &self.transformed).map_err(|e| AppError::FileWrite {
            path: target.to_path_buf(),
            source: e,
        })
    }
}

/// Pass-through transform. Single seam where a real content rewrite would go.
pub fn transform(contents: &str) -> String {
    contents.to_string()
}

fn ensure_input_file(path: &Path) -> AppResult<()> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

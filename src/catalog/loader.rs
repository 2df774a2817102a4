// SPDX-License-Identifier: MPL-2.0
//! Loading of the two wonder catalog files.
//!
//! The files ship embedded in the binary; a directory configured under
//! `[data] wonders_dir` replaces them file by file.

use super::wonder::Wonder;
use crate::assets;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Man-made wonders, loaded first.
pub const CIVILIZATION_FILE: &str = "civilization-wonders.json";

/// Natural wonders, appended after the man-made ones.
pub const NATURAL_FILE: &str = "natural-wonders.json";

/// Where the catalog files are read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Embedded,
    Directory(PathBuf),
}

impl CatalogSource {
    pub fn from_override(dir: Option<PathBuf>) -> Self {
        dir.map_or(CatalogSource::Embedded, CatalogSource::Directory)
    }
}

/// Loads and concatenates both catalog files.
///
/// Records failing shape validation are skipped and logged. A missing file
/// in an override directory is an error; a file containing `null` yields no
/// records.
pub fn load_wonders(source: &CatalogSource) -> Result<Vec<Wonder>> {
    let mut wonders = Vec::new();
    for file in [CIVILIZATION_FILE, NATURAL_FILE] {
        let text = read_catalog_file(source, file)?;
        let parsed = parse_wonders(&text)?;
        tracing::debug!(file, count = parsed.len(), "loaded wonder catalog file");
        wonders.extend(parsed);
    }
    tracing::info!(count = wonders.len(), "wonder catalog ready");
    Ok(wonders)
}

/// Async wrapper used by the application at startup.
pub async fn load_wonders_async(source: CatalogSource) -> Result<Vec<Wonder>> {
    tokio::task::spawn_blocking(move || load_wonders(&source))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

/// Parses one catalog file, keeping only records that validate.
pub fn parse_wonders(text: &str) -> Result<Vec<Wonder>> {
    let raw: Option<Vec<serde_json::Value>> = serde_json::from_str(text)?;
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let mut wonders = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<Wonder>(value) {
            Ok(wonder) => match wonder.validate() {
                Ok(()) => wonders.push(wonder),
                Err(err) => tracing::warn!(%err, "skipping invalid wonder"),
            },
            Err(err) => tracing::warn!(%err, "skipping malformed wonder record"),
        }
    }
    Ok(wonders)
}

fn read_catalog_file(source: &CatalogSource, file: &str) -> Result<String> {
    match source {
        CatalogSource::Embedded => assets::data_text(file),
        CatalogSource::Directory(dir) => read_file(&dir.join(file)),
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))
}

// SPDX-License-Identifier: MPL-2.0
//! Data files embedded in the binary (wonder catalogs, country outlines).

use crate::error::{Error, Result};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct DataAsset;

/// Returns an embedded data file as text.
pub fn data_text(file: &str) -> Result<String> {
    let asset = DataAsset::get(file)
        .ok_or_else(|| Error::Io(format!("embedded asset '{file}' is missing")))?;
    Ok(String::from_utf8_lossy(asset.data.as_ref()).into_owned())
}

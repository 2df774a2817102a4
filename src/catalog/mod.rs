// SPDX-License-Identifier: MPL-2.0
//! Wonder catalog: record type, loading and filtering.
//!
//! The catalog is immutable after load. The sidebar and the map markers both
//! render [`filter_wonders`] output for the current [`WonderFilter`].

mod filter;
mod loader;
mod wonder;

pub use filter::{filter_wonders, WonderFilter};
pub use loader::{
    load_wonders, load_wonders_async, parse_wonders, CatalogSource, CIVILIZATION_FILE,
    NATURAL_FILE,
};
pub use wonder::{Wonder, WonderKey, WonderKind};

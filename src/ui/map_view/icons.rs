// SPDX-License-Identifier: MPL-2.0
//! Picture icons for wonder markers.
//!
//! Each wonder with an image is requested once per session. The popup and
//! the marker share the decoded handle, so a picture downloaded for either
//! serves both. Until a picture arrives, and after it fails, the marker stays
//! a circle.

use crate::catalog::{Wonder, WonderKey};
use crate::error::Error;
use iced::widget::image;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Icon {
    Pending,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct MarkerIcons {
    icons: HashMap<WonderKey, Icon>,
}

impl MarkerIcons {
    /// Decoded picture for `wonder`, once downloaded.
    pub fn handle(&self, wonder: WonderKey) -> Option<&image::Handle> {
        match self.icons.get(&wonder) {
            Some(Icon::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    pub fn is_pending(&self, wonder: WonderKey) -> bool {
        matches!(self.icons.get(&wonder), Some(Icon::Pending))
    }

    pub fn has_failed(&self, wonder: WonderKey) -> bool {
        matches!(self.icons.get(&wonder), Some(Icon::Failed))
    }

    /// Image URLs of the `wonders` never requested before. Returned wonders
    /// become pending.
    pub fn request_missing(&mut self, wonders: &[Wonder]) -> Vec<(WonderKey, String)> {
        let mut requests = Vec::new();
        for wonder in wonders {
            let Some(url) = &wonder.image else {
                continue;
            };
            if let Entry::Vacant(slot) = self.icons.entry(wonder.key()) {
                slot.insert(Icon::Pending);
                requests.push((wonder.key(), url.clone()));
            }
        }
        requests
    }

    /// Applies a picture download. A failure never replaces a picture that
    /// is already shown.
    pub fn loaded(&mut self, wonder: WonderKey, result: Result<image::Handle, Error>) {
        match result {
            Ok(handle) => {
                self.icons.insert(wonder, Icon::Ready(handle));
            }
            Err(error) => {
                if self.handle(wonder).is_none() {
                    tracing::debug!(?wonder, %error, "marker icon unavailable");
                    self.icons.insert(wonder, Icon::Failed);
                }
            }
        }
    }

    /// Number of pictures ready to draw.
    pub fn len(&self) -> usize {
        self.icons
            .values()
            .filter(|icon| matches!(icon, Icon::Ready(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

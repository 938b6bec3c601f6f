use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Explicit `asset → paragraph` placements applied before the automatic rules.
///
/// Photos are keyed by file name and videos by raw URL. A key matches every
/// asset with that name. Targets outside `1..=paragraph_count` are ignored and
/// the asset goes through the automatic rules instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualPlacements {
    #[serde(default)]
    pub photos: BTreeMap<String, usize>,
    #[serde(default)]
    pub videos: BTreeMap<String, usize>,
}

impl ManualPlacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin_photo(mut self, name: impl Into<String>, paragraph: usize) -> Self {
        self.photos.insert(name.into(), paragraph);
        self
    }

    pub fn pin_video(mut self, raw: impl Into<String>, paragraph: usize) -> Self {
        self.videos.insert(raw.into(), paragraph);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty() && self.videos.is_empty()
    }

    pub fn photo_target(&self, name: &str, paragraph_count: usize) -> Option<usize> {
        Self::resolve(self.photos.get(name).copied(), paragraph_count)
    }

    pub fn video_target(&self, raw: &str, paragraph_count: usize) -> Option<usize> {
        Self::resolve(self.videos.get(raw).copied(), paragraph_count)
    }

    fn resolve(target: Option<usize>, paragraph_count: usize) -> Option<usize> {
        target.filter(|t| (1..=paragraph_count).contains(t))
    }
}

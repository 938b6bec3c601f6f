//! # Media Placement
//!
//! Decides where every photo and video of an article goes.
//!
//! ## Pipeline
//!
//! 1. **Manual overrides**: assets pinned through [`ManualPlacements`] become
//!    their own units and leave the automatic pools.
//! 2. **Photos**: the remaining photos are partitioned up front into singles,
//!    doubles and a closing triple depending on how many there are.
//! 3. **Videos**: the remaining videos are spread evenly over the article.
//!
//! Units anchored to the same paragraph keep insertion order: overrides,
//! then photos, then videos.
//!
//! ## Photo grouping
//!
//! | Remaining photos `N` | Units |
//! |---|---|
//! | even, `N > 4` | consecutive pairs, pair `j` at `anchor(2j)` |
//! | odd, `N > 5` | five singles at `anchor(2i)`, pairs from `photos[5..N-3]` at `anchor(2(j+5))`, the last three as a triple on the last paragraph |
//! | otherwise | one single per photo at `anchor(2i)` |
//!
//! The odd middle slice always has odd length, so its final "pair" holds one
//! photo. With `N = 7` the slice is empty and the closing triple shares its
//! first photo with the fifth single.
//!
//! ## Gallery overflow
//!
//! Photos that cannot be anchored go to [`PlacementPlan::overflow`]. With the
//! rules above that only happens when the article has no paragraphs at all.

pub mod anchor;
pub mod gallery;
pub mod overrides;

use serde::Serialize;

use crate::media::{PhotoAsset, VideoAsset};

pub use anchor::{Anchoring, STRIDE};
pub use gallery::GalleryLayout;
pub use overrides::ManualPlacements;

/// Photos placed one by one before any pairing starts (odd counts).
const LEADING_SINGLES: usize = 5;
/// Size of the group that closes an article (odd counts).
const CLOSING_GROUP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Single,
    /// A row of two; the last row of an odd middle slice carries one photo.
    Double,
    Triple,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSource {
    Automatic,
    /// Pinned through [`ManualPlacements`].
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaAsset {
    Photo(PhotoAsset),
    Video(VideoAsset),
}

/// Media inserted right after paragraph `anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementUnit {
    pub anchor: usize,
    pub kind: UnitKind,
    pub assets: Vec<MediaAsset>,
    pub source: UnitSource,
}

impl PlacementUnit {
    fn photos(kind: UnitKind, anchor: usize, photos: &[PhotoAsset]) -> Self {
        Self {
            anchor,
            kind,
            assets: photos.iter().cloned().map(MediaAsset::Photo).collect(),
            source: UnitSource::Automatic,
        }
    }

    fn video(anchor: usize, video: &VideoAsset) -> Self {
        Self {
            anchor,
            kind: UnitKind::Video,
            assets: vec![MediaAsset::Video(video.clone())],
            source: UnitSource::Automatic,
        }
    }

    fn pinned(mut self) -> Self {
        self.source = UnitSource::Manual;
        self
    }

    /// Photos carried by this unit, in order.
    pub fn photo_assets(&self) -> impl Iterator<Item = &PhotoAsset> {
        self.assets.iter().filter_map(|asset| match asset {
            MediaAsset::Photo(photo) => Some(photo),
            MediaAsset::Video(_) => None,
        })
    }

    /// The video of a `Video` unit.
    pub fn video_asset(&self) -> Option<&VideoAsset> {
        self.assets.iter().find_map(|asset| match asset {
            MediaAsset::Video(video) => Some(video),
            MediaAsset::Photo(_) => None,
        })
    }
}

/// Where every asset goes, computed fresh for each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlacementPlan {
    pub units: Vec<PlacementUnit>,
    pub overflow: Vec<PhotoAsset>,
}

impl PlacementPlan {
    /// Units anchored after paragraph `anchor`, in render order.
    pub fn units_at(&self, anchor: usize) -> impl Iterator<Item = &PlacementUnit> {
        self.units.iter().filter(move |unit| unit.anchor == anchor)
    }

    /// Gallery layout, or `None` when nothing overflowed.
    pub fn gallery_layout(&self) -> Option<GalleryLayout> {
        GalleryLayout::for_count(self.overflow.len())
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty() && self.overflow.is_empty()
    }
}

/// Computes the placement plan for an article with `paragraph_count` paragraphs.
pub fn plan_media(
    paragraph_count: usize,
    photos: &[PhotoAsset],
    videos: &[VideoAsset],
    overrides: &ManualPlacements,
) -> PlacementPlan {
    let anchoring = Anchoring::new(paragraph_count);
    let mut units = Vec::new();

    let mut remaining_photos = Vec::with_capacity(photos.len());
    for photo in photos {
        match overrides.photo_target(&photo.name, paragraph_count) {
            Some(anchor) => units.push(
                PlacementUnit::photos(UnitKind::Single, anchor, std::slice::from_ref(photo))
                    .pinned(),
            ),
            None => remaining_photos.push(photo.clone()),
        }
    }

    let mut remaining_videos = Vec::with_capacity(videos.len());
    for video in videos {
        match overrides.video_target(&video.raw, paragraph_count) {
            Some(anchor) => units.push(PlacementUnit::video(anchor, video).pinned()),
            None => remaining_videos.push(video.clone()),
        }
    }

    let mut overflow = Vec::new();
    if paragraph_count == 0 {
        log::debug!(
            "no paragraphs to anchor {} photos, sending them to the gallery",
            remaining_photos.len()
        );
        overflow = remaining_photos;
    } else {
        units.extend(group_photos(&anchoring, &remaining_photos));
    }

    units.extend(spread_videos(&anchoring, &remaining_videos));

    PlacementPlan { units, overflow }
}

/// Partitions photos into units following the count and parity rules.
pub fn group_photos(anchoring: &Anchoring, photos: &[PhotoAsset]) -> Vec<PlacementUnit> {
    let n = photos.len();

    if n % 2 == 0 && n > 4 {
        log::debug!("placing {n} photos as pairs");
        return pairs(anchoring, photos, 0);
    }

    if n % 2 == 1 && n > LEADING_SINGLES {
        log::debug!("placing {n} photos as singles, pairs and a closing triple");
        let closing_start = n - CLOSING_GROUP;
        let mut units = singles(anchoring, &photos[..LEADING_SINGLES]);
        if let Some(middle) = photos.get(LEADING_SINGLES..closing_start) {
            units.extend(pairs(anchoring, middle, LEADING_SINGLES));
        }
        units.push(PlacementUnit::photos(
            UnitKind::Triple,
            anchoring.last(),
            &photos[closing_start..],
        ));
        return units;
    }

    log::debug!("placing {n} photos as singles");
    singles(anchoring, photos)
}

fn singles(anchoring: &Anchoring, photos: &[PhotoAsset]) -> Vec<PlacementUnit> {
    photos
        .iter()
        .enumerate()
        .map(|(i, photo)| {
            PlacementUnit::photos(
                UnitKind::Single,
                anchoring.photo_anchor(i),
                std::slice::from_ref(photo),
            )
        })
        .collect()
}

/// Consecutive pairs; pair `j` takes photo slot `j + offset`.
fn pairs(anchoring: &Anchoring, photos: &[PhotoAsset], offset: usize) -> Vec<PlacementUnit> {
    photos
        .chunks(2)
        .enumerate()
        .map(|(j, pair)| {
            PlacementUnit::photos(UnitKind::Double, anchoring.photo_anchor(j + offset), pair)
        })
        .collect()
}

/// Spreads videos evenly over the article.
pub fn spread_videos(anchoring: &Anchoring, videos: &[VideoAsset]) -> Vec<PlacementUnit> {
    let count = videos.len();
    videos
        .iter()
        .enumerate()
        .map(|(i, video)| PlacementUnit::video(anchoring.video_anchor(i, count), video))
        .collect()
}

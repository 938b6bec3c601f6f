use serde::Serialize;

/// Column layout of the trailing gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryLayout {
    TwoColumn,
    /// Used for an odd count so the last photo is not left alone in a row.
    SingleColumn,
}

impl GalleryLayout {
    /// Layout for `count` overflow photos; `None` means the gallery is omitted.
    pub fn for_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            n if n % 2 == 0 => Some(GalleryLayout::TwoColumn),
            _ => Some(GalleryLayout::SingleColumn),
        }
    }

    pub fn columns(self) -> usize {
        match self {
            GalleryLayout::TwoColumn => 2,
            GalleryLayout::SingleColumn => 1,
        }
    }
}

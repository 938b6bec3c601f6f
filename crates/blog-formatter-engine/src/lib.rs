pub mod article;
pub mod assembly;
pub mod io;
pub mod media;
pub mod parsing;
pub mod placement;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use article::*;
pub use assembly::{ArticleDocument, ArticleNode, assemble};
pub use media::{
    LinkError, PhotoAsset, PhotoLibrary, PhotoLink, PhotoOrigin, VideoAsset, VideoKind,
    parse_photo_link, parse_photo_links,
};
pub use parsing::{ArticleText, Paragraph, TransformedParagraph, split_article};
pub use placement::{
    GalleryLayout, ManualPlacements, MediaAsset, PlacementPlan, PlacementUnit, UnitKind,
    UnitSource, plan_media,
};
pub use render::{RenderOptions, render_html};

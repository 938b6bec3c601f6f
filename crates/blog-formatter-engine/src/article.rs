use serde::Serialize;

use crate::assembly::{ArticleDocument, assemble};
use crate::media::{PhotoAsset, VideoAsset};
use crate::parsing::{Paragraph, TransformedParagraph, promote_quotes, split_article};
use crate::placement::{ManualPlacements, PlacementPlan, PlacementUnit, plan_media};

/// The media side of an article.
#[derive(Debug, Clone, Default)]
pub struct ArticleMedia {
    pub photos: Vec<PhotoAsset>,
    pub videos: Vec<VideoAsset>,
    pub overrides: ManualPlacements,
}

impl ArticleMedia {
    pub fn new(photos: Vec<PhotoAsset>, videos: Vec<VideoAsset>) -> Self {
        Self {
            photos,
            videos,
            overrides: ManualPlacements::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: ManualPlacements) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Result of one engine run: the placement plan and the transformed paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineOutput {
    pub plan: PlacementPlan,
    pub paragraphs: Vec<TransformedParagraph>,
}

impl EngineOutput {
    pub fn units(&self) -> &[PlacementUnit] {
        &self.plan.units
    }

    pub fn overflow(&self) -> &[PhotoAsset] {
        &self.plan.overflow
    }
}

/// Runs quote promotion, the inline transform and media placement.
///
/// Pure: the same input always gives the same output, and nothing is kept
/// between calls.
pub fn run_engine(
    paragraphs: &[Paragraph],
    media: &ArticleMedia,
    quote_keyword: &str,
) -> EngineOutput {
    let promoted = promote_quotes(paragraphs, quote_keyword);
    let transformed = promoted.iter().map(Paragraph::transform).collect();
    let plan = plan_media(
        paragraphs.len(),
        &media.photos,
        &media.videos,
        &media.overrides,
    );

    log::debug!(
        "planned {} units and {} overflow photos for {} paragraphs",
        plan.units.len(),
        plan.overflow.len(),
        paragraphs.len()
    );

    EngineOutput {
        plan,
        paragraphs: transformed,
    }
}

/// A fully assembled article together with the plan it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedArticle {
    pub document: ArticleDocument,
    pub plan: PlacementPlan,
}

/// Splits, transforms, places and assembles an article from raw text.
///
/// Returns `None` when the text is blank.
pub fn format_article(
    raw: &str,
    media: &ArticleMedia,
    quote_keyword: &str,
) -> Option<FormattedArticle> {
    let text = split_article(raw)?;
    let output = run_engine(&text.paragraphs, media, quote_keyword);
    let document = assemble(
        &text.title,
        &text.subtitle,
        &output.paragraphs,
        &output.plan,
    );

    Some(FormattedArticle {
        document,
        plan: output.plan,
    })
}

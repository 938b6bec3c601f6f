use serde::Serialize;

use crate::media::PhotoAsset;
use crate::parsing::TransformedParagraph;
use crate::placement::{GalleryLayout, PlacementPlan, PlacementUnit};

/// A renderable piece of the final article, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ArticleNode {
    Paragraph(TransformedParagraph),
    Media(PlacementUnit),
    Gallery {
        layout: GalleryLayout,
        photos: Vec<PhotoAsset>,
    },
}

/// The assembled article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDocument {
    pub title: String,
    pub subtitle: String,
    pub nodes: Vec<ArticleNode>,
}

impl ArticleDocument {
    pub fn paragraphs(&self) -> impl Iterator<Item = &TransformedParagraph> {
        self.nodes.iter().filter_map(|node| match node {
            ArticleNode::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    pub fn media(&self) -> impl Iterator<Item = &PlacementUnit> {
        self.nodes.iter().filter_map(|node| match node {
            ArticleNode::Media(unit) => Some(unit),
            _ => None,
        })
    }

    pub fn has_gallery(&self) -> bool {
        self.nodes
            .iter()
            .any(|node| matches!(node, ArticleNode::Gallery { .. }))
    }
}

/// Flattens paragraphs and a placement plan into document order.
///
/// Each paragraph is followed by the units anchored to it in plan order.
/// Units whose anchor names no paragraph (only possible for an article
/// without paragraphs) follow the last paragraph. The gallery comes last and
/// only when something overflowed.
pub fn assemble(
    title: &str,
    subtitle: &str,
    paragraphs: &[TransformedParagraph],
    plan: &PlacementPlan,
) -> ArticleDocument {
    let mut nodes = Vec::with_capacity(paragraphs.len() + plan.units.len() + 1);

    for paragraph in paragraphs {
        nodes.push(ArticleNode::Paragraph(paragraph.clone()));
        nodes.extend(plan.units_at(paragraph.index).cloned().map(ArticleNode::Media));
    }

    let unanchored = plan
        .units
        .iter()
        .filter(|unit| !paragraphs.iter().any(|p| p.index == unit.anchor));
    nodes.extend(unanchored.cloned().map(ArticleNode::Media));

    if let Some(layout) = plan.gallery_layout() {
        nodes.push(ArticleNode::Gallery {
            layout,
            photos: plan.overflow.clone(),
        });
    }

    ArticleDocument {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        nodes,
    }
}

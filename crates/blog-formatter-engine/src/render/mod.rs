//! # HTML Rendering
//!
//! Serializes an [`ArticleDocument`] into one self-contained HTML fragment
//! (stylesheet included) ready to paste into a page builder's HTML widget.
//!
//! Placement is already resolved in the document, so no layout script is
//! emitted: every unit is written out right after its paragraph.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::collections::BTreeMap;

use crate::assembly::{ArticleDocument, ArticleNode};
use crate::media::{PhotoAsset, VideoAsset, VideoKind, auto_alt};
use crate::parsing::TransformedParagraph;
use crate::placement::{GalleryLayout, PlacementUnit, UnitKind, UnitSource};

const STYLESHEET: &str = include_str!("article.css");

/// Settings that only affect markup, never placement.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Folder URL the photo file names are resolved against.
    pub base_url: String,
    pub gallery_title: String,
    /// Alt text per photo name; falls back to [`auto_alt`].
    pub alts: BTreeMap<String, String>,
    /// Captions per photo name, shown on manually placed photos.
    pub captions: BTreeMap<String, String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            gallery_title: "Gallery".to_string(),
            alts: BTreeMap::new(),
            captions: BTreeMap::new(),
        }
    }
}

impl RenderOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// `base_url` joined with the percent-encoded file name.
    pub fn image_src(&self, name: &str) -> String {
        let encoded = urlencoding::encode(name);
        if self.base_url.is_empty() || self.base_url.ends_with('/') {
            format!("{}{encoded}", self.base_url)
        } else {
            format!("{}/{encoded}", self.base_url)
        }
    }

    pub fn alt(&self, name: &str) -> String {
        self.alts
            .get(name)
            .cloned()
            .unwrap_or_else(|| auto_alt(name))
    }
}

/// Full fragment: stylesheet plus article markup.
pub fn render_html(document: &ArticleDocument, options: &RenderOptions) -> String {
    let mut html = String::new();
    html.push_str("<!-- blog-formatter: article layout with automatic media placement -->\n");
    html.push_str("<style>\n");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n\n");
    html.push_str(&render_body(document, options));
    html
}

/// Article markup without the stylesheet.
pub fn render_body(document: &ArticleDocument, options: &RenderOptions) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"article-wrap\" id=\"article-root\">\n");
    html.push_str(&format!("  <h1>{}</h1>\n", text(&document.title)));
    html.push_str(&format!(
        "  <p class=\"article-sub\">{}</p>\n",
        text(&document.subtitle)
    ));

    html.push_str("  <div id=\"article-content\">\n");
    let mut gallery = None;
    for node in &document.nodes {
        match node {
            ArticleNode::Paragraph(paragraph) => {
                html.push_str(&format!("    {}\n", paragraph_html(paragraph)));
            }
            ArticleNode::Media(unit) => {
                html.push_str(&format!("    {}\n", unit_html(unit, options)));
            }
            ArticleNode::Gallery { layout, photos } => gallery = Some((*layout, photos)),
        }
    }
    html.push_str("  </div>\n");

    if let Some((layout, photos)) = gallery {
        html.push_str(&gallery_html(layout, photos, options));
    }

    html.push_str("</div>\n");
    html
}

fn paragraph_html(paragraph: &TransformedParagraph) -> String {
    let id = format!("paragraph-{}", paragraph.index);
    if paragraph.is_quote {
        format!(
            "<blockquote class=\"custom\" id=\"{id}\">{}</blockquote>",
            paragraph.html()
        )
    } else {
        format!("<p id=\"{id}\">{}</p>", paragraph.html())
    }
}

fn unit_html(unit: &PlacementUnit, options: &RenderOptions) -> String {
    if let Some(video) = unit.video_asset() {
        return video_html(video);
    }

    let photos: Vec<&PhotoAsset> = unit.photo_assets().collect();
    if unit.source == UnitSource::Manual {
        return photos
            .iter()
            .map(|photo| figure_html(photo, options))
            .collect();
    }

    let class = match unit.kind {
        UnitKind::Single => "photo-single",
        UnitKind::Triple => "photo-row-triple",
        UnitKind::Double | UnitKind::Video => "photo-row-double",
    };
    let images: String = photos.iter().map(|photo| img_html(photo, options)).collect();
    format!("<div class=\"{class}\">{images}</div>")
}

fn img_html(photo: &PhotoAsset, options: &RenderOptions) -> String {
    format!(
        "<img src=\"{}\" loading=\"lazy\" alt=\"{}\">",
        attr(&options.image_src(&photo.name)),
        attr(&options.alt(&photo.name))
    )
}

fn figure_html(photo: &PhotoAsset, options: &RenderOptions) -> String {
    let caption = options
        .captions
        .get(&photo.name)
        .map(|caption| format!("<figcaption>{}</figcaption>", text(caption)))
        .unwrap_or_default();
    format!(
        "<figure class=\"inline\">{}{caption}</figure>",
        img_html(photo, options)
    )
}

fn video_html(video: &VideoAsset) -> String {
    let src = attr(&video.embed_ref);
    match video.kind {
        VideoKind::DirectFile => format!(
            "<div class=\"video-embed\"><video controls preload=\"metadata\" src=\"{src}\"></video></div>"
        ),
        VideoKind::YouTube | VideoKind::Vimeo | VideoKind::GenericEmbed => format!(
            "<div class=\"video-embed\"><iframe src=\"{src}\" loading=\"lazy\" allow=\"autoplay; encrypted-media; picture-in-picture\" allowfullscreen></iframe></div>"
        ),
    }
}

fn gallery_html(
    layout: GalleryLayout,
    photos: &[PhotoAsset],
    options: &RenderOptions,
) -> String {
    let class = match layout {
        GalleryLayout::TwoColumn => "two-col-gallery",
        GalleryLayout::SingleColumn => "two-col-gallery single-col",
    };
    let mut html = String::new();
    html.push_str("  <div id=\"end-gallery\" aria-label=\"Article gallery\">\n");
    html.push_str(&format!(
        "    <h3 class=\"gallery-title\">{}</h3>\n",
        text(&options.gallery_title)
    ));
    html.push_str(&format!("    <div class=\"{class}\" id=\"gallery-grid\">\n"));
    for photo in photos {
        html.push_str(&format!("      {}\n", img_html(photo, options)));
    }
    html.push_str("    </div>\n");
    html.push_str("  </div>\n");
    html
}

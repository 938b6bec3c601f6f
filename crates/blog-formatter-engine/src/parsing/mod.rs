//! # Article Parsing
//!
//! Turns raw article text into addressable paragraphs.
//!
//! ## Layout of the input
//!
//! Blank lines are ignored everywhere. The first remaining line is the title,
//! the second the subtitle, and every line after that is one paragraph.
//!
//! ## Modules
//!
//! - **`quote`**: `BlockQuote` marker handling and keyword-driven quote promotion
//! - **`inline`**: `**strong**` / `*emphasis*` transform into `InlineNode`s

pub mod inline;
pub mod quote;

use serde::Serialize;

use inline::InlineNode;
use quote::BlockQuote;

pub use quote::promote_quotes;

/// One paragraph of article body text.
///
/// `index` is 1-based and is the address the placement engine anchors media to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub index: usize,
    pub text: String,
    pub is_quote: bool,
}

impl Paragraph {
    /// Builds a paragraph, turning a leading `>` marker into the quote flag.
    pub fn new(index: usize, line: &str) -> Self {
        let line = line.trim();
        let (depth, offset) = BlockQuote::strip_prefixes(line);
        Self {
            index,
            text: line[offset..].trim().to_string(),
            is_quote: depth > 0,
        }
    }

    /// Runs the inline transform over this paragraph's text.
    pub fn transform(&self) -> TransformedParagraph {
        TransformedParagraph {
            index: self.index,
            is_quote: self.is_quote,
            inlines: inline::parse_inline(&self.text),
        }
    }
}

/// A paragraph after the inline transform has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformedParagraph {
    pub index: usize,
    pub is_quote: bool,
    pub inlines: Vec<InlineNode>,
}

impl TransformedParagraph {
    /// Markup for the paragraph body (`<strong>` / `<em>`, text escaped).
    pub fn html(&self) -> String {
        inline::render_inline_html(&self.inlines)
    }
}

/// Title, subtitle and body of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleText {
    pub title: String,
    pub subtitle: String,
    pub paragraphs: Vec<Paragraph>,
}

/// Splits raw input into title, subtitle and numbered paragraphs.
///
/// Returns `None` when the input holds no non-blank line, in which case
/// nothing should be generated.
pub fn split_article(raw: &str) -> Option<ArticleText> {
    let mut lines = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let title = lines.next()?.trim().to_string();
    let subtitle = lines
        .next()
        .map(|line| line.trim().to_string())
        .unwrap_or_default();

    let paragraphs = lines
        .enumerate()
        .map(|(i, line)| Paragraph::new(i + 1, line))
        .collect();

    Some(ArticleText {
        title,
        subtitle,
        paragraphs,
    })
}

use serde::Serialize;

/// A parsed inline run of a paragraph.
///
/// Runs own their content with delimiters already removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum InlineNode {
    /// Plain text that isn't part of any emphasis run.
    Text(String),
    /// `**text**`
    Strong(String),
    /// `*text*`; may wrap whole strong runs.
    Emphasis(Vec<InlineNode>),
}

impl InlineNode {
    /// The run's text without delimiters, nested runs flattened.
    pub fn plain_text(&self) -> String {
        match self {
            InlineNode::Text(s) | InlineNode::Strong(s) => s.clone(),
            InlineNode::Emphasis(children) => children.iter().map(InlineNode::plain_text).collect(),
        }
    }
}

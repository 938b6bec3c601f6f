use super::Paragraph;

/// Blockquote marker knowledge lives here, not in the splitter or the renderer.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles `> text`, `>> nested`, `> > spaced nested` and tabs after a marker.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i += 1;
            } else {
                break;
            }
        }
        // Whitespace is only consumed as part of a marker.
        if depth == 0 {
            return (0, 0);
        }
        (depth, i)
    }

    /// Removes any leading markers and surrounding whitespace.
    pub fn strip(s: &str) -> &str {
        let (_, offset) = Self::strip_prefixes(s);
        s[offset..].trim()
    }
}

/// Marks every paragraph containing `keyword` (case-insensitively) as a quote.
///
/// An empty or whitespace-only keyword leaves the paragraphs untouched. All
/// matching paragraphs are promoted, not only the first one.
pub fn promote_quotes(paragraphs: &[Paragraph], keyword: &str) -> Vec<Paragraph> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return paragraphs.to_vec();
    }

    paragraphs
        .iter()
        .map(|paragraph| {
            if paragraph.text.to_lowercase().contains(&keyword) {
                log::debug!("promoting paragraph {} to a quote", paragraph.index);
                Paragraph {
                    index: paragraph.index,
                    text: BlockQuote::strip(&paragraph.text).to_string(),
                    is_quote: true,
                }
            } else {
                paragraph.clone()
            }
        })
        .collect()
}

use super::{
    kinds::{Emphasis, Strong},
    types::InlineNode,
};

/// Parses one line of text into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// Strong runs are found first. Emphasis runs are then found over the whole
/// line, with each strong run counting as one non-delimiter piece.
///
/// # Returns
/// A vector of nodes covering the entire input. Text outside any run is
/// emitted as `InlineNode::Text`; empty text is never emitted.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let pieces = split_strong(s);
    let mut out = vec![];
    let mut plain_start = 0;
    let mut i = 0;

    while i < pieces.len() {
        match emphasis_close(&pieces, i) {
            Some(close) => {
                out.extend(nodes(&pieces[plain_start..i]));
                out.push(InlineNode::Emphasis(nodes(&pieces[i + 1..close])));
                i = close + 1;
                plain_start = i;
            }
            None => i += 1,
        }
    }

    out.extend(nodes(&pieces[plain_start..]));
    out
}

/// A line after the strong pass: single characters and resolved strong runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Char(char),
    Strong(&'a str),
}

fn split_strong(s: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::with_capacity(s.len());
    let mut text_start = 0;

    for caps in Strong::pattern().captures_iter(s) {
        let (Some(full), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        pieces.extend(s[text_start..full.start()].chars().map(Piece::Char));
        pieces.push(Piece::Strong(inner.as_str()));
        text_start = full.end();
    }

    pieces.extend(s[text_start..].chars().map(Piece::Char));
    pieces
}

/// Index of the delimiter closing an emphasis run opened at `open`.
///
/// The run needs at least one piece of content, so an immediately repeated
/// delimiter does not close it.
fn emphasis_close(pieces: &[Piece], open: usize) -> Option<usize> {
    let delimiter = Piece::Char(Emphasis::DELIMITER);
    if pieces[open] != delimiter {
        return None;
    }
    let offset = pieces[open + 1..].iter().position(|p| *p == delimiter)?;
    (offset > 0).then_some(open + 1 + offset)
}

/// Collapses pieces into Text and Strong nodes.
fn nodes(pieces: &[Piece]) -> Vec<InlineNode> {
    let mut out = vec![];
    let mut text = String::new();

    for piece in pieces {
        match piece {
            Piece::Char(c) => text.push(*c),
            Piece::Strong(inner) => {
                flush_text(&mut out, &mut text);
                out.push(InlineNode::Strong(inner.to_string()));
            }
        }
    }

    flush_text(&mut out, &mut text);
    out
}

fn flush_text(out: &mut Vec<InlineNode>, text: &mut String) {
    if !text.is_empty() {
        out.push(InlineNode::Text(std::mem::take(text)));
    }
}

/// Renders inline nodes as HTML; text content is escaped.
pub fn render_inline_html(nodes: &[InlineNode]) -> String {
    let mut html = String::new();
    for node in nodes {
        match node {
            InlineNode::Text(text) => html.push_str(&html_escape::encode_text(text)),
            InlineNode::Strong(text) => {
                html.push_str("<strong>");
                html.push_str(&html_escape::encode_text(text));
                html.push_str("</strong>");
            }
            InlineNode::Emphasis(children) => {
                html.push_str("<em>");
                html.push_str(&render_inline_html(children));
                html.push_str("</em>");
            }
        }
    }
    html
}

/// Convenience: parse and render a line in one step.
pub fn format_inline_styles(s: &str) -> String {
    render_inline_html(&parse_inline(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> InlineNode {
        InlineNode::Text(s.to_string())
    }

    fn strong(s: &str) -> InlineNode {
        InlineNode::Strong(s.to_string())
    }

    fn emphasis(children: Vec<InlineNode>) -> InlineNode {
        InlineNode::Emphasis(children)
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_input_has_no_nodes() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_strong() {
        assert_eq!(
            parse_inline("a **b** c"),
            vec![
                text("a "),
                InlineNode::Strong("b".to_string()),
                text(" c")
            ]
        );
    }

    #[test]
    fn parse_emphasis() {
        assert_eq!(
            parse_inline("a *b* c"),
            vec![text("a "), emphasis(vec![text("b")]), text(" c")]
        );
    }

    #[test]
    fn strong_and_emphasis_do_not_interfere() {
        assert_eq!(
            parse_inline("**a** and *b*"),
            vec![
                InlineNode::Strong("a".to_string()),
                text(" and "),
                emphasis(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn whole_line_strong() {
        let nodes = parse_inline("**And then, in the end, we are all paulistas!**");
        assert_eq!(
            nodes,
            vec![InlineNode::Strong(
                "And then, in the end, we are all paulistas!".to_string()
            )]
        );
    }

    #[rstest]
    #[case("a * b", "a * b")]
    #[case("2 * 3 = 6", "2 * 3 = 6")]
    #[case("**", "**")]
    #[case("unclosed **bold", "unclosed **bold")]
    fn unpaired_asterisks_stay_literal(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_inline(input), vec![text(expected)]);
    }

    #[rstest]
    #[case("a **b** c", "a <strong>b</strong> c")]
    #[case("a *b* c", "a <em>b</em> c")]
    #[case("**a** and *b*", "<strong>a</strong> and <em>b</em>")]
    #[case("*x* **y** *z*", "<em>x</em> <strong>y</strong> <em>z</em>")]
    #[case("plain", "plain")]
    #[case("*a **b** c*", "<em>a <strong>b</strong> c</em>")]
    #[case("**a** *b **c***", "<strong>a</strong> <em>b <strong>c</strong></em>")]
    fn renders_html(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_inline_styles(input), expected);
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(
            format_inline_styles("fish & <chips> **hot & fresh**"),
            "fish &amp; &lt;chips&gt; <strong>hot &amp; fresh</strong>"
        );
    }

    #[test]
    fn triple_asterisks_wrap_strong_in_emphasis() {
        assert_eq!(parse_inline("***x***"), vec![emphasis(vec![strong("x")])]);
    }

    #[test]
    fn emphasis_wraps_a_strong_run() {
        assert_eq!(
            parse_inline("*a **b** c*"),
            vec![emphasis(vec![text("a "), strong("b"), text(" c")])]
        );
    }

    #[test]
    fn adjacent_delimiters_are_not_an_empty_run() {
        assert_eq!(
            parse_inline("x ** *y*"),
            vec![text("x *"), emphasis(vec![text(" ")]), text("y*")]
        );
    }
}

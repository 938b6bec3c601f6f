use serde::Serialize;
use url::{Position, Url};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LinkError {
    #[error("Invalid photo URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Photo URL has no host or path: {0}")]
    NotHierarchical(String),
    #[error("Photo URL does not name a file: {0}")]
    MissingFileName(String),
}

/// A pasted photo URL split into its folder and its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoLink {
    /// Origin plus directory portion, always ending in `/`.
    pub path: String,
    /// Last path segment, percent-decoded.
    pub filename: String,
}

/// Splits a photo URL into `path` and `filename`.
///
/// Query strings and fragments are dropped. A file name that does not decode
/// to UTF-8 is kept in its encoded form.
pub fn parse_photo_link(raw: &str) -> Result<PhotoLink, LinkError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|source| LinkError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(LinkError::NotHierarchical(raw.to_string()));
    }

    let (directory, segment) = url
        .path()
        .rsplit_once('/')
        .unwrap_or(("", url.path()));
    if segment.is_empty() {
        return Err(LinkError::MissingFileName(raw.to_string()));
    }

    let filename = urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string());

    Ok(PhotoLink {
        path: format!("{}{directory}/", &url[..Position::BeforePath]),
        filename,
    })
}

/// Parses one URL per non-blank line, discarding lines that fail.
pub fn parse_photo_links(text: &str) -> Vec<PhotoLink> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parse_photo_link(line) {
            Ok(link) => Some(link),
            Err(e) => {
                log::warn!("Discarding photo link: {e}");
                None
            }
        })
        .collect()
}

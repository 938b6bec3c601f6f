use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Where a video is hosted, which decides how it is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoKind {
    YouTube,
    Vimeo,
    /// A plain `.mp4` / `.webm` / `.ogg` file played with a native player.
    DirectFile,
    /// Anything else, embedded as an opaque frame.
    GenericEmbed,
}

impl VideoKind {
    /// Whether the embed reference is a frame URL rather than a media file.
    pub fn is_frame(self) -> bool {
        !matches!(self, VideoKind::DirectFile)
    }
}

/// A video classified from its raw URL.
///
/// Classification never fails: unrecognised input is a `GenericEmbed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoAsset {
    pub raw: String,
    pub kind: VideoKind,
    pub embed_ref: String,
}

impl VideoAsset {
    /// Classifies `raw`, trying YouTube, Vimeo, direct file and generic in order.
    pub fn from_url(raw: &str) -> Self {
        let raw = raw.trim();
        let (kind, embed_ref) = classify(raw);
        Self {
            raw: raw.to_string(),
            kind,
            embed_ref,
        }
    }
}

fn classify(raw: &str) -> (VideoKind, String) {
    if let Some(id) = capture(youtube_regex(), raw) {
        return (
            VideoKind::YouTube,
            format!("https://www.youtube.com/embed/{id}"),
        );
    }
    if let Some(id) = capture(vimeo_regex(), raw) {
        return (
            VideoKind::Vimeo,
            format!("https://player.vimeo.com/video/{id}"),
        );
    }
    if direct_file_regex().is_match(raw) {
        return (VideoKind::DirectFile, raw.to_string());
    }
    (VideoKind::GenericEmbed, raw.to_string())
}

fn capture<'a>(regex: &Regex, s: &'a str) -> Option<&'a str> {
    regex.captures(s)?.get(1).map(|m| m.as_str())
}

fn youtube_regex() -> &'static Regex {
    static YOUTUBE_REGEX: OnceLock<Regex> = OnceLock::new();
    YOUTUBE_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/|v/)|youtu\.be/)([A-Za-z0-9_-]{11})",
        )
        .expect("Invalid YouTube regex")
    })
}

fn vimeo_regex() -> &'static Regex {
    static VIMEO_REGEX: OnceLock<Regex> = OnceLock::new();
    VIMEO_REGEX.get_or_init(|| {
        Regex::new(r"(?i)vimeo\.com/(?:video/)?(\d+)").expect("Invalid Vimeo regex")
    })
}

fn direct_file_regex() -> &'static Regex {
    static DIRECT_FILE_REGEX: OnceLock<Regex> = OnceLock::new();
    DIRECT_FILE_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\.(?:mp4|webm|ogg)(?:[?#].*)?$").expect("Invalid video file regex")
    })
}

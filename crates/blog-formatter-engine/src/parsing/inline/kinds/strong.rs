use regex::Regex;
use std::sync::OnceLock;

/// Strong emphasis, `**text**`.
pub struct Strong;

impl Strong {
    /// Matches a double-delimited run whose content holds no `*`.
    pub fn pattern() -> &'static Regex {
        static STRONG_REGEX: OnceLock<Regex> = OnceLock::new();
        STRONG_REGEX
            .get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid strong regex"))
    }
}

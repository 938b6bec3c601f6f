/// Italic emphasis, `*text*`.
///
/// Matched after strong runs are resolved, so its content may span whole
/// `**strong**` runs but never a bare delimiter.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: char = '*';
}

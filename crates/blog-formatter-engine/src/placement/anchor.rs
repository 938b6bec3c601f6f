/// Step between consecutive photo anchors.
pub const STRIDE: usize = 2;

/// Maps sequence positions onto paragraph indices.
///
/// The paragraph count is floored at 1, so every anchor is in
/// `1..=paragraph_count` and stride math never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchoring {
    paragraph_count: usize,
}

impl Anchoring {
    pub fn new(paragraph_count: usize) -> Self {
        Self {
            paragraph_count: paragraph_count.max(1),
        }
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    /// The last paragraph.
    pub fn last(&self) -> usize {
        self.paragraph_count
    }

    /// `min((k mod P) + 1, P)`: cycles through `1..=P`.
    pub fn anchor(&self, k: usize) -> usize {
        ((k % self.paragraph_count) + 1).min(self.paragraph_count)
    }

    /// Anchor for the `position`-th photo slot, stepping by [`STRIDE`].
    pub fn photo_anchor(&self, position: usize) -> usize {
        self.anchor(STRIDE * position)
    }

    /// Anchor for video `index` out of `count`.
    ///
    /// Splits the article into `count + 1` equal segments and places one video
    /// at every segment boundary except the first.
    pub fn video_anchor(&self, index: usize, count: usize) -> usize {
        let segment = self.paragraph_count / (count + 1);
        ((index + 1) * segment + 1).min(self.paragraph_count)
    }
}

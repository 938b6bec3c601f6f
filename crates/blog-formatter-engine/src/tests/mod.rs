//! Shared builders for unit tests.

use crate::media::{PhotoAsset, VideoAsset};
use crate::parsing::Paragraph;

/// `n` uploaded photos named `photo-0.jpg`, `photo-1.jpg`, ...
pub fn sample_photos(n: usize) -> Vec<PhotoAsset> {
    (0..n)
        .map(|i| PhotoAsset::upload(format!("photo-{i}.jpg")))
        .collect()
}

/// `n` distinct Vimeo videos.
pub fn sample_videos(n: usize) -> Vec<VideoAsset> {
    (0..n)
        .map(|i| VideoAsset::from_url(&format!("https://vimeo.com/{}", 1000 + i)))
        .collect()
}

/// `n` plain paragraphs numbered from 1.
pub fn sample_paragraphs(n: usize) -> Vec<Paragraph> {
    (1..=n)
        .map(|i| Paragraph::new(i, &format!("Paragraph number {i}.")))
        .collect()
}

pub fn photo_names<'a>(photos: impl IntoIterator<Item = &'a PhotoAsset>) -> Vec<String> {
    photos.into_iter().map(|p| p.name.clone()).collect()
}

//! # Media
//!
//! Descriptors for the photos and videos an article carries.
//!
//! - **`photo`**: `PhotoAsset`, its origin, and the `PhotoLibrary` that keeps
//!   uploaded and link-sourced photos in insertion order
//! - **`link`**: turns a pasted photo URL into a base path and a file name
//! - **`video`**: classifies a raw video URL into one of four source kinds

pub mod link;
pub mod photo;
pub mod video;

pub use link::{LinkError, PhotoLink, parse_photo_link, parse_photo_links};
pub use photo::{PhotoAsset, PhotoLibrary, PhotoOrigin, auto_alt};
pub use video::{VideoAsset, VideoKind};

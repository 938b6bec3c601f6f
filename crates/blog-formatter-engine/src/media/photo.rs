use serde::Serialize;
use uuid::Uuid;

use super::link::PhotoLink;

/// How a photo entered the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoOrigin {
    /// Picked directly as a file.
    Upload,
    /// Parsed from a pasted URL.
    Link,
}

/// A photo referenced by file name.
///
/// Names are not unique: two assets with the same name are distinct photos,
/// told apart by position (and by `id` inside a library).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoAsset {
    #[serde(skip)]
    pub id: Uuid,
    pub name: String,
    pub origin: PhotoOrigin,
}

impl PhotoAsset {
    pub fn new(name: impl Into<String>, origin: PhotoOrigin) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            origin,
        }
    }

    pub fn upload(name: impl Into<String>) -> Self {
        Self::new(name, PhotoOrigin::Upload)
    }

    pub fn link(name: impl Into<String>) -> Self {
        Self::new(name, PhotoOrigin::Link)
    }

    /// Alt text derived from the file name.
    pub fn auto_alt(&self) -> String {
        auto_alt(&self.name)
    }
}

/// Ordered set of article photos from both origins.
///
/// Order is insertion order. Re-parsing links replaces every earlier
/// link-sourced photo while uploads keep their positions.
#[derive(Debug, Clone, Default)]
pub struct PhotoLibrary {
    photos: Vec<PhotoAsset>,
}

impl PhotoLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append uploaded photos by file name
    pub fn add_uploads<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.photos
            .extend(names.into_iter().map(PhotoAsset::upload));
    }

    /// Drop all link-sourced photos and append the given links
    pub fn replace_links(&mut self, links: impl IntoIterator<Item = PhotoLink>) {
        self.photos.retain(|photo| photo.origin != PhotoOrigin::Link);
        self.photos
            .extend(links.into_iter().map(|link| PhotoAsset::link(link.filename)));
    }

    /// Remove a single photo
    ///
    /// Returns the removed photo if it existed
    pub fn remove(&mut self, id: Uuid) -> Option<PhotoAsset> {
        let position = self.photos.iter().position(|photo| photo.id == id)?;
        Some(self.photos.remove(position))
    }

    pub fn photos(&self) -> &[PhotoAsset] {
        &self.photos
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.photos.iter().map(|photo| photo.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn clear(&mut self) {
        self.photos.clear();
    }
}

/// Alt text from a file name: `-` and `_` become spaces, the extension is dropped.
pub fn auto_alt(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(dot) if is_extension(&filename[dot + 1..]) => &filename[..dot],
        _ => filename,
    };
    stem.replace(['-', '_'], " ")
}

fn is_extension(s: &str) -> bool {
    !s.is_empty() && !s.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn link(filename: &str) -> PhotoLink {
        PhotoLink {
            path: "https://example.com/uploads/".to_string(),
            filename: filename.to_string(),
        }
    }

    #[test]
    fn uploads_keep_insertion_order() {
        let mut library = PhotoLibrary::new();
        library.add_uploads(["b.jpg", "a.jpg"]);
        library.add_uploads(["c.jpg"]);

        assert_eq!(
            library.names().collect::<Vec<_>>(),
            vec!["b.jpg", "a.jpg", "c.jpg"]
        );
        assert!(
            library
                .photos()
                .iter()
                .all(|p| p.origin == PhotoOrigin::Upload)
        );
    }

    #[test]
    fn replacing_links_preserves_uploads() {
        let mut library = PhotoLibrary::new();
        library.add_uploads(["up-1.jpg"]);
        library.replace_links([link("old-1.jpg"), link("old-2.jpg")]);
        library.add_uploads(["up-2.jpg"]);

        library.replace_links([link("new.jpg")]);

        assert_eq!(
            library.names().collect::<Vec<_>>(),
            vec!["up-1.jpg", "up-2.jpg", "new.jpg"]
        );
        assert_eq!(library.photos()[2].origin, PhotoOrigin::Link);
    }

    #[test]
    fn duplicate_names_are_distinct_photos() {
        let mut library = PhotoLibrary::new();
        library.add_uploads(["same.jpg", "same.jpg"]);

        assert_eq!(library.len(), 2);
        assert_ne!(library.photos()[0].id, library.photos()[1].id);

        let first = library.photos()[0].id;
        let removed = library.remove(first).unwrap();
        assert_eq!(removed.id, first);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_none() {
        let mut library = PhotoLibrary::new();
        library.add_uploads(["a.jpg"]);

        assert!(library.remove(Uuid::new_v4()).is_none());
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn clear_empties_the_library() {
        let mut library = PhotoLibrary::new();
        library.add_uploads(["a.jpg"]);
        library.clear();
        assert!(library.is_empty());
    }

    #[test]
    fn auto_alt_from_file_name() {
        assert_eq!(auto_alt("veridiana-pizza-2.jpg"), "veridiana pizza 2");
        assert_eq!(auto_alt("masp_at_night.jpeg"), "masp at night");
        assert_eq!(auto_alt("no-extension"), "no extension");
        assert_eq!(auto_alt("archive.tar.gz"), "archive.tar");
    }

    #[test]
    fn auto_alt_needs_a_non_empty_extension() {
        assert_eq!(auto_alt("file."), "file.");
        assert_eq!(auto_alt("my-file."), "my file.");
        assert_eq!(auto_alt("dir.d/photo"), "dir.d/photo");
    }
}

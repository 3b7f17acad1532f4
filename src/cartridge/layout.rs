//! In-memory archive layout and zip serialisation.
//!
//! The layout is an insertion-ordered set of virtual files built up during
//! cartridge construction and then serialised in one pass. Inserting a path
//! that already exists overwrites the earlier content in place, so colliding
//! lesson filenames resolve to a single archive entry (last write wins).

use super::BuildError;
use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

/// An ordered set of virtual files awaiting serialisation.
///
/// # Examples
///
/// ```
/// use risepack::cartridge::ArchiveLayout;
///
/// let mut layout = ArchiveLayout::new();
/// layout.insert("imsmanifest.xml", "<manifest/>");
/// layout.insert("imsmanifest.xml", "<manifest></manifest>");
/// assert_eq!(layout.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ArchiveLayout {
    files: Vec<(String, Vec<u8>)>,
}

impl ArchiveLayout {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a virtual file, overwriting any earlier content at the same path.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        let path = path.into();
        let content = content.into();
        if let Some(existing) = self.files.iter_mut().find(|(entry, _)| *entry == path) {
            existing.1 = content;
        } else {
            self.files.push((path, content));
        }
    }

    /// Number of virtual files in the layout.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the layout holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Entry paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|(path, _)| path.as_str())
    }

    /// Serialise the layout into zip bytes.
    ///
    /// Entries are written in insertion order with deflate compression and a
    /// fixed timestamp, so identical layouts produce byte-identical archives.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Zip`] or [`BuildError::Io`] if serialisation
    /// fails; no partial archive is returned.
    pub fn into_zip_bytes(self) -> Result<Vec<u8>, BuildError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        for (path, content) in &self.files {
            writer.start_file(path.as_str(), options.clone())?;
            writer.write_all(content)?;
        }
        Ok(writer.finish()?.into_inner())
    }
}

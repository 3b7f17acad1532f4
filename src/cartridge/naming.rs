//! Deterministic content-file naming policy.
//!
//! Every lesson maps to exactly one content file whose name is a stable
//! function of the lesson id (or title, in the title-derived variant):
//! identical input yields the identical filename on every invocation. The
//! manifest's item and resource identifiers reuse the same sanitised stem.

use crate::lesson::LessonRecord;
use std::fmt;

/// Extension appended to every generated content file.
pub const PAGE_EXTENSION: &str = ".html";

/// Stem used when sanitisation leaves nothing behind.
const FALLBACK_STEM: &str = "lesson";

/// Which lesson attribute content filenames are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FilenameSource {
    /// Sanitise the lesson id to `[A-Za-z0-9_]` with `_` separators.
    #[default]
    Id,
    /// Lowercase the lesson title and sanitise to `[a-z0-9-]` with `-`
    /// separators.
    Title,
}

/// A sanitised resource name for one lesson.
///
/// # Examples
///
/// ```
/// use risepack::cartridge::FilenameSource;
/// use risepack::cartridge::naming::ResourceName;
/// use risepack::lesson::LessonRecord;
///
/// let lesson = LessonRecord::with_title("abc-123", "Intro!");
/// let name = ResourceName::for_lesson(&lesson, FilenameSource::Id);
/// assert_eq!(name.filename(), "abc_123.html");
/// assert_eq!(name.resource_identifier(), "resource_abc_123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName {
    stem: String,
}

impl ResourceName {
    /// Derive the resource name for a lesson under the given policy.
    #[must_use]
    pub fn for_lesson(lesson: &LessonRecord, source: FilenameSource) -> Self {
        let stem = match source {
            FilenameSource::Id => sanitise(&lesson.id, '_', false),
            FilenameSource::Title => sanitise(lesson.display_title(), '-', true),
        };
        Self { stem }
    }

    /// The sanitised stem without extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// The content filename, stem plus [`PAGE_EXTENSION`].
    #[must_use]
    pub fn filename(&self) -> String {
        format!("{}{PAGE_EXTENSION}", self.stem)
    }

    /// The manifest organization item identifier.
    #[must_use]
    pub fn item_identifier(&self) -> String {
        format!("item_{}", self.stem)
    }

    /// The manifest resource identifier.
    #[must_use]
    pub fn resource_identifier(&self) -> String {
        format!("resource_{}", self.stem)
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filename())
    }
}

/// Sanitise to ASCII alphanumerics, collapsing runs of anything else to one
/// separator and trimming leading and trailing separators.
fn sanitise(input: &str, separator: char, lowercase: bool) -> String {
    let mut stem = String::with_capacity(input.len());
    let mut pending_separator = false;
    for ch in input.chars() {
        let ch = if lowercase { ch.to_ascii_lowercase() } else { ch };
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !stem.is_empty() {
                stem.push(separator);
            }
            pending_separator = false;
            stem.push(ch);
        } else {
            pending_separator = true;
        }
    }
    if stem.is_empty() {
        FALLBACK_STEM.to_owned()
    } else {
        stem
    }
}

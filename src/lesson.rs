//! Lesson metadata records shared by the extractor and the cartridge builder.
//!
//! A lesson is the minimal unit of course content metadata: a required id and
//! an optional title. Records are order-preserving and never deduplicated;
//! duplicate ids are resolved downstream by the archive layout (last write
//! wins).

use serde::{Deserialize, Serialize};

/// Title rendered for lessons whose source record carries none.
pub const UNTITLED_LESSON: &str = "Untitled Lesson";

/// A single lesson record extracted from a course export.
///
/// # Examples
///
/// ```
/// use risepack::lesson::LessonRecord;
///
/// let lesson = LessonRecord::with_title("abc123", "Intro");
/// assert_eq!(lesson.id, "abc123");
/// assert_eq!(lesson.display_title(), "Intro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    /// Unique lesson identifier from the source export.
    pub id: String,
    /// Human-readable lesson title, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LessonRecord {
    /// Create a record with no title.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }

    /// Create a record with a title.
    #[must_use]
    pub fn with_title(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
        }
    }

    /// The title to render, falling back to [`UNTITLED_LESSON`].
    ///
    /// # Examples
    ///
    /// ```
    /// use risepack::lesson::{LessonRecord, UNTITLED_LESSON};
    ///
    /// assert_eq!(LessonRecord::new("a").display_title(), UNTITLED_LESSON);
    /// ```
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_LESSON)
    }
}

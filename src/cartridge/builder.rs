//! Descriptor type and cartridge build orchestration.
//!
//! [`build_package`] is the single entry point: validate the descriptor,
//! resolve lesson filenames, render the manifest and one wrapper page per
//! lesson into an [`ArchiveLayout`], and serialise the layout to zip bytes.
//! The transform is pure and non-resumable; on any failure nothing is
//! returned and nothing persists.

use super::layout::ArchiveLayout;
use super::manifest::{MANIFEST_FILENAME, render_manifest};
use super::naming::{FilenameSource, ResourceName};
use super::{BuildError, page};
use crate::lesson::LessonRecord;

/// Course title used when the caller supplies none.
pub const DEFAULT_COURSE_TITLE: &str = "Rise Course Export";

/// Organization identifier used when the caller supplies none.
pub const DEFAULT_ORGANIZATION_ID: &str = "RiseExport";

/// Archive subdirectory holding the generated wrapper pages.
pub const WEBCONTENT_DIR: &str = "resources/webcontent";

/// Everything needed to build one cartridge.
///
/// Created once per packaging invocation and treated as immutable during the
/// build.
#[derive(Debug, Clone)]
pub struct PackageDescriptor {
    /// Course title embedded in the manifest metadata.
    pub course_title: String,
    /// Organization identifier for the manifest organization element.
    pub organization_id: String,
    /// Base URL combined with lesson ids to form iframe URLs.
    pub base_url: String,
    /// Lessons to package, in output order.
    pub lessons: Vec<LessonRecord>,
    /// Which lesson attribute content filenames derive from.
    pub filename_source: FilenameSource,
}

impl PackageDescriptor {
    /// Create a descriptor with default title, organization, and naming.
    #[must_use]
    pub fn new(base_url: impl Into<String>, lessons: Vec<LessonRecord>) -> Self {
        Self {
            course_title: DEFAULT_COURSE_TITLE.to_owned(),
            organization_id: DEFAULT_ORGANIZATION_ID.to_owned(),
            base_url: base_url.into(),
            lessons,
            filename_source: FilenameSource::default(),
        }
    }
}

/// One lesson resolved to its resource name.
#[derive(Debug, Clone)]
pub struct CartridgeEntry {
    /// The lesson being packaged.
    pub lesson: LessonRecord,
    /// Its deterministic resource name.
    pub name: ResourceName,
}

/// Build a cartridge archive from a descriptor.
///
/// The manifest is inserted first, then one wrapper page per lesson in input
/// order. Lessons with an empty id are skipped with a warning; they appear in
/// neither the manifest nor the archive.
///
/// # Errors
///
/// Returns [`BuildError::EmptyBaseUrl`] when the base URL is blank, and
/// [`BuildError::Io`] or [`BuildError::Zip`] when serialisation fails.
///
/// # Examples
///
/// ```
/// use risepack::cartridge::{PackageDescriptor, build_package};
/// use risepack::lesson::LessonRecord;
///
/// let descriptor = PackageDescriptor::new(
///     "https://x.io/rise/",
///     vec![LessonRecord::with_title("abc123", "Intro")],
/// );
/// let bytes = build_package(&descriptor).expect("build");
/// assert!(!bytes.is_empty());
/// ```
pub fn build_package(descriptor: &PackageDescriptor) -> Result<Vec<u8>, BuildError> {
    if descriptor.base_url.trim().is_empty() {
        return Err(BuildError::EmptyBaseUrl);
    }

    let entries = resolve_entries(descriptor);
    let mut layout = ArchiveLayout::new();
    layout.insert(MANIFEST_FILENAME, render_manifest(descriptor, &entries));
    for entry in &entries {
        let path = format!("{WEBCONTENT_DIR}/{}", entry.name.filename());
        layout.insert(path, page::render_page(&entry.lesson, &descriptor.base_url));
    }
    layout.into_zip_bytes()
}

/// Resolve packagable lessons to cartridge entries, skipping empty ids.
fn resolve_entries(descriptor: &PackageDescriptor) -> Vec<CartridgeEntry> {
    let mut entries = Vec::with_capacity(descriptor.lessons.len());
    for lesson in &descriptor.lessons {
        if lesson.id.trim().is_empty() {
            log::warn!("skipping lesson without an id (title: {})", lesson.display_title());
            continue;
        }
        entries.push(CartridgeEntry {
            lesson: lesson.clone(),
            name: ResourceName::for_lesson(lesson, descriptor.filename_source),
        });
    }
    entries
}

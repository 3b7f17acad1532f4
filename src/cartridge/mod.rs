//! IMS Common Cartridge construction.
//!
//! Builds a cartridge archive from a package descriptor: one
//! `imsmanifest.xml` at the root and one HTML wrapper page per lesson under
//! `resources/webcontent/`, serialised as a zip. The build is a pure,
//! single-pass transform from descriptor to archive bytes; no partial
//! archive is ever observable by the caller.
//!
//! # Sub-modules
//!
//! - [`builder`] — Descriptor type and build orchestration.
//! - [`layout`] — In-memory archive layout and zip serialisation.
//! - [`manifest`] — `imsmanifest.xml` rendering.
//! - [`naming`] — Deterministic content-file naming policy.
//! - [`page`] — Lesson wrapper page rendering.

pub mod builder;
pub mod layout;
pub mod manifest;
pub mod naming;
pub mod page;

pub use builder::{
    DEFAULT_COURSE_TITLE, DEFAULT_ORGANIZATION_ID, PackageDescriptor, build_package,
};
pub use layout::ArchiveLayout;
pub use naming::FilenameSource;

use thiserror::Error;

/// Errors arising from cartridge construction.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The descriptor's base URL is empty.
    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    /// Writing an archive entry failed.
    #[error("archive I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip serialisation failed.
    #[error("archive serialisation error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Escape text for embedding in XML or HTML markup.
///
/// Covers the five predefined entities, matching what both the manifest and
/// the wrapper pages require.
pub(crate) fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

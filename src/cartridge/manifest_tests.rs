//! Tests for manifest rendering.

use super::*;
use crate::cartridge::naming::{FilenameSource, ResourceName};
use crate::lesson::LessonRecord;
use rstest::{fixture, rstest};

fn entry(lesson: LessonRecord) -> CartridgeEntry {
    let name = ResourceName::for_lesson(&lesson, FilenameSource::Id);
    CartridgeEntry { lesson, name }
}

#[fixture]
fn descriptor() -> PackageDescriptor {
    PackageDescriptor::new(
        "https://x.io/rise/",
        vec![
            LessonRecord::with_title("abc123", "Intro"),
            LessonRecord::new("def456"),
        ],
    )
}

#[fixture]
fn entries(descriptor: PackageDescriptor) -> Vec<CartridgeEntry> {
    descriptor.lessons.iter().cloned().map(entry).collect()
}

#[rstest]
fn manifest_declares_schema_identity(
    descriptor: PackageDescriptor,
    entries: Vec<CartridgeEntry>,
) {
    let xml = render_manifest(&descriptor, &entries);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<schema>IMS Common Cartridge</schema>"));
    assert!(xml.contains("<schemaversion>1.1.0</schemaversion>"));
    assert!(xml.contains("<lomimscc:string>Rise Course Export</lomimscc:string>"));
}

#[rstest]
fn organization_holds_one_item_per_lesson(
    descriptor: PackageDescriptor,
    entries: Vec<CartridgeEntry>,
) {
    let xml = render_manifest(&descriptor, &entries);
    assert!(xml.contains(
        "<organization identifier=\"RiseExport\" structure=\"rooted-hierarchy\">"
    ));
    assert!(xml.contains("<item identifier=\"item_abc123\" identifierref=\"resource_abc123\">"));
    assert!(xml.contains("<title>Intro</title>"));
    assert!(xml.contains("<title>Untitled Lesson</title>"));
    assert_eq!(xml.matches("identifierref=").count(), 2);
}

#[rstest]
fn resources_reference_webcontent_pages(
    descriptor: PackageDescriptor,
    entries: Vec<CartridgeEntry>,
) {
    let xml = render_manifest(&descriptor, &entries);
    assert!(xml.contains(concat!(
        "<resource identifier=\"resource_abc123\" type=\"webcontent\" ",
        "href=\"resources/webcontent/abc123.html\">"
    )));
    assert!(xml.contains("<file href=\"resources/webcontent/def456.html\"/>"));
    assert_eq!(xml.matches("type=\"webcontent\"").count(), 2);
}

#[rstest]
fn titles_are_escaped_for_embedding(descriptor: PackageDescriptor) {
    let lesson = LessonRecord::with_title("x", "Q&A <basics>");
    let entries = vec![entry(lesson)];
    let xml = render_manifest(&descriptor, &entries);
    assert!(xml.contains("<title>Q&amp;A &lt;basics&gt;</title>"));
}

#[rstest]
fn course_identifier_is_deterministic(descriptor: PackageDescriptor) {
    let first = course_identifier(&descriptor);
    let second = course_identifier(&descriptor);
    assert_eq!(first, second);
    assert!(first.starts_with("course_"));
    assert_eq!(first.len(), "course_".len() + 32);
}

#[rstest]
fn course_identifier_varies_with_content(descriptor: PackageDescriptor) {
    let mut changed = descriptor.clone();
    changed.course_title = "Another Course".to_owned();
    assert_ne!(course_identifier(&descriptor), course_identifier(&changed));
}

#[rstest]
fn empty_lesson_set_renders_empty_sections(descriptor: PackageDescriptor) {
    let xml = render_manifest(&descriptor, &[]);
    assert!(xml.contains("<resources>\n  </resources>"));
    assert!(!xml.contains("identifierref="));
}

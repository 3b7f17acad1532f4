//! `imsmanifest.xml` rendering.
//!
//! Produces the IMS Common Cartridge 1.1.0 manifest: schema identity, course
//! title, a rooted-hierarchy organization with one item per lesson, and one
//! webcontent resource per lesson pointing at its wrapper page. The course
//! identifier is a digest of the descriptor, so identical inputs render the
//! identical manifest.

use super::builder::{CartridgeEntry, PackageDescriptor, WEBCONTENT_DIR};
use super::escape_markup;
use sha2::{Digest, Sha256};

/// Filename of the manifest at the archive root.
pub const MANIFEST_FILENAME: &str = "imsmanifest.xml";

const SCHEMA_NAME: &str = "IMS Common Cartridge";
const SCHEMA_VERSION: &str = "1.1.0";

/// Length of the hex digest embedded in the course identifier.
const COURSE_ID_DIGEST_LEN: usize = 32;

/// Derive the deterministic course identifier for a descriptor.
///
/// Hashes the title, organization id, base URL, and every lesson id and
/// title, separated by NUL bytes so field boundaries cannot collide.
#[must_use]
pub fn course_identifier(descriptor: &PackageDescriptor) -> String {
    let mut hasher = Sha256::new();
    hasher.update(descriptor.course_title.as_bytes());
    hasher.update([0]);
    hasher.update(descriptor.organization_id.as_bytes());
    hasher.update([0]);
    hasher.update(descriptor.base_url.as_bytes());
    for lesson in &descriptor.lessons {
        hasher.update([0]);
        hasher.update(lesson.id.as_bytes());
        hasher.update([0]);
        hasher.update(lesson.display_title().as_bytes());
    }
    let digest = format!("{:x}", hasher.finalize());
    format!("course_{}", &digest[..COURSE_ID_DIGEST_LEN])
}

/// Render the manifest document for a descriptor and its resolved entries.
#[must_use]
pub fn render_manifest(descriptor: &PackageDescriptor, entries: &[CartridgeEntry]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!(
        "<manifest identifier=\"{}\" ",
        course_identifier(descriptor)
    ));
    xml.push_str("xmlns=\"http://www.imsglobal.org/xsd/imsccv1p1/imscp_v1p1\" ");
    xml.push_str("xmlns:lom=\"http://ltsc.ieee.org/xsd/imsccv1p1/LOM/resource\" ");
    xml.push_str("xmlns:lomimscc=\"http://ltsc.ieee.org/xsd/imsccv1p1/LOM/manifest\" ");
    xml.push_str("xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ");
    xml.push_str("xsi:schemaLocation=\"http://www.imsglobal.org/xsd/imsccv1p1/imscp_v1p1 ");
    xml.push_str("http://www.imsglobal.org/xsd/imscp_v1p1.xsd ");
    xml.push_str("http://ltsc.ieee.org/xsd/imsccv1p1/LOM/resource ");
    xml.push_str("http://www.imsglobal.org/profile/cc/ccv1p1/LOM/ccv1p1_lomresource_v1p0.xsd ");
    xml.push_str("http://ltsc.ieee.org/xsd/imsccv1p1/LOM/manifest ");
    xml.push_str("http://www.imsglobal.org/profile/cc/ccv1p1/LOM/ccv1p1_lommanifest_v1p0.xsd\">\n");

    render_metadata(&mut xml, &descriptor.course_title);
    render_organizations(&mut xml, &descriptor.organization_id, entries);
    render_resources(&mut xml, entries);

    xml.push_str("</manifest>\n");
    xml
}

fn render_metadata(xml: &mut String, course_title: &str) {
    xml.push_str("  <metadata>\n");
    xml.push_str(&format!("    <schema>{SCHEMA_NAME}</schema>\n"));
    xml.push_str(&format!(
        "    <schemaversion>{SCHEMA_VERSION}</schemaversion>\n"
    ));
    xml.push_str("    <lomimscc:lom>\n");
    xml.push_str("      <lomimscc:general>\n");
    xml.push_str("        <lomimscc:title>\n");
    xml.push_str(&format!(
        "          <lomimscc:string>{}</lomimscc:string>\n",
        escape_markup(course_title)
    ));
    xml.push_str("        </lomimscc:title>\n");
    xml.push_str("      </lomimscc:general>\n");
    xml.push_str("    </lomimscc:lom>\n");
    xml.push_str("  </metadata>\n");
}

fn render_organizations(xml: &mut String, organization_id: &str, entries: &[CartridgeEntry]) {
    xml.push_str("  <organizations>\n");
    xml.push_str(&format!(
        "    <organization identifier=\"{}\" structure=\"rooted-hierarchy\">\n",
        escape_markup(organization_id)
    ));
    xml.push_str("      <item identifier=\"root\">\n");
    for entry in entries {
        xml.push_str(&format!(
            "        <item identifier=\"{}\" identifierref=\"{}\">\n",
            entry.name.item_identifier(),
            entry.name.resource_identifier()
        ));
        xml.push_str(&format!(
            "          <title>{}</title>\n",
            escape_markup(entry.lesson.display_title())
        ));
        xml.push_str("        </item>\n");
    }
    xml.push_str("      </item>\n");
    xml.push_str("    </organization>\n");
    xml.push_str("  </organizations>\n");
}

fn render_resources(xml: &mut String, entries: &[CartridgeEntry]) {
    xml.push_str("  <resources>\n");
    for entry in entries {
        let href = format!("{WEBCONTENT_DIR}/{}", entry.name.filename());
        xml.push_str(&format!(
            "    <resource identifier=\"{}\" type=\"webcontent\" href=\"{href}\">\n",
            entry.name.resource_identifier()
        ));
        xml.push_str(&format!("      <file href=\"{href}\"/>\n"));
        xml.push_str("    </resource>\n");
    }
    xml.push_str("  </resources>\n");
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;

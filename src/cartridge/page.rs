//! Lesson wrapper page rendering.
//!
//! Each lesson becomes a minimal HTML page whose sole interactive element is
//! an iframe pointing at the hosted lesson content. The iframe URL is the
//! descriptor's base URL joined to the raw lesson id with exactly one path
//! separator; it is embedded as text and never dereferenced.

use super::escape_markup;
use crate::lesson::LessonRecord;

/// Join the base URL and lesson id with exactly one `/`.
///
/// # Examples
///
/// ```
/// use risepack::cartridge::page::join_iframe_url;
///
/// assert_eq!(
///     join_iframe_url("https://x.io/rise/", "abc123"),
///     "https://x.io/rise/abc123"
/// );
/// assert_eq!(
///     join_iframe_url("https://x.io/rise", "abc123"),
///     "https://x.io/rise/abc123"
/// );
/// ```
#[must_use]
pub fn join_iframe_url(base_url: &str, lesson_id: &str) -> String {
    format!("{}/{lesson_id}", base_url.trim_end_matches('/'))
}

/// Render the wrapper page for one lesson.
#[must_use]
pub fn render_page(lesson: &LessonRecord, base_url: &str) -> String {
    let title = escape_markup(lesson.display_title());
    let iframe_url = escape_markup(&join_iframe_url(base_url, &lesson.id));
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         \x20 <meta charset=\"UTF-8\">\n\
         \x20 <title>{title}</title>\n\
         \x20 <style>\n\
         \x20   body, html {{ margin: 0; padding: 0; height: 100%; overflow: hidden; }}\n\
         \x20   iframe {{ border: none; width: 100%; height: 800px; }}\n\
         \x20 </style>\n\
         </head>\n\
         <body>\n\
         \x20 <iframe src=\"{iframe_url}\" allowfullscreen></iframe>\n\
         </body>\n\
         </html>\n"
    )
}

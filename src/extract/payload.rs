//! Wrapper-call scanning for the embedded course payload.
//!
//! Rise exports embed the course data as
//! `__resolveJsonp("course:und","<base64>")`. The strict pattern matches that
//! exact form; a looser fallback accepts any quoted second argument to the
//! same wrapper, which some producer versions emit with a different course
//! key. Absence of both patterns is a normal outcome for unrelated input, so
//! the result is an `Option`, not an error.

use once_cell::sync::Lazy;
use regex::Regex;

static STRICT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"__resolveJsonp\("course:und","([^"]+)"\)"#)
        .expect("strict wrapper pattern is valid")
});

static LOOSE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"__resolveJsonp\([^,]+,\s*"([^"]+)"\)"#).expect("loose wrapper pattern is valid")
});

/// Locate the encoded payload inside a wrapper call.
///
/// Prefers the strict `course:und` form; falls back to the loose form only
/// when the strict pattern is absent. Returns `None` when neither matches.
///
/// # Examples
///
/// ```
/// use risepack::extract::extract_encoded_payload;
///
/// let text = r#"__resolveJsonp("course:und","aGVsbG8=")"#;
/// assert_eq!(extract_encoded_payload(text), Some("aGVsbG8="));
/// assert_eq!(extract_encoded_payload("not a course file"), None);
/// ```
#[must_use]
pub fn extract_encoded_payload(text: &str) -> Option<&str> {
    capture_payload(&STRICT_PATTERN, text).or_else(|| capture_payload(&LOOSE_PATTERN, text))
}

fn capture_payload<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str())
}

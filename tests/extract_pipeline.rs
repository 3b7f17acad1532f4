//! End-to-end tests for the und.js extraction pipeline.
//!
//! Each test builds a synthetic wrapper file, then runs payload extraction,
//! decoding, and lesson location exactly as the CLI does.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use risepack::extract::{DecodeError, decode_payload, extract_encoded_payload, locate_lessons};
use risepack::lesson::LessonRecord;
use rstest::rstest;
use serde_json::json;

fn wrap(payload: &str) -> String {
    format!(r#"__resolveJsonp("course:und","{payload}")"#)
}

fn encode(value: &serde_json::Value) -> String {
    STANDARD.encode(value.to_string())
}

#[test]
fn lessons_array_extracted_end_to_end() {
    let course = json!({
        "title": "Demo Course",
        "lessons": [
            {"id": "abc123", "title": "Intro", "type": "lesson"},
            {"id": "def456", "title": "Basics", "type": "lesson"},
        ],
    });
    let text = wrap(&encode(&course));

    let payload = extract_encoded_payload(&text).expect("payload present");
    let data = decode_payload(payload).expect("payload decodes");
    let lessons = locate_lessons(&data);

    assert_eq!(
        lessons,
        vec![
            LessonRecord::with_title("abc123", "Intro"),
            LessonRecord::with_title("def456", "Basics"),
        ]
    );
}

#[test]
fn modules_key_selected_by_heuristic() {
    let course = json!({
        "modules": [
            {"id": "a", "title": "t"},
            {"id": "b", "title": "u"},
        ],
    });
    let text = wrap(&encode(&course));

    let payload = extract_encoded_payload(&text).expect("payload present");
    let data = decode_payload(payload).expect("payload decodes");
    let lessons = locate_lessons(&data);

    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0].id, "a");
}

#[test]
fn loose_wrapper_variant_still_extracts() {
    let course = json!({"lessons": [{"id": "x", "title": "X"}]});
    let text = format!(r#"__resolveJsonp("course:fr","{}")"#, encode(&course));

    let payload = extract_encoded_payload(&text).expect("loose pattern matches");
    let data = decode_payload(payload).expect("payload decodes");
    assert_eq!(locate_lessons(&data), vec![LessonRecord::with_title("x", "X")]);
}

#[rstest]
#[case::empty("")]
#[case::unrelated_script("window.course = { lessons: [] };")]
#[case::wrong_function("__resolveData(\"course:und\",\"QUJD\")")]
fn missing_wrapper_is_not_found_without_panicking(#[case] text: &str) {
    assert_eq!(extract_encoded_payload(text), None);
}

#[test]
fn malformed_base64_reports_base64_stage() {
    let text = wrap("!!!not-base64!!!");
    let payload = extract_encoded_payload(&text).expect("payload present");
    assert!(matches!(decode_payload(payload), Err(DecodeError::Base64(_))));
}

#[test]
fn non_json_payload_reports_parse_stage() {
    let text = wrap(&STANDARD.encode("var x = 1;"));
    let payload = extract_encoded_payload(&text).expect("payload present");
    assert!(matches!(decode_payload(payload), Err(DecodeError::Parse(_))));
}

#[test]
fn lessons_without_ids_are_dropped_from_projection() {
    let course = json!({
        "lessons": [
            {"id": "keep", "title": "K"},
            {"title": "no id"},
            {"id": "", "title": "blank"},
        ],
    });
    let text = wrap(&encode(&course));

    let payload = extract_encoded_payload(&text).expect("payload present");
    let data = decode_payload(payload).expect("payload decodes");
    let lessons = locate_lessons(&data);

    assert_eq!(lessons, vec![LessonRecord::with_title("keep", "K")]);
}

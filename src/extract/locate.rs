//! Heuristic lesson-array location inside undocumented course structures.
//!
//! The upstream export format is unstable across producer versions, so exact
//! key lookup is preferred but must degrade gracefully. The search runs three
//! stages, first success wins:
//!
//! 1. A top-level `lessons` field that is an array.
//! 2. A ranked scan of top-level array fields, scored by how lesson-like
//!    their leading elements look.
//! 3. A depth-first scan of the whole structure with the same scoring,
//!    candidates collected from all depths.
//!
//! Matched records are projected to id + title; records without a usable id
//! are dropped silently. The function never fails: unmatchable input yields
//! an empty vector.

use crate::lesson::LessonRecord;
use serde_json::Value;

/// Number of leading elements sampled when scoring a candidate array.
const SAMPLE_SIZE: usize = 5;

/// Locate lesson records inside decoded course data.
///
/// # Examples
///
/// ```
/// use risepack::extract::locate_lessons;
/// use serde_json::json;
///
/// let data = json!({"modules": [{"id": "a", "title": "Intro"}]});
/// let lessons = locate_lessons(&data);
/// assert_eq!(lessons[0].id, "a");
/// ```
#[must_use]
pub fn locate_lessons(data: &Value) -> Vec<LessonRecord> {
    if let Some(items) = data.get("lessons").and_then(Value::as_array) {
        return project_records(items);
    }
    if let Some(items) = best_top_level_candidate(data) {
        return project_records(items);
    }
    if let Some(items) = best_deep_candidate(data) {
        return project_records(items);
    }
    Vec::new()
}

/// Project raw array elements to lesson records.
///
/// Keeps `id` (required, non-empty string) and `title` (optional string);
/// anything else is dropped with a warning.
pub(crate) fn project_records(items: &[Value]) -> Vec<LessonRecord> {
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let Some(object) = item.as_object() else {
            continue;
        };
        let id = object.get("id").and_then(Value::as_str).unwrap_or_default();
        if id.is_empty() {
            log::warn!("dropping lesson record without a usable id");
            continue;
        }
        let title = object
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_owned);
        records.push(LessonRecord {
            id: id.to_owned(),
            title,
        });
    }
    records
}

/// Fraction of the leading sample that are objects with both id and title.
fn lesson_likeness(items: &[Value]) -> f64 {
    let sample_len = items.len().min(SAMPLE_SIZE);
    if sample_len == 0 {
        return 0.0;
    }
    let hits = items[..sample_len]
        .iter()
        .filter(|item| {
            item.as_object()
                .is_some_and(|object| object.contains_key("id") && object.contains_key("title"))
        })
        .count();
    hits as f64 / sample_len as f64
}

/// Pick the highest-scoring candidate; earlier candidates win ties.
fn select_best<'a, I>(candidates: I) -> Option<&'a Vec<Value>>
where
    I: IntoIterator<Item = (f64, &'a Vec<Value>)>,
{
    let mut best: Option<(f64, &Vec<Value>)> = None;
    for (score, items) in candidates {
        if score <= 0.0 {
            continue;
        }
        let replaces = best.is_none_or(|(best_score, _)| score > best_score);
        if replaces {
            best = Some((score, items));
        }
    }
    best.map(|(_, items)| items)
}

/// Score every top-level array field in encounter order.
fn best_top_level_candidate(data: &Value) -> Option<&Vec<Value>> {
    let object = data.as_object()?;
    select_best(object.values().filter_map(|value| {
        let items = value.as_array()?;
        if items.is_empty() {
            return None;
        }
        Some((lesson_likeness(items), items))
    }))
}

/// Depth-first scan scoring every array-of-objects in the structure.
fn best_deep_candidate(data: &Value) -> Option<&Vec<Value>> {
    let mut candidates = Vec::new();
    collect_deep(data, &mut candidates);
    select_best(candidates)
}

fn collect_deep<'a>(value: &'a Value, out: &mut Vec<(f64, &'a Vec<Value>)>) {
    match value {
        Value::Object(map) => {
            for child in map.values() {
                collect_deep(child, out);
            }
        }
        Value::Array(items) => {
            if items.first().is_some_and(Value::is_object) {
                out.push((lesson_likeness(items), items));
            }
            for child in items {
                collect_deep(child, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;

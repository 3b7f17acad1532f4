//! Pre-extracted lesson input.
//!
//! Besides the encoded `und.js` route, lesson records can be supplied
//! directly: tabular data with an `id` column and optional `title` column,
//! or structured JSON (a bare array of records, an object with a `lessons`
//! array, or any other object searched with the locator heuristic).

use crate::extract::locate;
use crate::lesson::LessonRecord;
use serde_json::Value;
use std::io::Read;
use thiserror::Error;

/// Errors arising from pre-extracted lesson input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The lesson table lacks the required `id` column.
    #[error("lesson table has no 'id' column")]
    MissingIdColumn,

    /// The structured input holds no usable lesson records.
    #[error("no lesson records found in input")]
    NoLessons,

    /// The lesson table could not be read.
    #[error("failed to read lesson table: {0}")]
    Csv(#[from] csv::Error),

    /// The structured input is not valid JSON.
    #[error("failed to parse lesson JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the input failed.
    #[error("failed to read lesson input: {0}")]
    Io(#[from] std::io::Error),
}

/// Read lesson records from tabular data with a header row.
///
/// The `id` column is required; rows with a blank id are skipped with a
/// warning. The `title` column is optional, and blank titles are treated as
/// absent.
///
/// # Errors
///
/// Returns [`InputError::MissingIdColumn`] when the header lacks `id`, and
/// [`InputError::Csv`] on malformed rows.
pub fn lessons_from_csv<R: Read>(reader: R) -> Result<Vec<LessonRecord>, InputError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let id_index = headers
        .iter()
        .position(|header| header == "id")
        .ok_or(InputError::MissingIdColumn)?;
    let title_index = headers.iter().position(|header| header == "title");

    let mut lessons = Vec::new();
    for record in reader.records() {
        let record = record?;
        let id = record.get(id_index).unwrap_or_default().trim();
        if id.is_empty() {
            log::warn!("skipping lesson row without an id");
            continue;
        }
        let title = title_index
            .and_then(|index| record.get(index))
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_owned);
        lessons.push(LessonRecord {
            id: id.to_owned(),
            title,
        });
    }
    Ok(lessons)
}

/// Read lesson records from structured data.
///
/// Accepts a bare array of records, an object with a `lessons` array, or any
/// other object via the locator heuristic.
///
/// # Errors
///
/// Returns [`InputError::NoLessons`] when no usable record is found.
pub fn lessons_from_json(data: &Value) -> Result<Vec<LessonRecord>, InputError> {
    let lessons = match data.as_array() {
        Some(items) => locate::project_records(items),
        None => locate::locate_lessons(data),
    };
    if lessons.is_empty() {
        return Err(InputError::NoLessons);
    }
    Ok(lessons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn csv_with_id_and_title_columns() {
        let data = "id,title\nlesson1,Introduction\nlesson2,Chapter 1\n";
        let lessons = lessons_from_csv(data.as_bytes()).expect("valid table");
        assert_eq!(
            lessons,
            vec![
                LessonRecord::with_title("lesson1", "Introduction"),
                LessonRecord::with_title("lesson2", "Chapter 1"),
            ]
        );
    }

    #[test]
    fn csv_title_column_is_optional() {
        let data = "id\na\nb\n";
        let lessons = lessons_from_csv(data.as_bytes()).expect("valid table");
        assert_eq!(lessons, vec![LessonRecord::new("a"), LessonRecord::new("b")]);
    }

    #[test]
    fn csv_without_id_column_is_rejected() {
        let data = "name,title\nx,y\n";
        let result = lessons_from_csv(data.as_bytes());
        assert!(matches!(result, Err(InputError::MissingIdColumn)));
    }

    #[rstest]
    #[case::blank_id("id,title\n,ghost\nreal,ok\n", 1)]
    #[case::blank_title_dropped("id,title\na,\n", 1)]
    fn csv_blank_fields(#[case] data: &str, #[case] expected: usize) {
        let lessons = lessons_from_csv(data.as_bytes()).expect("valid table");
        assert_eq!(lessons.len(), expected);
        assert!(lessons.iter().all(|lesson| !lesson.id.is_empty()));
    }

    #[test]
    fn json_bare_array_accepted_without_titles() {
        let data = json!([{"id": "a"}, {"id": "b", "title": "B"}]);
        let lessons = lessons_from_json(&data).expect("valid input");
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0], LessonRecord::new("a"));
    }

    #[test]
    fn json_lessons_object_accepted() {
        let data = json!({"lessons": [{"id": "a", "title": "A"}]});
        let lessons = lessons_from_json(&data).expect("valid input");
        assert_eq!(lessons, vec![LessonRecord::with_title("a", "A")]);
    }

    #[test]
    fn json_other_object_uses_locator() {
        let data = json!({"modules": [{"id": "a", "title": "t"}]});
        let lessons = lessons_from_json(&data).expect("valid input");
        assert_eq!(lessons.len(), 1);
    }

    #[rstest]
    #[case::empty_array(json!([]))]
    #[case::no_records(json!({"meta": "only"}))]
    #[case::records_without_ids(json!([{"title": "no id"}]))]
    fn json_without_lessons_is_rejected(#[case] data: serde_json::Value) {
        assert!(matches!(
            lessons_from_json(&data),
            Err(InputError::NoLessons)
        ));
    }
}

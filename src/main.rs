//! risepack CLI entrypoint.
//!
//! This binary extracts lesson metadata from Rise course exports and packages
//! it as IMS Common Cartridge archives. Progress is written to stderr;
//! extracted lesson tables go to stdout unless an output file is given.

use camino::Utf8Path;
#[cfg(test)]
use camino::Utf8PathBuf;
use clap::Parser;
use risepack::cartridge::build_package;
use risepack::cli::{Cli, Command, ConvertArgs, ExtractArgs, ExtractFormat, PackArgs, PackageArgs};
use risepack::error::{Result, RisepackError};
use risepack::extract::{decode_payload, extract_encoded_payload, locate_lessons};
use risepack::input::{self, InputError};
use risepack::lesson::LessonRecord;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Extract(args) => run_extract(args, cli.quiet, stderr),
        Command::Pack(args) => run_pack(args, cli.quiet, stderr),
        Command::Convert(args) => run_convert(args, cli.quiet, stderr),
    }
}

/// Extracts lessons from an und.js file and writes them out.
fn run_extract(args: &ExtractArgs, quiet: bool, stderr: &mut dyn Write) -> Result<()> {
    let lessons = extract_lessons_from_file(&args.input)?;

    if !quiet {
        write_stderr_line(
            stderr,
            format!("Extracted {} lesson(s) from {}", lessons.len(), args.input),
        );
    }
    if lessons.is_empty() && !quiet {
        write_stderr_line(stderr, "Warning: no lesson data found in the file.");
    }

    let rendered = render_lessons(&lessons, args.format)?;
    match &args.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

/// Packages a pre-extracted lesson file into an .imscc archive.
fn run_pack(args: &PackArgs, quiet: bool, stderr: &mut dyn Write) -> Result<()> {
    let lessons = lessons_from_file(&args.lessons)?;
    package_and_write(&args.package, lessons, quiet, stderr)
}

/// Extracts from und.js and packages in one pass.
fn run_convert(args: &ConvertArgs, quiet: bool, stderr: &mut dyn Write) -> Result<()> {
    let lessons = extract_lessons_from_file(&args.input)?;
    if lessons.is_empty() {
        return Err(RisepackError::NoLessons);
    }
    if !quiet {
        write_stderr_line(
            stderr,
            format!("Extracted {} lesson(s) from {}", lessons.len(), args.input),
        );
    }
    package_and_write(&args.package, lessons, quiet, stderr)
}

/// Runs the full extraction pipeline against one und.js file.
fn extract_lessons_from_file(path: &Utf8Path) -> Result<Vec<LessonRecord>> {
    let text = std::fs::read_to_string(path)?;
    let payload =
        extract_encoded_payload(&text).ok_or_else(|| RisepackError::PayloadNotFound {
            path: path.to_owned(),
        })?;
    let data = decode_payload(payload)?;
    Ok(locate_lessons(&data))
}

/// Loads lesson records from a CSV or JSON file, sniffing by extension.
fn lessons_from_file(path: &Utf8Path) -> Result<Vec<LessonRecord>> {
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
        let file = std::fs::File::open(path)?;
        return Ok(input::lessons_from_csv(file)?);
    }
    let text = std::fs::read_to_string(path)?;
    let data: serde_json::Value = serde_json::from_str(&text).map_err(InputError::from)?;
    Ok(input::lessons_from_json(&data)?)
}

/// Builds the archive and writes it to the configured output path.
fn package_and_write(
    package: &PackageArgs,
    lessons: Vec<LessonRecord>,
    quiet: bool,
    stderr: &mut dyn Write,
) -> Result<()> {
    if lessons.is_empty() {
        return Err(RisepackError::NoLessons);
    }
    let lesson_count = lessons.len();
    let descriptor = package.descriptor(lessons);
    let bytes = build_package(&descriptor)?;
    write_archive(&package.output, &bytes)?;

    if !quiet {
        write_stderr_line(
            stderr,
            format!(
                "Packaged {lesson_count} lesson(s) into {} ({} bytes)",
                package.output,
                bytes.len()
            ),
        );
    }
    Ok(())
}

/// Writes archive bytes through a uniquely named temporary file, persisted
/// atomically so no partial archive is observable at the destination. The
/// temporary file is removed on every failure path.
fn write_archive(path: &Utf8Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.persist(path).map_err(|err| RisepackError::OutputWrite {
        path: path.to_owned(),
        reason: err.to_string(),
    })?;
    Ok(())
}

/// Renders extracted lessons in the requested output format.
fn render_lessons(lessons: &[LessonRecord], format: ExtractFormat) -> Result<String> {
    match format {
        ExtractFormat::Csv => render_csv(lessons),
        ExtractFormat::Json => {
            Ok(serde_json::to_string_pretty(lessons).map_err(InputError::from)?)
        }
        ExtractFormat::Text => Ok(lessons
            .iter()
            .map(|lesson| format!("{} - {}\n", lesson.display_title(), lesson.id))
            .collect()),
    }
}

fn render_csv(lessons: &[LessonRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["id", "title"])
        .map_err(InputError::from)?;
    for lesson in lessons {
        writer
            .write_record([lesson.id.as_str(), lesson.title.as_deref().unwrap_or("")])
            .map_err(InputError::from)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| RisepackError::Io(std::io::Error::other(err.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_for_run_result_returns_zero_on_success() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(exit_code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_for_run_result_prints_error_and_returns_one() {
        let err = RisepackError::PayloadNotFound {
            path: Utf8PathBuf::from("data/und.js"),
        };
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(err), &mut stderr);
        assert_eq!(exit_code, 1);

        let stderr_text = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert!(stderr_text.contains("data/und.js"));
    }

    #[test]
    fn render_csv_quotes_and_defaults() {
        let lessons = vec![
            LessonRecord::with_title("a", "Hello, World"),
            LessonRecord::new("b"),
        ];
        let csv = render_lessons(&lessons, ExtractFormat::Csv).expect("render");
        assert!(csv.starts_with("id,title\n"));
        assert!(csv.contains("a,\"Hello, World\"\n"));
        assert!(csv.contains("b,\n"));
    }

    #[test]
    fn render_text_lists_title_and_id() {
        let lessons = vec![LessonRecord::with_title("abc", "Intro")];
        let text = render_lessons(&lessons, ExtractFormat::Text).expect("render");
        assert_eq!(text, "Intro - abc\n");
    }

    #[test]
    fn render_json_roundtrips_records() {
        let lessons = vec![LessonRecord::with_title("abc", "Intro")];
        let json = render_lessons(&lessons, ExtractFormat::Json).expect("render");
        let parsed: Vec<LessonRecord> = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, lessons);
    }

    #[test]
    fn write_archive_creates_destination_atomically() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dest = Utf8PathBuf::from_path_buf(dir.path().join("course.imscc"))
            .expect("utf-8 temp path");
        write_archive(&dest, b"archive bytes").expect("write");
        assert_eq!(std::fs::read(&dest).expect("read back"), b"archive bytes");

        // Only the destination remains; the scratch file is gone.
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read dir")
            .collect::<std::result::Result<_, _>>()
            .expect("dir entries");
        assert_eq!(entries.len(), 1);
    }
}

//! CLI argument definitions for risepack.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use crate::cartridge::{
    DEFAULT_COURSE_TITLE, DEFAULT_ORGANIZATION_ID, FilenameSource, PackageDescriptor,
};
use crate::lesson::LessonRecord;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

/// Package Articulate Rise course exports as IMS Common Cartridge archives.
#[derive(Parser, Debug)]
#[command(name = "risepack")]
#[command(version, about)]
#[command(long_about = concat!(
    "Package Articulate Rise course exports as IMS Common Cartridge archives.\n\n",
    "A Rise SCORM export stores its course structure base64-encoded inside ",
    "data/und.js. risepack extracts the lesson ids and titles from that file ",
    "and packages them as an .imscc cartridge: one manifest plus one wrapper ",
    "page per lesson, each page holding an iframe that points at the hosted ",
    "lesson content. The resulting cartridge imports into Canvas, Blackboard, ",
    "Moodle, and other LMS systems supporting IMS Common Cartridge 1.1.\n\n",
    "Lesson data can also be supplied directly as CSV (columns: id, optional ",
    "title) or JSON (an array of records, or an object with a lessons array).",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Extract lesson metadata to CSV:\n",
    "    $ risepack extract data/und.js --output lessons.csv\n\n",
    "  Package a lesson file:\n",
    "    $ risepack pack --lessons lessons.csv --base-url https://x.io/rise/ \\\n",
    "        --output course.imscc\n\n",
    "  Extract and package in one pass:\n",
    "    $ risepack convert data/und.js --base-url https://x.io/rise/ \\\n",
    "        --output course.imscc --title \"My Course\"\n",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output (errors still shown).
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract lesson metadata from an und.js course export.
    Extract(ExtractArgs),

    /// Package pre-extracted lesson data into an .imscc archive.
    Pack(PackArgs),

    /// Extract from und.js and package in one pass.
    Convert(ConvertArgs),
}

/// Output formats for extracted lesson metadata.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractFormat {
    /// Tabular output with id and title columns.
    #[default]
    Csv,
    /// JSON array of lesson records.
    Json,
    /// One "title - id" line per lesson.
    Text,
}

/// Arguments for the extract command.
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Path to the und.js file from the Rise export's data/ directory.
    pub input: Utf8PathBuf,

    /// Write extracted lessons to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Output format for the extracted lesson table.
    #[arg(short, long, value_enum, default_value_t = ExtractFormat::Csv)]
    pub format: ExtractFormat,
}

/// Packaging options shared by the pack and convert commands.
#[derive(Parser, Debug, Clone)]
pub struct PackageArgs {
    /// Base URL combined with lesson ids to form iframe URLs.
    #[arg(short = 'u', long, value_name = "URL")]
    pub base_url: String,

    /// Output path for the .imscc archive.
    #[arg(short, long, value_name = "FILE")]
    pub output: Utf8PathBuf,

    /// Course title embedded in the manifest.
    #[arg(short, long, default_value = DEFAULT_COURSE_TITLE)]
    pub title: String,

    /// Organization identifier for the manifest.
    #[arg(long, value_name = "ID", default_value = DEFAULT_ORGANIZATION_ID)]
    pub org: String,

    /// Derive content filenames from lesson ids or titles.
    #[arg(long, value_enum, value_name = "SOURCE", default_value_t = FilenameSource::Id)]
    pub filename_from: FilenameSource,
}

/// Arguments for the pack command.
#[derive(Parser, Debug, Clone)]
pub struct PackArgs {
    /// CSV or JSON file with lesson records (id required, title optional).
    #[arg(short, long, value_name = "FILE")]
    pub lessons: Utf8PathBuf,

    /// Packaging options.
    #[command(flatten)]
    pub package: PackageArgs,
}

/// Arguments for the convert command.
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the und.js file from the Rise export's data/ directory.
    pub input: Utf8PathBuf,

    /// Packaging options.
    #[command(flatten)]
    pub package: PackageArgs,
}

impl PackageArgs {
    /// Build the package descriptor for these options and lessons.
    #[must_use]
    pub fn descriptor(&self, lessons: Vec<LessonRecord>) -> PackageDescriptor {
        PackageDescriptor {
            course_title: self.title.clone(),
            organization_id: self.org.clone(),
            base_url: self.base_url.clone(),
            lessons,
            filename_source: self.filename_from,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

//! Rise course export packaging library.
//!
//! This crate extracts lesson metadata from the encoded `und.js` file of an
//! Articulate Rise SCORM export and packages it as an IMS Common Cartridge
//! archive. It is used by the `risepack` CLI binary and can be consumed
//! programmatically.
//!
//! # Modules
//!
//! - [`cartridge`] - IMS Common Cartridge construction
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Semantic error types for the CLI
//! - [`extract`] - Payload extraction, decoding, and lesson location
//! - [`input`] - Pre-extracted lesson input (CSV and JSON)
//! - [`lesson`] - Lesson metadata records

pub mod cartridge;
pub mod cli;
pub mod error;
pub mod extract;
pub mod input;
pub mod lesson;

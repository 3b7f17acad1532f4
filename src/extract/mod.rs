//! Lesson extraction pipeline for encoded Rise course exports.
//!
//! A Rise SCORM export ships its course structure as a base64 payload wrapped
//! in a `__resolveJsonp` call inside `data/und.js`. The pipeline runs in three
//! stages, each independently testable:
//!
//! - [`payload`] — locate the encoded payload inside the wrapper call.
//! - [`decode`] — base64-decode, fall back across text encodings, parse JSON.
//! - [`locate`] — find the lesson array inside the undocumented structure.

pub mod decode;
pub mod locate;
pub mod payload;

pub use decode::{DecodeError, decode_payload};
pub use locate::locate_lessons;
pub use payload::extract_encoded_payload;

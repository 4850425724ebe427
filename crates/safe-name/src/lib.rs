//! # Safe Name
//!
//! Filename sanitization for media files that have to survive a trip
//! between Windows, Linux and macOS filesystems.
//!
//! ## Features
//!
//! - `sanitize_filename` strips characters that are illegal on common
//!   filesystems while keeping CJK and other non-Latin text untouched
//! - `has_extension` for case-insensitive extension matching
//!
//! ## License
//!
//! MIT License
//!
//! ## Authors
//!
//! - hua0512
//!

mod extension;
mod sanitize;

pub use extension::{VIDEO_EXTENSIONS, has_extension};
pub use sanitize::{MAX_FILENAME_BYTES, sanitize_filename};

//! # sniffmime-core
//!
//! A library for identifying the MIME type of files on disk.
//!
//! This crate provides the core functionality for:
//! - Matching binary file signatures (magic bytes) against an ordered catalog
//! - Normalizing the output of an external classification command
//! - Mapping file extensions to MIME types, and back
//!
//! ## Architecture
//!
//! Detection runs as a cascade of three independent strategies, tried
//! most-authoritative-first and committing to the first confident answer:
//!
//! 1. [`probe`]: an external classification subprocess
//! 2. [`signature`]: magic-byte matching over a fixed header window
//! 3. [`extension`]: a static extension table
//!
//! Every stage reports either a MIME string or the `unknown` sentinel
//! ([`Detection::Unknown`]); `unknown` is the expected outcome for most
//! stages on any given file, never an error.
//!
//! ## Example
//!
//! ```no_run
//! use sniffmime_core::{detect, Detection};
//!
//! let result = detect("./photos/sunset.jpg");
//! match result {
//!     Detection::Mime(mime) => println!("{mime}"),
//!     Detection::Unknown => println!("could not classify"),
//! }
//! ```
//!
//! ## Configuration
//!
//! [`Detector`] and [`DetectorConfig`] control the cascade: the probe stage
//! can be disabled, the external command swapped out, and the alias table
//! overridden per detector.

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod chunk;
pub mod detect;
pub mod detection;
pub mod error;
pub mod extension;
pub mod probe;
pub mod signature;

// Re-export primary types for convenience
pub use detect::{detect, Detector, DetectorConfig};
pub use detection::Detection;
pub use error::{Error, Result};
pub use extension::{by_extension, extension_for_mime};
pub use probe::{probe, probe_with_aliases, DEFAULT_ALIASES, DEFAULT_PROBE_COMMAND};
pub use signature::match_signature;

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size in bytes of the header window read for signature matching.
///
/// Sized to the longest catalog span: the 16-byte ASF/WMV GUID at offset 0,
/// and the Ogg page header at offset 0 plus a 6-byte codec tag ending at
/// byte 35.
pub const PROBE_WINDOW: usize = 35;

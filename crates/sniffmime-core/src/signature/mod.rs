//! Magic-byte signature matching against a fixed-size header window.
//!
//! The rule catalog is an ordered list of [`SignatureRule`]s evaluated
//! front to back; the first rule whose fields all match wins,
//! regardless of pattern length. Rule order therefore encodes tie-breaking
//! intent: the 8-byte OOXML PKZIP rule sits ahead of the 4-byte generic
//! PKZIP rule it shares a prefix with, or it would be unreachable.
//!
//! ## Algorithm Overview
//!
//! 1. Walk the catalog in declared order
//! 2. For each rule, compare every field's bytes against the buffer at the
//!    field's offset (anchored, no scanning)
//! 3. On a match, resolve container formats through the rule's extension
//!    overrides; otherwise return the rule's MIME
//! 4. No rule matched: report `unknown`

mod rules;

use crate::detection::Detection;
use tracing::trace;

pub(crate) use rules::CATALOG;

/// One anchored byte pattern within the header window.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Offset of the pattern from the start of the file
    pub offset: usize,
    /// Bytes expected at that offset
    pub bytes: &'static [u8],
}

impl Field {
    /// True when the buffer carries exactly these bytes at this offset.
    ///
    /// A buffer too short to cover the field simply fails the comparison,
    /// which gives short files the conceptual zero-padding the window
    /// contract asks for without ever reading past real content.
    fn matches(&self, buffer: &[u8]) -> bool {
        buffer
            .get(self.offset..self.offset + self.bytes.len())
            .is_some_and(|window| window == self.bytes)
    }
}

/// A single entry in the signature catalog.
#[derive(Debug, Clone, Copy)]
pub struct SignatureRule {
    /// Anchored patterns that must all match
    pub fields: &'static [Field],
    /// MIME type reported on match, absent an extension override
    pub mime: &'static str,
    /// Extension-keyed overrides for container formats sharing this
    /// signature; keys are lowercase, looked up case-insensitively
    pub ext_overrides: &'static [(&'static str, &'static str)],
}

impl SignatureRule {
    fn matches(&self, buffer: &[u8]) -> bool {
        self.fields.iter().all(|field| field.matches(buffer))
    }

    /// Resolves the final MIME, consulting extension overrides if present.
    fn resolve(&self, extension: &str) -> &'static str {
        self.ext_overrides
            .iter()
            .find(|(ext, _)| extension.eq_ignore_ascii_case(ext))
            .map(|(_, mime)| *mime)
            .unwrap_or(self.mime)
    }
}

/// Matches a header window against the signature catalog.
///
/// `buffer` is the first [`crate::PROBE_WINDOW`] bytes of the file (shorter
/// if the file is shorter); `extension` is the file's extension without the
/// leading dot, used only to disambiguate container formats. Returns the
/// first matching rule's MIME, or [`Detection::Unknown`] when nothing
/// matches. Never errors.
pub fn match_signature(buffer: &[u8], extension: &str) -> Detection {
    for rule in CATALOG {
        if rule.matches(buffer) {
            let mime = rule.resolve(extension);
            trace!("signature match: {} ({} bytes read)", mime, buffer.len());
            return Detection::from(mime);
        }
    }
    Detection::Unknown
}

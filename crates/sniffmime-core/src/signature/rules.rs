//! The ordered signature catalog.
//!
//! Sources for the magic numbers:
//! - www.garykessler.net/library/file_sigs.html
//! - the Apache httpd mime.types registry
//!
//! Evaluation order is part of the contract: the first matching rule wins,
//! so rules sharing a prefix with a later, shorter rule (the PKZIP family)
//! must stay ahead of it.

use super::{Field, SignatureRule};

/// OOXML containers carry a PKZIP local-file header with fixed
/// compression-method and version bytes; the inner format is only
/// recoverable from the extension.
static OOXML_EXTENSIONS: &[(&str, &str)] = &[
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
];

/// Everything else built on a plain PKZIP container.
static PKZIP_EXTENSIONS: &[(&str, &str)] = &[
    ("jar", "application/java-archive"),
    ("kmz", "application/vnd.google-earth.kmz"),
    ("kwd", "application/vnd.kde.kword"),
    ("odp", "application/vnd.oasis.opendocument.presentation"),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("ott", "application/vnd.oasis.opendocument.text-template"),
    ("oxps", "application/oxps"),
];

macro_rules! rule {
    ($mime:expr, $(($offset:expr, $bytes:expr)),+) => {
        SignatureRule {
            fields: &[$(Field { offset: $offset, bytes: $bytes }),+],
            mime: $mime,
            ext_overrides: &[],
        }
    };
    ($mime:expr, $overrides:expr, $(($offset:expr, $bytes:expr)),+) => {
        SignatureRule {
            fields: &[$(Field { offset: $offset, bytes: $bytes }),+],
            mime: $mime,
            ext_overrides: $overrides,
        }
    };
}

pub(crate) static CATALOG: &[SignatureRule] = &[
    // Windows (or device-independent) bitmap: bmp, dib
    rule!("image/bmp", (0, b"BM")),
    // Graphics interchange format, both spec revisions
    rule!("image/gif", (0, b"GIF87a")),
    rule!("image/gif", (0, b"GIF89a")),
    // JPEG start-of-image marker
    rule!("image/jpeg", (0, &[0xFF, 0xD8])),
    // JPEG 2000 signature box, after the 4-byte box length
    rule!("image/jp2", (4, b"jP  ")),
    // Portable Network Graphics
    rule!("image/png", (0, &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])),
    // TIFF: little endian, big endian, BigTIFF, and the rare "I I" order
    rule!("image/tiff", (0, b"II*\x00")),
    rule!("image/tiff", (0, b"MM\x00*")),
    rule!("image/tiff", (0, b"MM\x00+")),
    rule!("image/tiff", (0, b"I I")),
    // Photoshop document
    rule!("image/vnd.adobe.photoshop", (0, b"8BPS")),
    // Netpbm family: plain and raw variants share a MIME per format
    rule!("image/x-portable-bitmap", (0, b"P1\n")),
    rule!("image/x-portable-bitmap", (0, b"P4\n")),
    rule!("image/x-portable-graymap", (0, b"P2\n")),
    rule!("image/x-portable-graymap", (0, b"P5\n")),
    rule!("image/x-portable-pixmap", (0, b"P3\n")),
    rule!("image/x-portable-pixmap", (0, b"P6\n")),
    rule!("image/x-portable-anymap", (0, b"P7\n")),
    // MP3 with an ID3v2 container, or a bare MPEG-1 layer 3 frame sync
    rule!("audio/mpeg", (0, b"ID3")),
    rule!("audio/mpeg", (0, &[0xFF, 0xFB])),
    // Flash video
    rule!("video/x-flv", (0, b"FLV\x01")),
    // ISO-BMFF ftyp brands, after the 4-byte box length
    rule!("audio/mp4", (4, b"ftypM4A ")),
    rule!("video/mp4", (4, b"ftypM4V ")),
    // Ogg page header plus the codec tag of the first logical stream.
    // The bare header identifies only the container, so a page with
    // neither codec tag must fall through unmatched.
    rule!(
        "video/ogg",
        (0, b"OggS\x00\x02\x00\x00\x00\x00\x00\x00\x00\x00"),
        (29, b"theora")
    ),
    rule!(
        "audio/ogg",
        (0, b"OggS\x00\x02\x00\x00\x00\x00\x00\x00\x00\x00"),
        (29, b"vorbis")
    ),
    // RIFF container, form type at offset 8
    rule!("audio/x-wav", (0, b"RIFF"), (8, b"WAVE")),
    rule!("video/mp4", (4, b"ftypMSNV")),
    rule!("video/mp4", (4, b"ftypisom")),
    rule!("video/x-msvideo", (0, b"RIFF"), (8, b"AVI LIST")),
    // QuickTime movie
    rule!("video/quicktime", (4, b"ftypqt  ")),
    // ASF/WMV header object GUID
    rule!(
        "video/x-ms-wmv",
        (
            0,
            &[
                0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00,
                0x62, 0xCE, 0x6C,
            ]
        )
    ),
    // Adobe PDF
    rule!("application/pdf", (0, b"%PDF")),
    // OOXML PKZIP variant. Must precede the generic PKZIP rule below,
    // which matches its 4-byte prefix.
    rule!(
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        OOXML_EXTENSIONS,
        (0, b"PK\x03\x04\x14\x00\x06\x00")
    ),
    // Generic PKZIP local-file header
    rule!(
        "application/zip",
        PKZIP_EXTENSIONS,
        (0, b"PK\x03\x04")
    ),
    // TrueType font
    rule!("font/ttf", (0, b"true\x00")),
];

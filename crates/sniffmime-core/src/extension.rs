//! Static extension-to-MIME table and its reverse lookup.
//!
//! The table is an ordered slice: forward lookups go through a lazily built
//! hash map, while the reverse lookup scans the slice in declared order and
//! returns the FIRST extension mapping to the queried MIME. With several
//! extensions sharing one MIME (jpg/jpeg, the Ogg aliases) that first-wins
//! resolution is deliberately lossy; put the representative spelling of
//! each group first.

use crate::detection::Detection;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Ordered extension table. Keys are lowercase and dotless.
pub(crate) static EXTENSION_TABLE: &[(&str, &str)] = &[
    // Images
    ("bmp", "image/bmp"),
    ("dib", "image/bmp"),
    ("gif", "image/gif"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jp2", "image/jp2"),
    ("png", "image/png"),
    ("tiff", "image/tiff"),
    ("tif", "image/tiff"),
    ("psd", "image/vnd.adobe.photoshop"),
    ("pbm", "image/x-portable-bitmap"),
    ("pgm", "image/x-portable-graymap"),
    ("ppm", "image/x-portable-pixmap"),
    ("pam", "image/x-portable-anymap"),
    ("svg", "image/svg+xml"),
    ("webp", "image/webp"),
    ("ico", "image/x-icon"),
    // Audio
    ("mp3", "audio/mpeg"),
    ("m4a", "audio/mp4"),
    ("ogg", "audio/ogg"),
    ("oga", "audio/ogg"),
    ("wav", "audio/x-wav"),
    ("flac", "audio/flac"),
    ("aac", "audio/aac"),
    ("wma", "audio/x-ms-wma"),
    // Video
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("flv", "video/x-flv"),
    ("ogv", "video/ogg"),
    ("wmv", "video/x-ms-wmv"),
    ("mpg", "video/mpeg"),
    ("mpeg", "video/mpeg"),
    ("mkv", "video/x-matroska"),
    ("webm", "video/webm"),
    // Documents
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("ott", "application/vnd.oasis.opendocument.text-template"),
    ("odp", "application/vnd.oasis.opendocument.presentation"),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
    ("kwd", "application/vnd.kde.kword"),
    ("oxps", "application/oxps"),
    ("rtf", "application/rtf"),
    ("epub", "application/epub+zip"),
    // Text and web
    ("txt", "text/plain"),
    ("log", "text/plain"),
    ("css", "text/css"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("js", "application/javascript"),
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("csv", "text/csv"),
    ("md", "text/markdown"),
    // Archives
    ("zip", "application/zip"),
    ("jar", "application/java-archive"),
    ("kmz", "application/vnd.google-earth.kmz"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("bz2", "application/x-bzip2"),
    ("7z", "application/x-7z-compressed"),
    ("rar", "application/vnd.rar"),
    // Fonts
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
];

static EXTENSION_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| EXTENSION_TABLE.iter().copied().collect());

/// Extracts the lowercased extension of a path, without the leading dot.
pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Maps a file path's extension to a MIME type.
///
/// A path with no extension, or an extension absent from the table, yields
/// [`Detection::Unknown`].
pub fn by_extension(path: impl AsRef<Path>) -> Detection {
    extension_of(path.as_ref())
        .and_then(|ext| EXTENSION_MAP.get(ext.as_str()).copied())
        .map(Detection::from)
        .unwrap_or(Detection::Unknown)
}

/// Returns a representative extension for a MIME type.
///
/// Scans the table in declared order and returns the first extension whose
/// MIME equals the query; `None` when no entry matches. Callers must not
/// assume the result is "the" canonical extension when several share the
/// MIME.
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    EXTENSION_TABLE
        .iter()
        .find(|(_, m)| *m == mime)
        .map(|(ext, _)| *ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_by_extension() {
        assert_eq!(by_extension("report.pdf").as_str(), "application/pdf");
        assert_eq!(by_extension("style.css").as_str(), "text/css");
        assert_eq!(by_extension("archive.tar.gz").as_str(), "application/gzip");
    }

    #[test]
    fn test_by_extension_is_case_insensitive() {
        assert_eq!(by_extension("PHOTO.JPG").as_str(), "image/jpeg");
        assert_eq!(by_extension("Slides.PpTx").as_str(),
            "application/vnd.openxmlformats-officedocument.presentationml.presentation");
    }

    #[test]
    fn test_by_extension_misses() {
        assert!(by_extension("noextension").is_unknown());
        assert!(by_extension("weird.xyz").is_unknown());
        assert!(by_extension("").is_unknown());
    }

    #[test]
    fn test_reverse_lookup_first_wins() {
        // jpg precedes jpeg in the table
        assert_eq!(extension_for_mime("image/jpeg"), Some("jpg"));
        // ogg precedes oga
        assert_eq!(extension_for_mime("audio/ogg"), Some("ogg"));
        assert_eq!(extension_for_mime("application/x-unregistered"), None);
    }

    #[test]
    fn test_round_trip_for_single_extension_mimes() {
        // MIME types with exactly one extension must round-trip exactly.
        assert_eq!(extension_for_mime(by_extension("a.pdf").as_str()), Some("pdf"));
        assert_eq!(extension_for_mime(by_extension("a.flv").as_str()), Some("flv"));
        assert_eq!(extension_for_mime(by_extension("a.psd").as_str()), Some("psd"));
    }

    #[test]
    fn test_table_keys_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (ext, _) in EXTENSION_TABLE {
            assert_eq!(*ext, ext.to_ascii_lowercase());
            assert!(seen.insert(*ext), "duplicate table key: {ext}");
        }
    }
}

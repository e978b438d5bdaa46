//! Adapter around an external file-classification command.
//!
//! Spawns `<command> --brief <path>`, captures standard output, and
//! normalizes the answer through an alias table. Every failure mode (tool
//! missing, non-zero exit, undecodable output) is downgraded to the
//! `unknown` sentinel: the probe is one opinion among several and must
//! never abort the cascade.

use crate::detection::Detection;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Default external classifier.
///
/// The adapter is indifferent to the concrete tool as long as it accepts a
/// single path argument after `--brief`, prints one MIME line to stdout,
/// and exits non-zero on failure.
pub const DEFAULT_PROBE_COMMAND: &str = "mimetype";

/// Default alias table normalizing tool-specific MIME spellings.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("image/x-ms-bmp", "image/bmp"),
    ("text/x-log", "text/plain"),
    ("audio/x-vorbis+ogg", "audio/ogg"),
    ("video/x-theora+ogg", "video/ogg"),
];

/// Probes a file with the default command and alias table.
pub fn probe(path: impl AsRef<Path>) -> Detection {
    probe_with(path, DEFAULT_PROBE_COMMAND, DEFAULT_ALIASES)
}

/// Probes a file with the default command and a caller-supplied alias
/// table. An empty table disables normalization entirely.
pub fn probe_with_aliases<S1, S2>(path: impl AsRef<Path>, aliases: &[(S1, S2)]) -> Detection
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    probe_with(path, DEFAULT_PROBE_COMMAND, aliases)
}

/// Probes a file with an explicit command and alias table.
pub fn probe_with<S1, S2>(path: impl AsRef<Path>, command: &str, aliases: &[(S1, S2)]) -> Detection
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    let path = path.as_ref();

    let raw = match run_probe(command, path) {
        Ok(raw) => raw,
        Err(err) => {
            debug!("external probe unavailable for {}: {}", path.display(), err);
            return Detection::Unknown;
        }
    };

    normalize(&raw, aliases)
}

/// Runs the classification subprocess and captures its stdout.
fn run_probe(command: &str, path: &Path) -> Result<String> {
    let output = Command::new(command)
        .arg("--brief")
        .arg(path)
        .output()
        .map_err(|e| Error::probe_spawn(command, e))?;

    if !output.status.success() {
        return Err(Error::probe_exit(command, output.status.code()));
    }

    String::from_utf8(output.stdout).map_err(|_| Error::probe_output(command))
}

/// Trims raw tool output and applies the alias table.
///
/// The first alias entry exactly matching the trimmed output substitutes
/// its canonical MIME; otherwise the raw output passes through unchanged.
fn normalize<S1, S2>(raw: &str, aliases: &[(S1, S2)]) -> Detection
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    let mime = raw.trim();

    for (from, to) in aliases {
        if mime == from.as_ref() {
            return Detection::from_raw(to.as_ref().to_string());
        }
    }

    Detection::from_raw(mime.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_applies_default_aliases() {
        assert_eq!(
            normalize("image/x-ms-bmp\n", DEFAULT_ALIASES).as_str(),
            "image/bmp"
        );
        assert_eq!(
            normalize("  text/x-log  ", DEFAULT_ALIASES).as_str(),
            "text/plain"
        );
        assert_eq!(
            normalize("audio/x-vorbis+ogg", DEFAULT_ALIASES).as_str(),
            "audio/ogg"
        );
    }

    #[test]
    fn test_normalize_passes_unmatched_output_through() {
        assert_eq!(
            normalize("application/x-exotic\n", DEFAULT_ALIASES).as_str(),
            "application/x-exotic"
        );
    }

    #[test]
    fn test_normalize_folds_sentinel_and_empty_output() {
        assert!(normalize("unknown\n", DEFAULT_ALIASES).is_unknown());
        assert!(normalize("", DEFAULT_ALIASES).is_unknown());
        assert!(normalize("   \n", DEFAULT_ALIASES).is_unknown());
    }

    #[test]
    fn test_normalize_with_custom_table() {
        let custom = [("a/b", "c/d")];
        assert_eq!(normalize("a/b", &custom).as_str(), "c/d");
        // An empty table leaves even known spellings alone.
        let empty: [(&str, &str); 0] = [];
        assert_eq!(normalize("image/x-ms-bmp", &empty).as_str(), "image/x-ms-bmp");
    }

    #[test]
    fn test_missing_tool_degrades_to_unknown() {
        let result = probe_with(
            "/tmp/whatever.bin",
            "sniffmime-no-such-classifier",
            DEFAULT_ALIASES,
        );
        assert!(result.is_unknown());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_degrades_to_unknown() {
        let result = probe_with("/tmp/whatever.bin", "false", DEFAULT_ALIASES);
        assert!(result.is_unknown());
    }
}

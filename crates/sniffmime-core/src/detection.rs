//! The canonical result type shared by every detection stage.

use std::borrow::Cow;
use std::fmt;

/// Spelling of the sentinel in string form.
pub const UNKNOWN: &str = "unknown";

/// Outcome of a single detection stage or of the full cascade.
///
/// [`Detection::Unknown`] means "this stage could not classify the input".
/// It is the expected outcome for most stages on any given file and is a
/// value, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// A classified MIME type, e.g. `image/png`.
    Mime(Cow<'static, str>),
    /// The stage could not determine a type.
    Unknown,
}

impl Detection {
    /// Builds a detection from raw tool output.
    ///
    /// The literal string `unknown` and empty output fold into
    /// [`Detection::Unknown`] so an external tool printing the sentinel
    /// round-trips correctly.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() || raw == UNKNOWN {
            Detection::Unknown
        } else {
            Detection::Mime(Cow::Owned(raw))
        }
    }

    /// Returns the MIME string, or `"unknown"` for the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Detection::Mime(mime) => mime,
            Detection::Unknown => UNKNOWN,
        }
    }

    /// True if this stage failed to classify the input.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Detection::Unknown)
    }
}

impl From<&'static str> for Detection {
    fn from(mime: &'static str) -> Self {
        Detection::Mime(Cow::Borrowed(mime))
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_folds_sentinel() {
        assert_eq!(Detection::from_raw("unknown"), Detection::Unknown);
        assert_eq!(Detection::from_raw(""), Detection::Unknown);
        assert_eq!(
            Detection::from_raw("image/png"),
            Detection::Mime("image/png".into())
        );
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Detection::Unknown.to_string(), "unknown");
        assert_eq!(Detection::from("application/pdf").to_string(), "application/pdf");
    }

    #[test]
    fn test_is_unknown() {
        assert!(Detection::Unknown.is_unknown());
        assert!(!Detection::from("image/gif").is_unknown());
    }
}

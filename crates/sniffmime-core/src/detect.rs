//! The detection cascade: external probe, then signature, then extension.
//!
//! The three strategies run strictly in order; each stage's `unknown` is the
//! only trigger to advance, and any other answer short-circuits the cascade.
//! The whole pipeline is total: `detect` always returns a [`Detection`],
//! downgrading collaborator failures (missing file, unreadable header,
//! absent probe tool) to `unknown` for the failing stage. A nonexistent
//! `missing.pdf` therefore still reports `application/pdf` from its
//! extension.

use crate::chunk;
use crate::detection::Detection;
use crate::extension;
use crate::probe;
use crate::signature;
use crate::PROBE_WINDOW;
use std::path::Path;
use tracing::debug;

/// Configuration for the detection cascade
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Whether to consult the external probe command at all
    pub use_probe: bool,
    /// External classifier invoked as `<command> --brief <path>`
    pub probe_command: String,
    /// Alias overrides for probe output; `None` applies the default table
    pub aliases: Option<Vec<(String, String)>>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            use_probe: true,
            probe_command: probe::DEFAULT_PROBE_COMMAND.to_string(),
            aliases: None,
        }
    }
}

impl DetectorConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the external probe stage
    pub fn use_probe(mut self, enabled: bool) -> Self {
        self.use_probe = enabled;
        self
    }

    /// Sets the external classification command
    pub fn probe_command(mut self, command: impl Into<String>) -> Self {
        self.probe_command = command.into();
        self
    }

    /// Replaces the default alias table for probe output
    pub fn aliases(mut self, aliases: Vec<(String, String)>) -> Self {
        self.aliases = Some(aliases);
        self
    }
}

/// Runs the three-stage detection cascade for file paths
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Creates a detector with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detector with custom configuration
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Identifies the MIME type of the file at `path`.
    ///
    /// Never fails: every outcome is a MIME string or the `unknown`
    /// sentinel.
    pub fn detect(&self, path: impl AsRef<Path>) -> Detection {
        let path = path.as_ref();

        if self.config.use_probe {
            let result = match &self.config.aliases {
                Some(aliases) => probe::probe_with(path, &self.config.probe_command, aliases),
                None => {
                    probe::probe_with(path, &self.config.probe_command, probe::DEFAULT_ALIASES)
                }
            };
            if !result.is_unknown() {
                return result;
            }
            debug!("probe stage inconclusive for {}", path.display());
        }

        let ext = extension::extension_of(path).unwrap_or_default();
        match chunk::read_head(path, PROBE_WINDOW) {
            Ok(buffer) => {
                let result = signature::match_signature(&buffer, &ext);
                if !result.is_unknown() {
                    return result;
                }
                debug!("signature stage inconclusive for {}", path.display());
            }
            // Unreadable files count as unknown for this stage; the
            // extension stage still gets its turn.
            Err(err) => debug!("header read failed for {}: {}", path.display(), err),
        }

        extension::by_extension(path)
    }
}

/// Identifies the MIME type of a file with the default configuration.
///
/// This is a convenience wrapper over [`Detector::detect`].
pub fn detect(path: impl AsRef<Path>) -> Detection {
    Detector::new().detect(path)
}

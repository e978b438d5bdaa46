//! Error types for the sniffmime-core library.
//!
//! These errors exist at the collaborator layer (byte reads, subprocess
//! invocation). The cascade API never surfaces them: classification misses
//! are the `unknown` sentinel, and collaborator failures are downgraded to
//! it before they reach a caller.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sniffmime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for collaborator-level failures
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to spawn the external probe command
    #[error("failed to spawn probe command '{command}': {source}")]
    ProbeSpawn {
        /// The command that could not be spawned
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The external probe command exited unsuccessfully
    #[error("probe command '{command}' exited with status {code:?}")]
    ProbeExit {
        /// The command that failed
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
    },

    /// The external probe command printed non-UTF-8 output
    #[error("probe command '{command}' produced non-UTF-8 output")]
    ProbeOutput {
        /// The command whose output could not be decoded
        command: String,
    },
}

impl Error {
    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new probe spawn error
    pub fn probe_spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::ProbeSpawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new probe exit error
    pub fn probe_exit(command: impl Into<String>, code: Option<i32>) -> Self {
        Self::ProbeExit {
            command: command.into(),
            code,
        }
    }

    /// Creates a new probe output error
    pub fn probe_output(command: impl Into<String>) -> Self {
        Self::ProbeOutput {
            command: command.into(),
        }
    }
}

//! Error types for the portkill-core library.

use thiserror::Error;

/// Result type alias for portkill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while inspecting ports and terminating processes.
///
/// None of these escape the public operations of
/// [`PortService`](crate::application::PortService); they are absorbed into
/// empty results, `"unknown"` names, or the aggregated message of a
/// [`KillOutcome`](crate::domain::KillOutcome).
#[derive(Error, Debug)]
pub enum Error {
    /// A system command ran but exited unsuccessfully.
    #[error("`{program}` exited with {}: {}", exit_label(.code), stderr_label(.stderr))]
    CommandExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Failed to execute a system command.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// A system command did not finish within the configured timeout.
    #[error("`{program}` timed out after {secs}s")]
    CommandTimedOut { program: String, secs: u64 },

    /// Failed to kill a process.
    #[error("Failed to kill process {pid}: {reason}")]
    KillFailed { pid: u32, reason: String },

    /// The targeted process no longer exists.
    #[error("No such process: {0}")]
    ProcessNotFound(u32),

    /// Permission denied for an operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this is the "ran fine, matched nothing" exit of a query tool.
    ///
    /// `lsof` reports zero matches as exit status 1 with nothing on stderr.
    pub fn is_no_match(&self) -> bool {
        matches!(
            self,
            Error::CommandExit { code: Some(1), stderr, .. } if stderr.trim().is_empty()
        )
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

fn stderr_label(stderr: &str) -> &str {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        "no error output"
    } else {
        trimmed
    }
}

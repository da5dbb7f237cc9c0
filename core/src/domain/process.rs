//! Process domain models.

use std::fmt;

/// Name given to a process whose executable name could not be resolved.
pub const UNKNOWN_COMMAND: &str = "unknown";

// ============================================================================
// ProcessRecord
// ============================================================================

/// A process holding a socket on a queried port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessRecord {
    /// Process ID, always positive.
    pub pid: u32,
    /// Executable name, or [`UNKNOWN_COMMAND`] when the lookup failed.
    pub command: String,
    /// Owning account, only when the platform tool reports it.
    pub user: Option<String>,
}

impl ProcessRecord {
    /// Create a record without owner information.
    pub fn new(pid: u32, command: impl Into<String>) -> Self {
        Self {
            pid,
            command: command.into(),
            user: None,
        }
    }

    /// Create a record whose name could not be resolved.
    pub fn unknown(pid: u32) -> Self {
        Self::new(pid, UNKNOWN_COMMAND)
    }

    /// Attach the owning account name.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

impl fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PID {}: {}", self.pid, self.command)?;
        if let Some(user) = &self.user {
            write!(f, " ({})", user)?;
        }
        Ok(())
    }
}

// ============================================================================
// KillSignal
// ============================================================================

/// How hard to ask a process to exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KillSignal {
    /// SIGTERM on Unix, plain `taskkill` on Windows.
    #[default]
    Graceful,
    /// SIGKILL on Unix, `taskkill /F` on Windows.
    Force,
}

impl KillSignal {
    /// Pick the signal for a `force` flag.
    pub fn from_force(force: bool) -> Self {
        if force {
            KillSignal::Force
        } else {
            KillSignal::Graceful
        }
    }
}

impl fmt::Display for KillSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KillSignal::Graceful => write!(f, "SIGTERM"),
            KillSignal::Force => write!(f, "SIGKILL"),
        }
    }
}

//! Process killer adapters.
//!
//! Unix processes are signalled directly through `kill(2)`; Windows goes
//! through `taskkill`.

#[cfg(unix)]
mod unix;
mod windows;

#[cfg(unix)]
pub use unix::UnixKiller;
pub use windows::WindowsKiller;

use crate::domain::KillSignal;
use crate::error::Result;
use crate::ports::ProcessKillerPort;

#[cfg(windows)]
use super::SystemRunner;

#[cfg(not(any(unix, windows)))]
compile_error!("Unsupported platform: only Unix-likes and Windows are supported");

/// The process killer for the current platform.
pub struct PlatformKiller {
    #[cfg(unix)]
    inner: unix::UnixKiller,

    #[cfg(windows)]
    inner: windows::WindowsKiller,
}

impl PlatformKiller {
    /// Create the killer for Unix; signals need no subprocess.
    #[cfg(unix)]
    pub fn new() -> Self {
        Self {
            inner: unix::UnixKiller::new(),
        }
    }

    /// Create the killer for Windows; `runner` executes `taskkill`.
    #[cfg(windows)]
    pub fn new(runner: SystemRunner) -> Self {
        Self {
            inner: windows::WindowsKiller::new(runner),
        }
    }
}

#[cfg(unix)]
impl Default for PlatformKiller {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessKillerPort for PlatformKiller {
    async fn kill(&self, pid: u32, signal: KillSignal) -> Result<()> {
        self.inner.kill(pid, signal).await
    }
}

//! Unix process termination via `kill(2)`.

use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::unistd::Pid;
use tracing::{debug, warn};

use crate::domain::KillSignal;
use crate::error::{Error, Result};
use crate::ports::ProcessKillerPort;

/// Unix process killer
///
/// This implementation uses the standard Unix signals:
/// - SIGTERM (15): Graceful termination request
/// - SIGKILL (9): Immediate forced termination
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixKiller;

impl UnixKiller {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessKillerPort for UnixKiller {
    async fn kill(&self, pid: u32, signal: KillSignal) -> Result<()> {
        // kill(2) treats 0 and negative PIDs as process groups
        let raw = match i32::try_from(pid) {
            Ok(raw) if raw > 0 => raw,
            _ => {
                return Err(Error::KillFailed {
                    pid,
                    reason: "not a valid process ID".to_string(),
                })
            }
        };

        let sig = match signal {
            KillSignal::Graceful => Signal::SIGTERM,
            KillSignal::Force => Signal::SIGKILL,
        };

        debug!(pid = pid, signal = %signal, "Sending signal to process");

        match nix::sys::signal::kill(Pid::from_raw(raw), sig) {
            Ok(()) => {
                debug!(pid = pid, signal = %signal, "Signal sent successfully");
                Ok(())
            }
            Err(Errno::ESRCH) => {
                debug!(pid = pid, "Process not found");
                Err(Error::ProcessNotFound(pid))
            }
            Err(Errno::EPERM) => {
                warn!(pid = pid, "Permission denied to kill process");
                Err(Error::PermissionDenied(format!(
                    "not allowed to signal process {}",
                    pid
                )))
            }
            Err(errno) => Err(Error::KillFailed {
                pid,
                reason: errno.desc().to_string(),
            }),
        }
    }
}

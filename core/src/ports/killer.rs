//! Process killer port (interface).

use crate::domain::KillSignal;
use crate::error::Result;

/// Port for killing processes.
///
/// This trait defines the interface for process termination.
/// Implementations handle platform-specific signal handling.
pub trait ProcessKillerPort: Send + Sync {
    /// Send one termination request to `pid`.
    ///
    /// `Ok(())` means the request was delivered. An error means this
    /// particular process could not be signalled (already gone, not permitted).
    fn kill(
        &self,
        pid: u32,
        signal: KillSignal,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

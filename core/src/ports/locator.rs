//! Process locator port (interface).

use crate::domain::Lookup;

/// Port for finding the processes bound to a network port.
///
/// Implementations handle platform-specific details (lsof, netstat, etc.)
/// and never fail outright: problems are reported as [`Lookup::Failed`].
pub trait ProcessLocatorPort: Send + Sync {
    /// Find every process holding a listening or connected socket on `port`.
    ///
    /// Returned PIDs are positive and unique.
    fn locate(&self, port: u16) -> impl std::future::Future<Output = Lookup> + Send;
}

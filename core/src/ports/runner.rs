//! Command runner port (interface).

use crate::error::Result;

/// Port for running an OS utility and capturing what it prints.
///
/// Every adapter that shells out goes through this seam, so the text
/// parsing behind it can be exercised against canned output.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion.
    ///
    /// Returns stdout when the exit status is zero. A non-zero exit is
    /// [`Error::CommandExit`](crate::Error::CommandExit).
    fn run(
        &self,
        program: &str,
        args: &[&str],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

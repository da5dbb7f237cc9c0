//! Windows process termination via taskkill
//!
//! Uses the following system commands:
//! - `taskkill /PID xxx` for graceful termination
//! - `taskkill /F /PID xxx` for forced termination

use tracing::debug;

use crate::adapters::SystemRunner;
use crate::domain::KillSignal;
use crate::error::Result;
use crate::ports::{CommandRunner, ProcessKillerPort};

/// Windows process killer
///
/// - `taskkill /PID xxx`: Request graceful termination (sends WM_CLOSE)
/// - `taskkill /F /PID xxx`: Force termination (TerminateProcess)
pub struct WindowsKiller<R = SystemRunner> {
    runner: R,
}

impl<R: CommandRunner> WindowsKiller<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: CommandRunner> ProcessKillerPort for WindowsKiller<R> {
    async fn kill(&self, pid: u32, signal: KillSignal) -> Result<()> {
        debug!(pid = pid, signal = %signal, "Executing taskkill");

        let pid_arg = pid.to_string();
        let args: Vec<&str> = match signal {
            KillSignal::Force => vec!["/F", "/PID", pid_arg.as_str()],
            KillSignal::Graceful => vec!["/PID", pid_arg.as_str()],
        };

        self.runner.run("taskkill", &args).await?;
        debug!(pid = pid, "taskkill succeeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::runner::testing::ScriptedRunner;
    use crate::error::Error;

    #[tokio::test]
    async fn test_taskkill_flags() {
        let runner = ScriptedRunner::new()
            .stdout("taskkill /F /PID 4242", "SUCCESS: The process with PID 4242 has been terminated.")
            .stdout("taskkill /PID 17", "SUCCESS: Sent termination signal to the process with PID 17.");
        let killer = WindowsKiller::new(runner);

        killer.kill(4242, KillSignal::Force).await.unwrap();
        killer.kill(17, KillSignal::Graceful).await.unwrap();

        assert_eq!(
            killer.runner().calls(),
            vec!["taskkill /F /PID 4242", "taskkill /PID 17"]
        );
    }

    #[tokio::test]
    async fn test_taskkill_failure_carries_message() {
        let runner = ScriptedRunner::new().exit(
            "taskkill /PID 4242",
            128,
            "ERROR: The process \"4242\" not found.",
        );
        let killer = WindowsKiller::new(runner);

        let err = killer.kill(4242, KillSignal::Graceful).await.unwrap_err();
        assert!(matches!(err, Error::CommandExit { code: Some(128), .. }));
        assert!(err.to_string().contains("not found"));
    }
}

//! Subprocess execution through `tokio::process`.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};
use crate::ports::CommandRunner;

/// Runs OS utilities as child processes and captures their stdout.
///
/// With a timeout set, a command that has not finished in time is killed
/// and reported as [`Error::CommandTimedOut`].
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    /// Create a runner that waits for commands indefinitely.
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Create a runner that gives up on commands after `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!(program = program, args = ?args, "Running command");

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| Error::CommandTimedOut {
                    program: program.to_string(),
                    secs: limit.as_secs(),
                })?,
            None => command.output().await,
        }
        .map_err(|e| Error::CommandFailed(format!("Failed to run {}: {}", program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            debug!(
                program = program,
                code = ?output.status.code(),
                stderr = %stderr.trim(),
                "Command exited unsuccessfully"
            );
            return Err(Error::CommandExit {
                program: program.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        // Windows tools print in the console code page, so decode lossily.
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Scripted runner for exercising parsers without touching the host.
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use parking_lot::Mutex;

    use super::*;

    /// Canned result for one command line.
    #[derive(Debug, Clone)]
    pub enum Reply {
        /// Exit status 0 with this stdout.
        Stdout(String),
        /// Non-zero exit with this stderr.
        Exit(i32, String),
    }

    /// Answers commands from a table keyed by the full command line.
    ///
    /// Unscripted commands fail as if the program were not installed.
    #[derive(Default)]
    pub struct ScriptedRunner {
        replies: HashMap<String, Reply>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn on(mut self, command_line: &str, reply: Reply) -> Self {
            self.replies.insert(command_line.to_string(), reply);
            self
        }

        pub fn stdout(self, command_line: &str, stdout: &str) -> Self {
            self.on(command_line, Reply::Stdout(stdout.to_string()))
        }

        pub fn exit(self, command_line: &str, code: i32, stderr: &str) -> Self {
            self.on(command_line, Reply::Exit(code, stderr.to_string()))
        }

        /// Command lines run so far, in order.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    impl CommandRunner for ScriptedRunner {
        async fn run(&self, program: &str, args: &[&str]) -> Result<String> {
            let command_line = std::iter::once(program)
                .chain(args.iter().copied())
                .collect::<Vec<_>>()
                .join(" ");
            self.calls.lock().push(command_line.clone());

            match self.replies.get(&command_line) {
                Some(Reply::Stdout(stdout)) => Ok(stdout.clone()),
                Some(Reply::Exit(code, stderr)) => Err(Error::CommandExit {
                    program: program.to_string(),
                    code: Some(*code),
                    stderr: stderr.clone(),
                }),
                None => Err(Error::CommandFailed(format!(
                    "Failed to run {}: No such file or directory (os error 2)",
                    program
                ))),
            }
        }
    }
}

//! Unix process locator using lsof and ps.
//!
//! Two tiers:
//! 1. `lsof -i :PORT -t` for bare PIDs, then `ps -p PID -o comm=` per PID.
//! 2. If that fails, `lsof -i :PORT` and read command/PID/user columns directly.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{Lookup, ProcessRecord, UNKNOWN_COMMAND};
use crate::ports::{CommandRunner, ProcessLocatorPort};

use super::utils::{decode_lsof_escapes, parse_pid};
use crate::adapters::SystemRunner;

/// Unix-specific process locator.
pub struct UnixLocator<R = SystemRunner> {
    runner: R,
}

impl<R: CommandRunner> UnixLocator<R> {
    /// Create a new Unix locator.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve the short executable name of `pid`.
    ///
    /// Executes: `ps -p PID -o comm=`
    async fn process_name(&self, pid: u32) -> String {
        let pid_arg = pid.to_string();
        match self
            .runner
            .run("ps", &["-p", pid_arg.as_str(), "-o", "comm="])
            .await
        {
            Ok(output) => {
                let name = output.trim();
                if name.is_empty() {
                    UNKNOWN_COMMAND.to_string()
                } else {
                    name.to_string()
                }
            }
            Err(e) => {
                debug!(pid = pid, error = %e, "Could not resolve process name");
                UNKNOWN_COMMAND.to_string()
            }
        }
    }

    /// Verbose lsof listing, used when the PID-only form fails.
    ///
    /// Executes: `lsof -i :PORT`
    async fn locate_verbose(&self, port: u16, target: &str) -> Lookup {
        match self.runner.run("lsof", &["-i", target]).await {
            Ok(output) => Lookup::from_records(parse_lsof_table(&output)),
            Err(e) if e.is_no_match() => {
                debug!(port = port, "lsof reported no matches");
                Lookup::Empty
            }
            Err(e) => {
                warn!(port = port, error = %e, "lsof fallback failed");
                Lookup::Failed(e.to_string())
            }
        }
    }
}

impl Default for UnixLocator {
    fn default() -> Self {
        Self::new(SystemRunner::new())
    }
}

impl<R: CommandRunner> ProcessLocatorPort for UnixLocator<R> {
    async fn locate(&self, port: u16) -> Lookup {
        let target = format!(":{}", port);

        let output = match self.runner.run("lsof", &["-i", target.as_str(), "-t"]).await {
            Ok(output) => output,
            Err(e) => {
                debug!(port = port, error = %e, "lsof -t failed, trying verbose listing");
                return self.locate_verbose(port, &target).await;
            }
        };

        let mut records = Vec::new();
        for pid in parse_pid_list(&output) {
            let command = self.process_name(pid).await;
            records.push(ProcessRecord::new(pid, command));
        }

        debug!(port = port, count = records.len(), "Located processes");
        Lookup::from_records(records)
    }
}

/// Parse `lsof -t` output: one PID per line, deduplicated in first-seen order.
fn parse_pid_list(output: &str) -> Vec<u32> {
    let mut seen = HashSet::new();
    output
        .lines()
        .filter_map(parse_pid)
        .filter(|pid| seen.insert(*pid))
        .collect()
}

/// Positions of the columns we read from a verbose lsof table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LsofColumns {
    command: usize,
    pid: usize,
    user: usize,
}

impl Default for LsofColumns {
    fn default() -> Self {
        Self {
            command: 0,
            pid: 1,
            user: 2,
        }
    }
}

impl LsofColumns {
    /// Locate columns by header name, keeping the default for any not found.
    fn from_header(header: &str) -> Self {
        let names: Vec<&str> = header.split_whitespace().collect();
        let position = |name: &str| names.iter().position(|n| n.eq_ignore_ascii_case(name));

        let defaults = Self::default();
        Self {
            command: position("COMMAND").unwrap_or(defaults.command),
            pid: position("PID").unwrap_or(defaults.pid),
            user: position("USER").unwrap_or(defaults.user),
        }
    }
}

/// Parse verbose lsof output into records.
///
/// Expected lsof output format:
/// ```text
/// COMMAND     PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
/// node      34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
/// ```
fn parse_lsof_table(output: &str) -> Vec<ProcessRecord> {
    let mut lines = output.lines().filter(|line| !line.trim().is_empty());
    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns = LsofColumns::from_header(header);

    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for line in lines {
        let parts: Vec<&str> = line.split_whitespace().collect();

        let Some(pid) = parts.get(columns.pid).and_then(|p| parse_pid(p)) else {
            continue;
        };
        let Some(command) = parts.get(columns.command) else {
            continue;
        };

        // Deduplicate by PID: one process often holds several sockets
        if !seen.insert(pid) {
            continue;
        }

        let mut record = ProcessRecord::new(pid, decode_lsof_escapes(command));
        if let Some(user) = parts.get(columns.user) {
            record = record.with_user(*user);
        }
        records.push(record);
    }

    records
}

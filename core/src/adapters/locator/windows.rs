//! Windows process locator
//!
//! Uses `netstat -ano` to find PIDs holding a port and `tasklist /FO CSV` to resolve process names.

use std::collections::HashSet;

use regex::Regex;
use tracing::{debug, warn};

use crate::domain::{Lookup, ProcessRecord, UNKNOWN_COMMAND};
use crate::ports::{CommandRunner, ProcessLocatorPort};

use super::utils::{address_has_port, parse_pid};
use crate::adapters::SystemRunner;

/// Windows-specific process locator using netstat and tasklist
pub struct WindowsLocator<R = SystemRunner> {
    runner: R,
}

impl<R: CommandRunner> WindowsLocator<R> {
    /// Create a new WindowsLocator
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve the image name of `pid`.
    ///
    /// Executes: `tasklist /FI "PID eq PID" /FO CSV /NH`
    async fn process_name(&self, pid: u32) -> String {
        let filter = format!("PID eq {}", pid);
        match self
            .runner
            .run("tasklist", &["/FI", filter.as_str(), "/FO", "CSV", "/NH"])
            .await
        {
            Ok(output) => {
                parse_tasklist_name(&output).unwrap_or_else(|| UNKNOWN_COMMAND.to_string())
            }
            Err(e) => {
                debug!(pid = pid, error = %e, "Could not resolve process name");
                UNKNOWN_COMMAND.to_string()
            }
        }
    }
}

impl Default for WindowsLocator {
    fn default() -> Self {
        Self::new(SystemRunner::new())
    }
}

impl<R: CommandRunner> ProcessLocatorPort for WindowsLocator<R> {
    async fn locate(&self, port: u16) -> Lookup {
        let output = match self.runner.run("netstat", &["-ano"]).await {
            Ok(output) => output,
            Err(e) => {
                warn!(port = port, error = %e, "netstat failed");
                return Lookup::Failed(e.to_string());
            }
        };

        let mut records = Vec::new();
        for pid in parse_netstat_pids(&output, port) {
            let command = self.process_name(pid).await;
            records.push(ProcessRecord::new(pid, command));
        }

        debug!(port = port, count = records.len(), "Located processes");
        Lookup::from_records(records)
    }
}

/// Collect the PIDs of every connection row touching `port`.
///
/// Example output:
/// ```text
/// Active Connections
///
///   Proto  Local Address          Foreign Address        State           PID
///   TCP    0.0.0.0:135            0.0.0.0:0              LISTENING       1020
///   TCP    127.0.0.1:3000         0.0.0.0:0              LISTENING       5432
///   UDP    0.0.0.0:5353           *:*                                    2210
/// ```
///
/// A row matches when its local or foreign address carries exactly `port`.
/// The PID is the last column; UDP rows have no state column.
fn parse_netstat_pids(output: &str, port: u16) -> Vec<u32> {
    let mut pids = Vec::new();
    let mut seen: HashSet<u32> = HashSet::new();

    for line in output.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();

        // Expected format: Proto, Local Address, Foreign Address, [State], PID
        if parts.len() < 4 {
            continue;
        }
        if !parts[0].eq_ignore_ascii_case("TCP") && !parts[0].eq_ignore_ascii_case("UDP") {
            continue;
        }
        if !address_has_port(parts[1], port) && !address_has_port(parts[2], port) {
            continue;
        }

        let Some(pid) = parts.last().and_then(|p| parse_pid(p)) else {
            continue;
        };

        if seen.insert(pid) {
            pids.push(pid);
        }
    }

    pids
}

/// Extract the first quoted CSV field of `tasklist /NH` output.
///
/// Example output:
/// ```text
/// "node.exe","5432","Console","1","45,000 K"
/// ```
///
/// When nothing matches, tasklist prints an `INFO:` line with no quotes.
fn parse_tasklist_name(output: &str) -> Option<String> {
    let regex = Regex::new(r#""([^"]+)""#).ok()?;
    regex.captures(output).map(|caps| caps[1].to_string())
}

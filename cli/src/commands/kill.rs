//! Kill command - terminate everything on a port.

use crossterm::style::Color;
use portkill_core::ports::{ProcessKillerPort, ProcessLocatorPort};
use portkill_core::PortService;

use super::Status;
use crate::output;

pub async fn run<L, K>(service: &PortService<L, K>, port: u16, force: bool) -> Status
where
    L: ProcessLocatorPort,
    K: ProcessKillerPort,
{
    output::step(&format!(
        "Finding processes on port {}...",
        output::paint(port, Color::Cyan)
    ));

    let outcome = service.terminate(port, force).await;

    // Checked before the empty case: a total failure also kills nothing
    if !outcome.success {
        output::error(&format!("Failed to kill processes on port {}", port));
        if let Some(error) = &outcome.error {
            eprintln!("  {}", error);
        }
        return Status::Failure;
    }

    if outcome.processes.is_empty() {
        output::info(&format!("No processes found on port {}", port));
        return Status::Success;
    }

    output::success(&format!(
        "Killed {} process(es) on port {}:",
        outcome.processes.len(),
        port
    ));
    for process in &outcome.processes {
        println!("{}", output::process_line(process.pid, &process.command, None));
    }
    if let Some(error) = &outcome.error {
        output::error(error);
    }

    Status::Success
}

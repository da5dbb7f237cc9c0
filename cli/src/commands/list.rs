//! List command - show the processes on a port.

use crossterm::style::Color;
use portkill_core::ports::{ProcessKillerPort, ProcessLocatorPort};
use portkill_core::PortService;

use super::Status;
use crate::output;

pub async fn run<L, K>(service: &PortService<L, K>, port: u16) -> Status
where
    L: ProcessLocatorPort,
    K: ProcessKillerPort,
{
    let processes = service.locate(port).await;

    if processes.is_empty() {
        output::info(&format!("No processes running on port {}", port));
        return Status::Success;
    }

    output::info(&format!(
        "Processes on port {}:",
        output::paint(port, Color::Cyan)
    ));
    for process in &processes {
        println!(
            "{}",
            output::process_line(process.pid, &process.command, process.user.as_deref())
        );
    }

    Status::Success
}

//! Find command - list free ports.

use crossterm::style::Color;
use portkill_core::ports::{ProcessKillerPort, ProcessLocatorPort};
use portkill_core::PortService;

use super::Status;
use crate::output;

/// Report up to `count` free ports from `start_port`. Finding none is not a failure.
pub async fn run<L, K>(service: &PortService<L, K>, start_port: u16, count: usize) -> Status
where
    L: ProcessLocatorPort,
    K: ProcessKillerPort,
{
    let available = service.scan(start_port, count).await;

    if available.is_empty() {
        output::error(&format!(
            "No available ports found starting from {}",
            start_port
        ));
        return Status::Success;
    }

    output::success(&format!("Available ports starting from {}:", start_port));
    for port in available {
        println!("  {}", output::paint(port, Color::Cyan));
    }

    Status::Success
}

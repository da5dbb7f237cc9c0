//! Check command - report whether a port is taken.

use crossterm::style::Color;
use portkill_core::ports::{ProcessKillerPort, ProcessLocatorPort};
use portkill_core::PortService;

use super::Status;
use crate::output;

/// [`Status::Failure`] means "in use", [`Status::Success`] means "available".
pub async fn run<L, K>(service: &PortService<L, K>, port: u16) -> Status
where
    L: ProcessLocatorPort,
    K: ProcessKillerPort,
{
    let processes = service.locate(port).await;

    if processes.is_empty() {
        output::success(&format!(
            "Port {} is {}",
            port,
            output::paint("AVAILABLE", Color::Green)
        ));
        return Status::Success;
    }

    output::info(&format!(
        "Port {} is {}",
        port,
        output::paint("IN USE", Color::Red)
    ));
    for process in &processes {
        println!("{}", output::process_line(process.pid, &process.command, None));
    }

    Status::Failure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::FakeHost;
    use portkill_core::ProcessRecord;

    #[tokio::test]
    async fn test_free_port_is_available() {
        let fake = FakeHost::default();
        assert_eq!(run(&fake.service(), 3000).await, Status::Success);
    }

    #[tokio::test]
    async fn test_busy_port_fails_with_single_lookup() {
        let fake = FakeHost::default();
        fake.bind(3000, ProcessRecord::new(4242, "node"));

        assert_eq!(run(&fake.service(), 3000).await, Status::Failure);
        assert_eq!(fake.lookups(), 1);
        assert!(fake.signals().is_empty());
    }
}

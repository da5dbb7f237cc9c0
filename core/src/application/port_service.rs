//! Locate, terminate and scan use cases.

use tracing::{debug, info, warn};

use crate::adapters::{Platform, PlatformKiller, PlatformLocator, SystemRunner};
use crate::config::Settings;
use crate::domain::{KillOutcome, KillSignal, Lookup, ProcessRecord};
use crate::ports::{ProcessKillerPort, ProcessLocatorPort};

/// Scanning stops before this port; it is never queried.
pub const SCAN_CEILING: u16 = u16::MAX;

/// Application service for port operations.
///
/// Every operation is a fresh query against the OS: nothing is cached and
/// nothing here returns an error. Ports are assumed to be validated by the
/// caller (1..=65535).
pub struct PortService<L: ProcessLocatorPort, K: ProcessKillerPort> {
    locator: L,
    killer: K,
}

impl<L: ProcessLocatorPort, K: ProcessKillerPort> PortService<L, K> {
    /// Create a new port service with the given locator and killer.
    pub fn new(locator: L, killer: K) -> Self {
        Self { locator, killer }
    }

    /// Query `port`, keeping the distinction between empty and failed.
    pub async fn lookup(&self, port: u16) -> Lookup {
        let lookup = self.locator.locate(port).await;
        if let Lookup::Failed(reason) = &lookup {
            debug!(port = port, reason = %reason, "Lookup failed, treating port as free");
        }
        lookup
    }

    /// Processes bound to `port`; empty when none are, or when the OS could not say.
    pub async fn locate(&self, port: u16) -> Vec<ProcessRecord> {
        self.lookup(port).await.into_records()
    }

    /// Whether any process holds `port`.
    pub async fn is_in_use(&self, port: u16) -> bool {
        !self.locate(port).await.is_empty()
    }

    /// Signal every process on `port`.
    ///
    /// Each process is attempted independently. With nothing on the port the
    /// outcome is still a success, carrying a "No processes found" note.
    pub async fn terminate(&self, port: u16, force: bool) -> KillOutcome {
        let targets = self.locate(port).await;
        if targets.is_empty() {
            debug!(port = port, "Nothing to terminate");
            return KillOutcome::nothing_found(port);
        }

        let signal = KillSignal::from_force(force);
        let mut killed = Vec::with_capacity(targets.len());
        let mut failures = Vec::new();

        for process in targets {
            match self.killer.kill(process.pid, signal).await {
                Ok(()) => {
                    info!(
                        port = port,
                        pid = process.pid,
                        command = %process.command,
                        signal = %signal,
                        "Terminated process"
                    );
                    killed.push(process);
                }
                Err(e) => {
                    warn!(port = port, pid = process.pid, error = %e, "Failed to terminate process");
                    failures.push(format!("Failed to kill PID {}: {}", process.pid, e));
                }
            }
        }

        KillOutcome::from_attempts(port, killed, failures)
    }

    /// Find up to `count` free ports, ascending from `start_port`.
    ///
    /// Ports are queried one at a time; [`SCAN_CEILING`] is never queried.
    pub async fn scan(&self, start_port: u16, count: usize) -> Vec<u16> {
        let mut available = Vec::new();
        let mut port = start_port;

        while available.len() < count && port < SCAN_CEILING {
            if !self.is_in_use(port).await {
                available.push(port);
            }
            port += 1;
        }

        debug!(
            start_port = start_port,
            found = available.len(),
            "Port scan finished"
        );
        available
    }
}

impl PortService<PlatformLocator, PlatformKiller> {
    /// Create a service backed by the current platform's tools.
    pub fn for_current_platform(settings: &Settings) -> Self {
        let platform = Platform::current();
        let runner = SystemRunner::with_timeout(settings.command_timeout());
        debug!(platform = %platform, timeout = ?settings.command_timeout(), "Selecting platform tools");

        let locator = PlatformLocator::for_platform(platform, runner.clone());
        #[cfg(unix)]
        let killer = PlatformKiller::new();
        #[cfg(windows)]
        let killer = PlatformKiller::new(runner);

        Self::new(locator, killer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use parking_lot::Mutex;
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;

    /// Shared fake process table.
    #[derive(Default)]
    struct FakeHost {
        bound: HashMap<u16, Vec<ProcessRecord>>,
        failing_ports: HashSet<u16>,
        protected_pids: HashSet<u32>,
        queries: Vec<u16>,
        signals: Vec<(u32, KillSignal)>,
    }

    #[derive(Clone, Default)]
    struct Fake {
        host: Arc<Mutex<FakeHost>>,
    }

    impl Fake {
        fn bind(&self, port: u16, record: ProcessRecord) {
            self.host.lock().bound.entry(port).or_default().push(record);
        }

        fn fail_port(&self, port: u16) {
            self.host.lock().failing_ports.insert(port);
        }

        fn protect(&self, pid: u32) {
            self.host.lock().protected_pids.insert(pid);
        }

        fn queries(&self) -> Vec<u16> {
            self.host.lock().queries.clone()
        }

        fn signals(&self) -> Vec<(u32, KillSignal)> {
            self.host.lock().signals.clone()
        }

        fn service(&self) -> PortService<Fake, Fake> {
            PortService::new(self.clone(), self.clone())
        }
    }

    impl ProcessLocatorPort for Fake {
        async fn locate(&self, port: u16) -> Lookup {
            let mut host = self.host.lock();
            host.queries.push(port);
            if host.failing_ports.contains(&port) {
                return Lookup::Failed("lsof: command not found".to_string());
            }
            Lookup::from_records(host.bound.get(&port).cloned().unwrap_or_default())
        }
    }

    impl ProcessKillerPort for Fake {
        async fn kill(&self, pid: u32, signal: KillSignal) -> Result<()> {
            let mut host = self.host.lock();
            host.signals.push((pid, signal));
            if host.protected_pids.contains(&pid) {
                return Err(Error::PermissionDenied(format!(
                    "not allowed to signal process {}",
                    pid
                )));
            }
            for records in host.bound.values_mut() {
                records.retain(|r| r.pid != pid);
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_free_port() {
        let fake = Fake::default();
        let service = fake.service();

        assert!(service.locate(3000).await.is_empty());
        assert!(!service.is_in_use(3000).await);
        assert_eq!(service.lookup(3000).await, Lookup::Empty);
    }

    #[tokio::test]
    async fn test_terminate_demo_server() {
        let fake = Fake::default();
        fake.bind(9001, ProcessRecord::new(4242, "demo-server"));
        let service = fake.service();

        assert_eq!(
            service.locate(9001).await,
            vec![ProcessRecord::new(4242, "demo-server")]
        );

        let outcome = service.terminate(9001, true).await;
        assert_eq!(
            outcome,
            KillOutcome {
                success: true,
                port: 9001,
                processes: vec![ProcessRecord::new(4242, "demo-server")],
                error: None,
            }
        );
        assert_eq!(fake.signals(), vec![(4242, KillSignal::Force)]);
        assert!(service.locate(9001).await.is_empty());
    }

    #[tokio::test]
    async fn test_terminate_free_port_is_success() {
        let fake = Fake::default();
        let service = fake.service();

        assert!(!service.is_in_use(4000).await);
        let outcome = service.terminate(4000, false).await;
        assert!(outcome.success);
        assert!(outcome.processes.is_empty());
        assert_eq!(
            outcome.error.as_deref(),
            Some("No processes found on port 4000")
        );
        assert!(fake.signals().is_empty());
        assert!(!service.is_in_use(4000).await);
    }

    #[tokio::test]
    async fn test_terminate_partial_failure_continues() {
        let fake = Fake::default();
        fake.bind(8080, ProcessRecord::new(10, "nginx").with_user("root"));
        fake.bind(8080, ProcessRecord::new(11, "nginx"));
        fake.bind(8080, ProcessRecord::new(12, "nginx"));
        fake.protect(10);
        fake.protect(12);
        let service = fake.service();

        let outcome = service.terminate(8080, false).await;
        assert!(outcome.success);
        assert_eq!(outcome.processes, vec![ProcessRecord::new(11, "nginx")]);
        assert!(outcome.is_partial(3));
        assert_eq!(
            outcome.error.as_deref(),
            Some(
                "Failed to kill PID 10: Permission denied: not allowed to signal process 10; \
                 Failed to kill PID 12: Permission denied: not allowed to signal process 12"
            )
        );
        assert_eq!(
            fake.signals(),
            vec![
                (10, KillSignal::Graceful),
                (11, KillSignal::Graceful),
                (12, KillSignal::Graceful),
            ]
        );
    }

    #[tokio::test]
    async fn test_terminate_all_failed() {
        let fake = Fake::default();
        fake.bind(5432, ProcessRecord::new(99, "postgres"));
        fake.protect(99);
        let service = fake.service();

        let outcome = service.terminate(5432, true).await;
        assert!(!outcome.success);
        assert!(outcome.processes.is_empty());
        assert!(outcome.error.unwrap().starts_with("Failed to kill PID 99: "));
    }

    #[tokio::test]
    async fn test_failed_lookup_reads_as_free() {
        let fake = Fake::default();
        fake.bind(3000, ProcessRecord::new(1, "node"));
        fake.fail_port(3000);
        let service = fake.service();

        assert!(service.lookup(3000).await.is_failed());
        assert!(service.locate(3000).await.is_empty());
        assert!(!service.is_in_use(3000).await);
    }

    #[tokio::test]
    async fn test_scan_skips_busy_ports() {
        let fake = Fake::default();
        fake.bind(3000, ProcessRecord::new(1, "node"));
        fake.bind(3002, ProcessRecord::new(2, "vite"));
        let service = fake.service();

        let free = service.scan(3000, 3).await;
        assert_eq!(free, vec![3001, 3003, 3004]);
        assert_eq!(fake.queries(), vec![3000, 3001, 3002, 3003, 3004]);
    }

    #[tokio::test]
    async fn test_scan_never_queries_ceiling() {
        let fake = Fake::default();
        let service = fake.service();

        let free = service.scan(65530, 10).await;
        assert_eq!(free, vec![65530, 65531, 65532, 65533, 65534]);
        assert!(!fake.queries().contains(&65535));

        assert!(service.scan(65535, 1).await.is_empty());
    }

    #[tokio::test]
    async fn test_scan_is_strictly_ascending() {
        let fake = Fake::default();
        for port in [1024, 1025, 1027] {
            fake.bind(port, ProcessRecord::unknown(port as u32));
        }
        let service = fake.service();

        let free = service.scan(1024, 4).await;
        assert_eq!(free, vec![1026, 1028, 1029, 1030]);
        assert!(free.windows(2).all(|w| w[0] < w[1]));
    }
}

//! Result of terminating everything on a port.

use super::ProcessRecord;

/// What happened when the processes on a port were signalled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillOutcome {
    /// True when at least one process was terminated, or none were found.
    pub success: bool,
    /// The targeted port.
    pub port: u16,
    /// Only the processes that were successfully signalled.
    pub processes: Vec<ProcessRecord>,
    /// `"; "`-joined failure messages, or the nothing-found notice.
    pub error: Option<String>,
}

impl KillOutcome {
    /// Outcome for a port nobody holds. Successful, with an explanatory note.
    pub fn nothing_found(port: u16) -> Self {
        Self {
            success: true,
            port,
            processes: Vec::new(),
            error: Some(format!("No processes found on port {}", port)),
        }
    }

    /// Outcome from the terminated records and the per-process failures.
    pub fn from_attempts(port: u16, killed: Vec<ProcessRecord>, failures: Vec<String>) -> Self {
        Self {
            success: !killed.is_empty(),
            port,
            processes: killed,
            error: if failures.is_empty() {
                None
            } else {
                Some(failures.join("; "))
            },
        }
    }

    /// Whether fewer processes were terminated than were targeted.
    pub fn is_partial(&self, targeted: usize) -> bool {
        self.processes.len() < targeted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_found_is_success_with_note() {
        let outcome = KillOutcome::nothing_found(3000);
        assert!(outcome.success);
        assert!(outcome.processes.is_empty());
        assert_eq!(
            outcome.error.as_deref(),
            Some("No processes found on port 3000")
        );
    }

    #[test]
    fn test_from_attempts_joins_failures() {
        let outcome = KillOutcome::from_attempts(
            8080,
            vec![ProcessRecord::new(10, "nginx")],
            vec![
                "Failed to kill PID 11: denied".to_string(),
                "Failed to kill PID 12: gone".to_string(),
            ],
        );
        assert!(outcome.success);
        assert!(outcome.is_partial(3));
        assert_eq!(
            outcome.error.as_deref(),
            Some("Failed to kill PID 11: denied; Failed to kill PID 12: gone")
        );
    }

    #[test]
    fn test_from_attempts_all_failed() {
        let outcome =
            KillOutcome::from_attempts(8080, Vec::new(), vec!["Failed to kill PID 1: x".into()]);
        assert!(!outcome.success);
        assert!(outcome.error.is_some());

        let clean = KillOutcome::from_attempts(8080, vec![ProcessRecord::new(1, "a")], Vec::new());
        assert!(clean.error.is_none());
        assert!(!clean.is_partial(1));
    }
}

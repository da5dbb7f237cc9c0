//! Command implementations.
//!
//! Each command runs against any [`PortService`](portkill_core::PortService)
//! and reports a [`Status`] that `main` turns into the process exit code.

pub mod check;
pub mod find;
pub mod kill;
pub mod list;

use std::process::ExitCode;

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Exit status 0.
    Success,
    /// Exit status 1.
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces that the application layer uses
//! to interact with the operating system. Implementations live in `adapters`.

mod killer;
mod locator;
mod runner;

pub use killer::ProcessKillerPort;
pub use locator::ProcessLocatorPort;
pub use runner::CommandRunner;

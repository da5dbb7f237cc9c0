//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter handles communication with the host operating system.

pub mod killer;
pub mod locator;
pub mod platform;
pub mod runner;

// Re-export main types for convenience
pub use killer::{PlatformKiller, WindowsKiller};
pub use locator::{PlatformLocator, UnixLocator, WindowsLocator};
pub use platform::Platform;
pub use runner::SystemRunner;

#[cfg(unix)]
pub use killer::UnixKiller;

//! PortKill Core Library
//!
//! Cross-platform library for finding and killing the processes bound to a
//! network port. Provides functionality to:
//! - Locate the processes holding a port
//! - Terminate them gracefully or forcefully
//! - Scan for free ports
//! - Load user settings
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: Operating system implementations
//! - `application`: Use case services
//!
//! # Platform Support
//! - macOS / Linux: Uses `lsof`, `ps` and `kill(2)`
//! - Windows: Uses `netstat`, `tasklist` and `taskkill`

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod error;

// Re-export domain types (primary API)
pub use domain::{KillOutcome, KillSignal, Lookup, ProcessRecord, UNKNOWN_COMMAND};

// Re-export other commonly used types
pub use adapters::{Platform, PlatformKiller, PlatformLocator, SystemRunner};
pub use application::{PortService, SCAN_CEILING};
pub use config::{ConfigStore, Settings};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

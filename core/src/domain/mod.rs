//! Domain layer - Pure data models.
//!
//! This module contains domain entities that represent core business concepts.
//! These types have no I/O dependencies and can be tested in isolation.

mod lookup;
mod outcome;
mod process;

// Re-export all domain types
pub use lookup::Lookup;
pub use outcome::KillOutcome;
pub use process::{KillSignal, ProcessRecord, UNKNOWN_COMMAND};

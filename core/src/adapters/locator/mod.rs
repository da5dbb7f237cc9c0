//! Process locator adapters.
//!
//! Platform-specific implementations of "who holds this port". Both
//! strategies are compiled on every host; [`PlatformLocator`] picks one once.

mod unix;
mod utils;
mod windows;

pub use unix::UnixLocator;
pub use windows::WindowsLocator;

use crate::domain::Lookup;
use crate::ports::{CommandRunner, ProcessLocatorPort};

use super::{Platform, SystemRunner};

/// The locator strategy selected for a platform.
pub enum PlatformLocator<R = SystemRunner> {
    Unix(UnixLocator<R>),
    Windows(WindowsLocator<R>),
}

impl<R: CommandRunner> PlatformLocator<R> {
    /// Create the locator for `platform`, running commands through `runner`.
    pub fn for_platform(platform: Platform, runner: R) -> Self {
        match platform {
            Platform::Unix => PlatformLocator::Unix(UnixLocator::new(runner)),
            Platform::Windows => PlatformLocator::Windows(WindowsLocator::new(runner)),
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            PlatformLocator::Unix(_) => Platform::Unix,
            PlatformLocator::Windows(_) => Platform::Windows,
        }
    }
}

impl PlatformLocator {
    /// Create a locator for the current platform.
    pub fn new() -> Self {
        Self::for_platform(Platform::current(), SystemRunner::new())
    }
}

impl Default for PlatformLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> ProcessLocatorPort for PlatformLocator<R> {
    async fn locate(&self, port: u16) -> Lookup {
        match self {
            PlatformLocator::Unix(locator) => locator.locate(port).await,
            PlatformLocator::Windows(locator) => locator.locate(port).await,
        }
    }
}

//! Platform abstraction layer
//!
//! This module isolates the external collaborators of the configuration core:
//! the flash file store the config document lives on, and the captive-portal
//! library that renders the setup form. Platform-specific code stays behind
//! the traits defined here.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{FsError, PlatformError, Result};
pub use traits::{ConfigPortal, FieldHandle, FileHandle, FileSystem, OpenMode, PortalField};

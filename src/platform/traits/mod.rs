//! Platform abstraction traits
//!
//! This module defines the interfaces the configuration core needs from its
//! external collaborators.

pub mod fs;
pub mod portal;

// Re-export trait interfaces
pub use fs::{FileHandle, FileSystem, OpenMode};
pub use portal::{ConfigPortal, FieldHandle, PortalField};

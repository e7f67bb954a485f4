//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// Platform implementations map their backend-specific errors to these
/// variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// File store operation failed
    Fs(FsError),
}

/// File-store specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// Mounting the file system failed
    MountFailed,
    /// File system accessed before a successful mount
    NotMounted,
    /// File does not exist
    NotFound,
    /// Opening a file failed
    OpenFailed,
    /// Read operation failed
    ReadFailed,
    /// Write operation failed
    WriteFailed,
}

impl From<FsError> for PlatformError {
    fn from(err: FsError) -> Self {
        PlatformError::Fs(err)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Fs(e) => write!(f, "file store error: {:?}", e),
        }
    }
}

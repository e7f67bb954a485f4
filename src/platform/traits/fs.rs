//! File store interface traits
//!
//! This module defines the flash file system interface that platform
//! implementations must provide. The configuration core uses it for a single
//! file: the JSON config document.
//!
//! # File Store Characteristics
//!
//! - Operations are blocking; a stalled file store stalls the device loop
//!   (there are no timeouts, per the single-threaded control model)
//! - `mount` must succeed before `exists`/`open` are meaningful
//! - Opening a file for writing truncates it

use crate::platform::Result;

/// File open mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Open an existing file for reading
    Read,
    /// Create or truncate a file for writing
    Write,
}

/// Flash file system interface
///
/// Platform implementations must provide this interface for config file
/// access.
pub trait FileSystem {
    /// Stream type returned by [`open`](Self::open)
    type File: FileHandle;

    /// Mount the file system
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Fs(FsError::MountFailed)` if the backing store
    /// cannot be mounted. The caller proceeds without persistence.
    fn mount(&mut self) -> Result<()>;

    /// Check whether a file exists
    ///
    /// Returns false on an unmounted file system.
    fn exists(&self, path: &str) -> bool;

    /// Open a file
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Fs(FsError::NotMounted)` before a successful
    /// mount, `NotFound` when reading a missing file, `OpenFailed` otherwise.
    fn open(&mut self, path: &str, mode: OpenMode) -> Result<Self::File>;
}

/// An open file stream
pub trait FileHandle {
    /// Current file size in bytes
    fn size(&self) -> usize;

    /// Read up to `buf.len()` bytes, returning the count read
    ///
    /// Returns `Ok(0)` at end of file.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Fs(FsError::ReadFailed)` if the read fails or
    /// the file was opened for writing.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Write `data`, returning the count written
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Fs(FsError::WriteFailed)` if the write fails
    /// or the file was opened for reading.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Close the stream
    ///
    /// Dropping the handle closes it as well; the explicit form lets callers
    /// observe close failures.
    fn close(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

//! Mock file store for testing
//!
//! Provides an in-memory file system simulation for unit tests.

use crate::platform::error::FsError;
use crate::platform::traits::{FileHandle, FileSystem, OpenMode};
use crate::platform::Result;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

/// In-memory file system
///
/// Simulates the device's flash file store for testing. Supports:
/// - Mount gating (access before `mount` fails, like an unmounted flash FS)
/// - Mount and open fault injection for error-path testing
/// - Direct content seeding and inspection
///
/// Cloning yields a handle that shares the same backing files but starts
/// unmounted, simulating a reboot against the same flash contents.
///
/// # Example
///
/// ```
/// use captive_config::platform::mock::MockFileSystem;
/// use captive_config::platform::{FileHandle, FileSystem, OpenMode};
///
/// let mut fs = MockFileSystem::new();
/// fs.mount().unwrap();
///
/// let mut file = fs.open("/config.json", OpenMode::Write).unwrap();
/// file.write(b"{}").unwrap();
/// file.close().unwrap();
///
/// assert!(fs.exists("/config.json"));
/// assert_eq!(fs.contents("/config.json").unwrap(), b"{}");
/// ```
#[derive(Debug)]
pub struct MockFileSystem {
    /// Backing files, shared between clones
    files: Rc<RefCell<BTreeMap<String, Vec<u8>>>>,
    mounted: bool,
    fail_mount: bool,
    fail_open: bool,
}

impl MockFileSystem {
    /// Create an empty mock file system
    pub fn new() -> Self {
        Self {
            files: Rc::new(RefCell::new(BTreeMap::new())),
            mounted: false,
            fail_mount: false,
            fail_open: false,
        }
    }

    /// Seed a file, bypassing the mount gate (for test setup)
    pub fn insert_file(&self, path: &str, contents: &[u8]) {
        self.files
            .borrow_mut()
            .insert(String::from(path), Vec::from(contents));
    }

    /// File contents, bypassing the mount gate (for test verification)
    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    /// Make every subsequent `mount` fail
    pub fn set_fail_mount(&mut self, fail: bool) {
        self.fail_mount = fail;
    }

    /// Make every subsequent `open` fail
    pub fn set_fail_open(&mut self, fail: bool) {
        self.fail_open = fail;
    }

    /// Whether `mount` has succeeded on this handle
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Clone for MockFileSystem {
    /// Share the backing files; the clone starts unmounted, like a fresh boot
    fn clone(&self) -> Self {
        Self {
            files: Rc::clone(&self.files),
            mounted: false,
            fail_mount: self.fail_mount,
            fail_open: self.fail_open,
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    type File = MockFile;

    fn mount(&mut self) -> Result<()> {
        if self.fail_mount {
            return Err(FsError::MountFailed.into());
        }
        self.mounted = true;
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.mounted && self.files.borrow().contains_key(path)
    }

    fn open(&mut self, path: &str, mode: OpenMode) -> Result<Self::File> {
        if !self.mounted {
            return Err(FsError::NotMounted.into());
        }
        if self.fail_open {
            return Err(FsError::OpenFailed.into());
        }
        let data = match mode {
            OpenMode::Read => match self.files.borrow().get(path) {
                Some(data) => data.clone(),
                None => return Err(FsError::NotFound.into()),
            },
            OpenMode::Write => {
                // Opening for write truncates
                self.files.borrow_mut().insert(String::from(path), Vec::new());
                Vec::new()
            }
        };
        Ok(MockFile {
            files: Rc::clone(&self.files),
            path: String::from(path),
            mode,
            data,
            pos: 0,
        })
    }
}

/// An open mock file
///
/// Reads serve a snapshot taken at open time; writes go straight through to
/// the backing map, so dropping the handle without `close` loses nothing.
#[derive(Debug)]
pub struct MockFile {
    files: Rc<RefCell<BTreeMap<String, Vec<u8>>>>,
    path: String,
    mode: OpenMode,
    data: Vec<u8>,
    pos: usize,
}

impl FileHandle for MockFile {
    fn size(&self) -> usize {
        match self.mode {
            OpenMode::Read => self.data.len(),
            OpenMode::Write => self
                .files
                .borrow()
                .get(&self.path)
                .map(Vec::len)
                .unwrap_or(0),
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.mode != OpenMode::Read {
            return Err(FsError::ReadFailed.into());
        }
        let remaining = self.data.len() - self.pos;
        let count = core::cmp::min(buf.len(), remaining);
        buf[..count].copy_from_slice(&self.data[self.pos..self.pos + count]);
        self.pos += count;
        Ok(count)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.mode != OpenMode::Write {
            return Err(FsError::WriteFailed.into());
        }
        let mut files = self.files.borrow_mut();
        match files.get_mut(&self.path) {
            Some(contents) => contents.extend_from_slice(data),
            None => {
                files.insert(self.path.clone(), Vec::from(data));
            }
        }
        Ok(data.len())
    }
}

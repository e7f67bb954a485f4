//! Mock collaborator implementations for testing
//!
//! This module provides in-memory stand-ins for the external collaborators so
//! the configuration cycle can be exercised without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

mod fs;
mod portal;

pub use fs::{MockFile, MockFileSystem};
pub use portal::MockPortal;

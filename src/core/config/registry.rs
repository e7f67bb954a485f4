//! Parameter registry for device configuration
//!
//! This module provides the ordered, growable collection of configuration
//! parameters. Lookup is by id; the value accessors are lenient (missing ids
//! read as empty/zero) so boot code never has to branch on registration
//! state.

use super::parameter::ConfigParameter;
use alloc::vec::Vec;
use core::fmt;

/// Capacity growth step when the parameter list is full
pub const CAPACITY_STEP: usize = 10;

/// Parameter registry error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Parameter id is empty
    EmptyId,
    /// A parameter with this id is already registered
    DuplicateId,
    /// Growing the parameter list failed; the add was dropped
    OutOfMemory,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::EmptyId => write!(f, "parameter id is empty"),
            RegistryError::DuplicateId => write!(f, "parameter id already registered"),
            RegistryError::OutOfMemory => write!(f, "parameter list allocation failed"),
        }
    }
}

/// Ordered collection of owned configuration parameters
///
/// Parameters are kept in registration order and their ids are unique.
/// Capacity grows by [`CAPACITY_STEP`] when exhausted; a failed growth drops
/// the add (reported through [`RegistryError::OutOfMemory`]) and leaves the
/// registered parameters untouched.
#[derive(Debug)]
pub struct ParameterRegistry {
    params: Vec<ConfigParameter>,
}

impl ParameterRegistry {
    /// Create an empty registry with one capacity step preallocated
    pub fn new() -> Self {
        Self {
            params: Vec::with_capacity(CAPACITY_STEP),
        }
    }

    /// Register a new parameter
    pub fn add(
        &mut self,
        id: &str,
        label: &str,
        default_value: &str,
        max_len: usize,
    ) -> Result<(), RegistryError> {
        self.add_param(ConfigParameter::new(id, label, default_value, max_len))
    }

    /// Register an already-constructed parameter
    pub fn add_param(&mut self, param: ConfigParameter) -> Result<(), RegistryError> {
        if param.id().is_empty() {
            return Err(RegistryError::EmptyId);
        }
        if self.find(param.id()).is_some() {
            crate::log_warn!("parameter {} already registered", param.id());
            return Err(RegistryError::DuplicateId);
        }
        if self.params.len() == self.params.capacity() {
            if self.params.try_reserve_exact(CAPACITY_STEP).is_err() {
                crate::log_error!("failed to grow parameter list, {} not added", param.id());
                return Err(RegistryError::OutOfMemory);
            }
            crate::log_debug!("parameter capacity grown to {}", self.params.capacity());
        }
        crate::log_debug!("adding parameter {}", param.id());
        self.params.push(param);
        Ok(())
    }

    /// Parameter by id
    ///
    /// Linear scan in registration order, exact full-string comparison.
    pub fn find(&self, id: &str) -> Option<&ConfigParameter> {
        self.params.iter().find(|p| p.id() == id)
    }

    /// Mutable parameter by id
    pub fn find_mut(&mut self, id: &str) -> Option<&mut ConfigParameter> {
        self.params.iter_mut().find(|p| p.id() == id)
    }

    /// Parameter value, or `""` when the id is not registered
    pub fn value(&self, id: &str) -> &str {
        self.find(id).map(|p| p.value()).unwrap_or("")
    }

    /// Parameter value parsed as a base-10 integer
    ///
    /// Lenient semantics: optional leading whitespace and sign, longest digit
    /// prefix, saturating at the i32 range. Non-numeric or missing values
    /// parse to 0.
    pub fn int_value(&self, id: &str) -> i32 {
        parse_int(self.value(id))
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate parameters in registration order
    pub fn iter(&self) -> core::slice::Iter<'_, ConfigParameter> {
        self.params.iter()
    }

    /// Iterate parameters mutably in registration order
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, ConfigParameter> {
        self.params.iter_mut()
    }
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Base-10 integer parse with C `atoi` semantics
fn parse_int(value: &str) -> i32 {
    let rest = value.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let mut magnitude: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        magnitude = magnitude * 10 + i64::from(byte - b'0');
        // One past i32::MAX still lets -2147483648 through below
        if magnitude > i64::from(i32::MAX) + 1 {
            magnitude = i64::from(i32::MAX) + 1;
            break;
        }
    }
    if negative {
        i64::max(-magnitude, i64::from(i32::MIN)) as i32
    } else {
        i64::min(magnitude, i64::from(i32::MAX)) as i32
    }
}

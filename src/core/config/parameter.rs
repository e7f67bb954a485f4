//! A single named configuration parameter

use crate::platform::traits::portal::{truncate_str, FieldHandle, PortalField};
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

/// A named, length-bounded string configuration value
///
/// The id doubles as the JSON key in the config file and as the portal field
/// name; it is fixed at construction and unique within a registry. Values
/// assigned through [`set_value`](Self::set_value) are silently truncated to
/// `max_len` bytes; that is the contract, not an error.
#[derive(Debug)]
pub struct ConfigParameter {
    id: String,
    label: String,
    value: String,
    max_len: usize,
    custom_markup: String,
    /// Lazily created portal binding, see [`portal_field`](Self::portal_field)
    field: Option<FieldHandle>,
}

impl ConfigParameter {
    /// Create a parameter with an empty markup fragment
    ///
    /// The default value is stored truncated to `max_len` bytes.
    pub fn new(id: &str, label: &str, default_value: &str, max_len: usize) -> Self {
        Self::with_markup(id, label, default_value, max_len, "")
    }

    /// Create a parameter carrying a raw markup fragment for the portal field
    pub fn with_markup(
        id: &str,
        label: &str,
        default_value: &str,
        max_len: usize,
        custom_markup: &str,
    ) -> Self {
        Self {
            id: String::from(id),
            label: String::from(label),
            value: String::from(truncate_str(default_value, max_len)),
            max_len,
            custom_markup: String::from(custom_markup),
            field: None,
        }
    }

    /// Parameter identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable label shown in the portal UI
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Maximum value length in bytes
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Raw markup fragment passed through to the portal field
    pub fn custom_markup(&self) -> &str {
        &self.custom_markup
    }

    /// Overwrite the value, truncating silently to the length bound
    ///
    /// A bound portal field is NOT refreshed: it keeps mirroring the value it
    /// was created with until [`pull_from_portal`](Self::pull_from_portal)
    /// runs the other way.
    pub fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(truncate_str(value, self.max_len));
    }

    /// The portal field bound to this parameter
    ///
    /// Created on first call from the parameter's current id, label, value,
    /// length bound and markup; later calls return the same handle without
    /// refreshing it.
    pub fn portal_field(&mut self) -> FieldHandle {
        if let Some(field) = &self.field {
            return Rc::clone(field);
        }
        let field = Rc::new(RefCell::new(PortalField::new(
            &self.id,
            &self.label,
            &self.value,
            self.max_len,
            &self.custom_markup,
        )));
        self.field = Some(Rc::clone(&field));
        field
    }

    /// Overwrite the value from the bound portal field
    ///
    /// Binds the field first when the parameter was never published, in which
    /// case the value is unchanged.
    pub fn pull_from_portal(&mut self) {
        let field = self.portal_field();
        let edited = String::from(field.borrow().value());
        self.set_value(&edited);
    }
}

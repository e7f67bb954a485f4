//! Captive portal interface
//!
//! The captive portal is an external library component running its own HTTP
//! and DNS servers. This module defines the narrow surface the configuration
//! core needs from it, together with the editable-field object exchanged
//! across that boundary.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

/// Shared handle to a portal field
///
/// A field is owned by its parameter and shared with the portal. `Rc`, not
/// `Arc`: the whole configuration cycle runs on one control thread.
pub type FieldHandle = Rc<RefCell<PortalField>>;

/// Longest prefix of `value` that fits in `max_len` bytes
///
/// Backs up to a character boundary so the result stays valid UTF-8.
pub(crate) fn truncate_str(value: &str, max_len: usize) -> &str {
    if value.len() <= max_len {
        return value;
    }
    let mut end = max_len;
    while end > 0 && !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// An editable field published on the portal's setup form
///
/// Mirrors the owning parameter's id, label, value, length bound and custom
/// markup as of the moment the field was created. The portal overwrites
/// `value` when the user submits the form; the parameter reads it back on the
/// save trigger.
#[derive(Debug, Clone)]
pub struct PortalField {
    id: String,
    label: String,
    value: String,
    max_len: usize,
    custom_markup: String,
}

impl PortalField {
    /// Create a field snapshot
    pub fn new(id: &str, label: &str, value: &str, max_len: usize, custom_markup: &str) -> Self {
        Self {
            id: String::from(id),
            label: String::from(label),
            value: String::from(truncate_str(value, max_len)),
            max_len,
            custom_markup: String::from(custom_markup),
        }
    }

    /// Field name, equal to the owning parameter's id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Label shown next to the field in the setup form
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current field content
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Maximum content length in bytes
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Raw markup fragment rendered with the field, may be empty
    pub fn custom_markup(&self) -> &str {
        &self.custom_markup
    }

    /// Overwrite the field content, truncating silently to the length bound
    pub fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(truncate_str(value, self.max_len));
    }
}

/// Captive portal interface
///
/// The portal owns the user interaction; the configuration core only hands it
/// fields to render and a callback to fire when the user submits the form.
pub trait ConfigPortal {
    /// Publish an editable field on the setup form
    fn add_parameter(&mut self, field: FieldHandle);

    /// Register the handler invoked once per user-submitted form
    ///
    /// The handler runs synchronously inside the portal's own event delivery.
    fn set_save_handler(&mut self, handler: Box<dyn FnMut()>);
}

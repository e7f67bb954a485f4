//! Mock captive portal for testing
//!
//! Stands in for the external portal library: records the fields published to
//! the setup form and lets tests play the user's part (edit a field, submit
//! the form).

use crate::platform::traits::{ConfigPortal, FieldHandle};
use alloc::boxed::Box;
use alloc::vec::Vec;

/// In-memory captive portal
///
/// # Example
///
/// ```
/// use captive_config::platform::mock::MockPortal;
/// use captive_config::platform::ConfigPortal;
///
/// let mut portal = MockPortal::new();
/// portal.set_save_handler(Box::new(|| {}));
/// assert!(portal.has_save_handler());
/// ```
#[derive(Default)]
pub struct MockPortal {
    fields: Vec<FieldHandle>,
    save_handler: Option<Box<dyn FnMut()>>,
}

impl MockPortal {
    /// Create a portal with no fields and no save handler
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            save_handler: None,
        }
    }

    /// Number of published fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Published field by name
    pub fn field(&self, id: &str) -> Option<&FieldHandle> {
        self.fields.iter().find(|f| f.borrow().id() == id)
    }

    /// Simulate the user typing a value into a form field
    ///
    /// Returns false when no field with that id was published.
    pub fn enter_value(&mut self, id: &str, value: &str) -> bool {
        match self.field(id) {
            Some(field) => {
                field.borrow_mut().set_value(value);
                true
            }
            None => false,
        }
    }

    /// Simulate the user submitting the setup form
    ///
    /// Invokes the registered save handler synchronously, exactly as the
    /// portal library does from its own request-handling path.
    pub fn submit(&mut self) {
        if let Some(handler) = self.save_handler.as_mut() {
            handler();
        }
    }

    /// Whether a save handler has been registered
    pub fn has_save_handler(&self) -> bool {
        self.save_handler.is_some()
    }
}

impl ConfigPortal for MockPortal {
    fn add_parameter(&mut self, field: FieldHandle) {
        self.fields.push(field);
    }

    fn set_save_handler(&mut self, handler: Box<dyn FnMut()>) {
        self.save_handler = Some(handler);
    }
}

//! Configuration manager facade
//!
//! Ties the registry, the persistence bridge and the captive portal together
//! and owns the save-trigger wiring.

use super::parameter::ConfigParameter;
use super::registry::{ParameterRegistry, RegistryError};
use super::store::ConfigStore;
use crate::platform::traits::{ConfigPortal, FileSystem};
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

/// Device configuration manager
///
/// Owns the parameter registry and its persistence bridge. Both sit behind
/// `Rc<RefCell<...>>` so the save-trigger closure handed to the portal can
/// reach them without a process-wide singleton; everything runs on the single
/// control thread.
///
/// # Example
///
/// ```no_run
/// use captive_config::core::config::ConfigManager;
/// use captive_config::platform::mock::{MockFileSystem, MockPortal};
///
/// let mut portal = MockPortal::new();
/// let config = ConfigManager::new(MockFileSystem::new());
/// config.add("ssid", "SSID", "default-ssid", 32).unwrap();
/// config.add("port", "Port", "8080", 6).unwrap();
/// config.init(&mut portal);
///
/// let ssid = config.value("ssid");
/// let port = config.int_value("port");
/// ```
pub struct ConfigManager<F: FileSystem> {
    registry: Rc<RefCell<ParameterRegistry>>,
    store: Rc<RefCell<ConfigStore<F>>>,
}

impl<F: FileSystem> ConfigManager<F> {
    /// Create a manager persisting to the default config path
    pub fn new(fs: F) -> Self {
        Self {
            registry: Rc::new(RefCell::new(ParameterRegistry::new())),
            store: Rc::new(RefCell::new(ConfigStore::new(fs))),
        }
    }

    /// Create a manager persisting to a custom config path
    pub fn with_path(fs: F, path: &str) -> Self {
        Self {
            registry: Rc::new(RefCell::new(ParameterRegistry::new())),
            store: Rc::new(RefCell::new(ConfigStore::with_path(fs, path))),
        }
    }

    /// Register a new parameter
    ///
    /// Register the full set before calling [`init`](Self::init): values in
    /// the config file are applied only to parameters registered at load
    /// time.
    pub fn add(
        &self,
        id: &str,
        label: &str,
        default_value: &str,
        max_len: usize,
    ) -> Result<(), RegistryError> {
        self.registry
            .borrow_mut()
            .add(id, label, default_value, max_len)
    }

    /// Register an already-constructed parameter
    pub fn add_param(&self, param: ConfigParameter) -> Result<(), RegistryError> {
        self.registry.borrow_mut().add_param(param)
    }

    /// Parameter value, or `""` when the id is not registered
    pub fn value(&self, id: &str) -> String {
        String::from(self.registry.borrow().value(id))
    }

    /// Parameter value parsed as a base-10 integer
    ///
    /// Non-numeric or missing values parse to 0.
    pub fn int_value(&self, id: &str) -> i32 {
        self.registry.borrow().int_value(id)
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Whether no parameters are registered
    pub fn is_empty(&self) -> bool {
        self.registry.borrow().is_empty()
    }

    /// Load saved values from the config file
    ///
    /// Called by [`init`](Self::init); exposed for setups without a portal.
    pub fn load(&self) {
        self.store
            .borrow_mut()
            .load(&mut self.registry.borrow_mut());
    }

    /// Pull portal edits into the registry and persist it
    pub fn save(&self) {
        self.store
            .borrow_mut()
            .save(&mut self.registry.borrow_mut());
    }

    /// Wire the configuration into the captive portal
    ///
    /// Loads saved values, publishes every registered parameter as an
    /// editable field, and registers the save trigger. On user submission the
    /// portal invokes the trigger from its own event delivery; edited field
    /// values are pulled back into the parameters and the registry is
    /// rewritten to the config file.
    pub fn init<P: ConfigPortal>(&self, portal: &mut P)
    where
        F: 'static,
    {
        self.load();
        for param in self.registry.borrow_mut().iter_mut() {
            portal.add_parameter(param.portal_field());
        }
        let registry = Rc::clone(&self.registry);
        let store = Rc::clone(&self.store);
        portal.set_save_handler(Box::new(move || {
            store.borrow_mut().save(&mut registry.borrow_mut());
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockFileSystem, MockPortal};

    fn manager_with_defaults(fs: MockFileSystem) -> ConfigManager<MockFileSystem> {
        let config = ConfigManager::new(fs);
        config.add("ssid", "SSID", "default-ssid", 32).unwrap();
        config.add("port", "Port", "8080", 6).unwrap();
        config
    }

    #[test]
    fn test_init_publishes_every_parameter() {
        let mut portal = MockPortal::new();
        let config = manager_with_defaults(MockFileSystem::new());
        config.init(&mut portal);

        assert_eq!(portal.field_count(), 2);
        assert!(portal.has_save_handler());
        let field = portal.field("ssid").unwrap();
        assert_eq!(field.borrow().value(), "default-ssid");
        assert_eq!(field.borrow().label(), "SSID");
        assert_eq!(field.borrow().max_len(), 32);
    }

    #[test]
    fn test_init_publishes_loaded_values() {
        let fs = MockFileSystem::new();
        fs.insert_file("/config.json", br#"{"ssid":"MyWiFi"}"#);

        let mut portal = MockPortal::new();
        let config = manager_with_defaults(fs);
        config.init(&mut portal);

        // The field snapshot is taken after the load pass
        assert_eq!(portal.field("ssid").unwrap().borrow().value(), "MyWiFi");
        assert_eq!(config.value("ssid"), "MyWiFi");
    }

    #[test]
    fn test_submit_persists_edited_values() {
        let fs = MockFileSystem::new();
        let mut portal = MockPortal::new();
        let config = manager_with_defaults(fs.clone());
        config.init(&mut portal);

        assert!(portal.enter_value("ssid", "MyWiFi"));
        portal.submit();

        assert_eq!(config.value("ssid"), "MyWiFi");
        let written = fs.contents("/config.json").unwrap();
        let document: serde_json::Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(document["ssid"], "MyWiFi");
        assert_eq!(document["port"], "8080");
    }

    #[test]
    fn test_save_without_portal() {
        let fs = MockFileSystem::new();
        let config = manager_with_defaults(fs.clone());
        config.save();

        let written = fs.contents("/config.json").unwrap();
        let document: serde_json::Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(document["ssid"], "default-ssid");
    }

    #[test]
    fn test_accessor_fallbacks() {
        let config = manager_with_defaults(MockFileSystem::new());
        assert_eq!(config.value("missing"), "");
        assert_eq!(config.int_value("missing"), 0);
        assert_eq!(config.len(), 2);
        assert!(!config.is_empty());
    }

    #[test]
    fn test_mount_failure_still_allows_editing() {
        let mut fs = MockFileSystem::new();
        fs.set_fail_mount(true);

        let mut portal = MockPortal::new();
        let config = manager_with_defaults(fs.clone());
        config.init(&mut portal);

        // Defaults stand and the portal still carries the fields
        assert_eq!(config.value("ssid"), "default-ssid");
        assert_eq!(portal.field_count(), 2);

        // The edit reaches memory; only the persisted copy is lost
        portal.enter_value("ssid", "MyWiFi");
        portal.submit();
        assert_eq!(config.value("ssid"), "MyWiFi");
        assert!(fs.contents("/config.json").is_none());
    }

    #[test]
    fn test_custom_path_manager() {
        let fs = MockFileSystem::new();
        let config = ConfigManager::with_path(fs.clone(), "/settings.json");
        config.add("ssid", "SSID", "default-ssid", 32).unwrap();
        config.save();
        assert!(fs.contents("/settings.json").is_some());
    }
}

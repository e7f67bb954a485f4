//! JSON persistence for the parameter registry
//!
//! Bridges the registry to a flat JSON document on the device's file store:
//! one string-valued key per parameter id, e.g.
//! `{"ssid": "home-network", "port": "8080"}`. Every failure on the load path
//! is absorbed: the device boots with construction defaults and the portal
//! keeps working. A save that cannot reach the file store is logged and
//! dropped.

use super::registry::ParameterRegistry;
use crate::platform::traits::{FileHandle, FileSystem, OpenMode};
use alloc::string::String;
use alloc::vec;
use serde_json::{Map, Value};

/// Config file path, overridable at build time via `CONFIG_FILE_PATH`
pub const CONFIG_FILE_PATH: &str = match option_env!("CONFIG_FILE_PATH") {
    Some(path) => path,
    None => "/config.json",
};

/// Persistence bridge between a [`ParameterRegistry`] and the file store
pub struct ConfigStore<F: FileSystem> {
    fs: F,
    path: String,
    mounted: bool,
}

impl<F: FileSystem> ConfigStore<F> {
    /// Create a store over the default config path
    pub fn new(fs: F) -> Self {
        Self::with_path(fs, CONFIG_FILE_PATH)
    }

    /// Create a store over a custom config path
    pub fn with_path(fs: F, path: &str) -> Self {
        Self {
            fs,
            path: String::from(path),
            mounted: false,
        }
    }

    /// Config file path in use
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Mount the file store once; false means "proceed without persistence"
    fn ensure_mounted(&mut self) -> bool {
        if self.mounted {
            return true;
        }
        match self.fs.mount() {
            Ok(()) => {
                crate::log_info!("mounted file store");
                self.mounted = true;
                true
            }
            Err(_) => {
                crate::log_warn!("failed to mount file store");
                false
            }
        }
    }

    /// Load saved values into the registry
    ///
    /// Only parameters registered at call time are populated; register the
    /// full set before loading. Any failure (mount, open, read, parse) leaves
    /// the registry at its construction defaults. Loading twice with no
    /// intervening save yields identical values.
    pub fn load(&mut self, registry: &mut ParameterRegistry) {
        if !self.ensure_mounted() {
            return;
        }
        if !self.fs.exists(&self.path) {
            crate::log_info!("no config file, using defaults");
            return;
        }
        let mut file = match self.fs.open(&self.path, OpenMode::Read) {
            Ok(file) => file,
            Err(_) => {
                crate::log_warn!("failed to open config file");
                return;
            }
        };
        crate::log_debug!("reading config file");
        let size = file.size();
        let mut contents = vec![0u8; size];
        let mut filled = 0;
        while filled < size {
            match file.read(&mut contents[filled..]) {
                Ok(0) => break,
                Ok(count) => filled += count,
                Err(_) => {
                    crate::log_warn!("failed to read config file");
                    return;
                }
            }
        }
        contents.truncate(filled);
        file.close().ok();
        Self::apply(&contents, registry);
    }

    /// Parse a config document and apply matching string values
    fn apply(contents: &[u8], registry: &mut ParameterRegistry) {
        let document: Value = match serde_json::from_slice(contents) {
            Ok(document) => document,
            Err(_) => {
                crate::log_error!("failed to parse config file, using defaults");
                return;
            }
        };
        let object = match document.as_object() {
            Some(object) => object,
            None => {
                crate::log_error!("config file is not a JSON object, using defaults");
                return;
            }
        };
        for param in registry.iter_mut() {
            // Only string leaves count; null and other types keep the default
            if let Some(Value::String(value)) = object.get(param.id()) {
                crate::log_debug!("loaded {}", param.id());
                param.set_value(value);
            }
        }
    }

    /// Persist the registry to the config file
    ///
    /// Pulls each parameter's current value from its bound portal field
    /// first, then overwrites the whole document. Best-effort: a failed open
    /// or write is logged and the in-memory values stand.
    pub fn save(&mut self, registry: &mut ParameterRegistry) {
        crate::log_info!("saving {} parameters", registry.len());
        // Pull edits into memory first; losing the file store below must not
        // lose the user's input
        let mut document = Map::new();
        for param in registry.iter_mut() {
            param.pull_from_portal();
            document.insert(
                String::from(param.id()),
                Value::String(String::from(param.value())),
            );
        }
        if !self.ensure_mounted() {
            crate::log_error!("file store unavailable, save dropped");
            return;
        }
        let contents = match serde_json::to_vec(&Value::Object(document)) {
            Ok(contents) => contents,
            Err(_) => {
                crate::log_error!("failed to serialize config document");
                return;
            }
        };
        let mut file = match self.fs.open(&self.path, OpenMode::Write) {
            Ok(file) => file,
            Err(_) => {
                crate::log_error!("failed to open config file for writing");
                return;
            }
        };
        let mut written = 0;
        while written < contents.len() {
            match file.write(&contents[written..]) {
                Ok(0) => {
                    crate::log_error!("short write to config file");
                    break;
                }
                Ok(count) => written += count,
                Err(_) => {
                    crate::log_error!("failed to write config file");
                    return;
                }
            }
        }
        file.close().ok();
    }
}

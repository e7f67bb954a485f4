//! Captive-portal configuration parameters
//!
//! This module provides named, length-bounded string configuration values
//! that persist across reboots and can be edited from the device's setup
//! portal.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │       Captive portal (external)        │
//! │   editable fields + save trigger       │
//! └──────────────┬─────────────────────────┘
//!                │ FieldHandle / save handler
//!                ▼
//! ┌────────────────────────────────────────┐
//! │            ConfigManager               │
//! │  - ParameterRegistry (owned values)    │
//! │  - ConfigStore (JSON persistence)      │
//! └──────────────┬─────────────────────────┘
//!                │ FileSystem trait
//!                ▼
//! ┌────────────────────────────────────────┐
//! │      Flash file store (external)       │
//! │            /config.json                │
//! └────────────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! Register every parameter first, then call [`ConfigManager::init`]: it
//! loads the config file (saved values override construction defaults),
//! publishes each parameter as an editable portal field, and registers the
//! save trigger. When the user submits the setup form, edited field values
//! are pulled back into the parameters and the registry is rewritten to the
//! config file.

pub mod manager;
pub mod parameter;
pub mod registry;
pub mod store;

// Re-export commonly used types
pub use manager::ConfigManager;
pub use parameter::ConfigParameter;
pub use registry::{ParameterRegistry, RegistryError, CAPACITY_STEP};
pub use store::{ConfigStore, CONFIG_FILE_PATH};

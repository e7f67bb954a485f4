#![cfg_attr(not(test), no_std)]

//! captive_config - Captive-portal device configuration with JSON persistence
//!
//! This library manages named, length-bounded string configuration parameters
//! for an embedded device. Parameters are persisted as a flat JSON document on
//! the device's flash file store and published to a captive-portal setup
//! library as editable fields, so users can change them from the setup form.

extern crate alloc;

// External collaborators (flash file store, captive portal) behind narrow traits
pub mod platform;

// Core systems (parameter registry, JSON persistence, portal sync)
pub mod core;

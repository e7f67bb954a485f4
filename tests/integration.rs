//! End-to-end configuration cycle
//!
//! Runs the full boot -> portal edit -> save -> reboot sequence against the
//! in-memory collaborators.

use captive_config::core::config::{ConfigManager, ConfigParameter};
use captive_config::platform::mock::{MockFileSystem, MockPortal};

#[test]
fn portal_edit_survives_reboot() {
    let fs = MockFileSystem::new();

    // First boot: no config file, defaults stand
    let mut portal = MockPortal::new();
    let config = ConfigManager::new(fs.clone());
    config.add("ssid", "SSID", "default-ssid", 32).unwrap();
    config.add("port", "Port", "8080", 6).unwrap();
    config.init(&mut portal);

    assert_eq!(config.value("ssid"), "default-ssid");
    assert_eq!(config.int_value("port"), 8080);
    assert_eq!(portal.field_count(), 2);

    // User edits the SSID on the setup form and submits
    assert!(portal.enter_value("ssid", "MyWiFi"));
    portal.submit();

    assert_eq!(config.value("ssid"), "MyWiFi");
    let written = fs.contents("/config.json").expect("config file written");
    let document: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(document["ssid"], "MyWiFi");
    assert_eq!(document["port"], "8080");

    // Reboot: fresh process, same flash contents
    let mut portal = MockPortal::new();
    let config = ConfigManager::new(fs.clone());
    config.add("ssid", "SSID", "default-ssid", 32).unwrap();
    config.add("port", "Port", "8080", 6).unwrap();
    config.init(&mut portal);

    assert_eq!(config.value("ssid"), "MyWiFi");
    assert_eq!(config.int_value("port"), 8080);
    // The portal shows the persisted value, not the default
    assert_eq!(portal.field("ssid").unwrap().borrow().value(), "MyWiFi");
}

#[test]
fn corrupt_config_file_boots_with_defaults() {
    let fs = MockFileSystem::new();
    fs.insert_file("/config.json", b"this is not json {");

    let mut portal = MockPortal::new();
    let config = ConfigManager::new(fs.clone());
    config.add("ssid", "SSID", "default-ssid", 32).unwrap();
    config.add("port", "Port", "8080", 6).unwrap();
    config.init(&mut portal);

    assert_eq!(config.value("ssid"), "default-ssid");
    assert_eq!(config.int_value("port"), 8080);

    // The next save replaces the corrupt file with a valid document
    portal.submit();
    let written = fs.contents("/config.json").unwrap();
    let document: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(document["ssid"], "default-ssid");
}

#[test]
fn growth_beyond_initial_capacity_round_trips() {
    let fs = MockFileSystem::new();

    let mut portal = MockPortal::new();
    let config = ConfigManager::new(fs.clone());
    for i in 0..25 {
        let id = format!("param{:02}", i);
        let value = format!("value{:02}", i);
        config.add(&id, "Param", &value, 16).unwrap();
    }
    config.init(&mut portal);
    assert_eq!(portal.field_count(), 25);

    portal.enter_value("param17", "edited");
    portal.submit();

    let mut portal = MockPortal::new();
    let config = ConfigManager::new(fs.clone());
    for i in 0..25 {
        let id = format!("param{:02}", i);
        config.add(&id, "Param", "unset", 16).unwrap();
    }
    config.init(&mut portal);

    for i in 0..25 {
        let id = format!("param{:02}", i);
        let expected = if i == 17 {
            String::from("edited")
        } else {
            format!("value{:02}", i)
        };
        assert_eq!(config.value(&id), expected);
    }
}

#[test]
fn custom_markup_reaches_the_portal() {
    let mut portal = MockPortal::new();
    let config = ConfigManager::new(MockFileSystem::new());
    config
        .add_param(ConfigParameter::with_markup(
            "key",
            "API key",
            "",
            40,
            "<input type='password'>",
        ))
        .unwrap();
    config.init(&mut portal);

    let field = portal.field("key").unwrap();
    assert_eq!(field.borrow().custom_markup(), "<input type='password'>");
    assert_eq!(field.borrow().label(), "API key");
}

#[test]
fn unedited_submit_rewrites_current_values() {
    let fs = MockFileSystem::new();
    fs.insert_file("/config.json", br#"{"ssid":"MyWiFi"}"#);

    let mut portal = MockPortal::new();
    let config = ConfigManager::new(fs.clone());
    config.add("ssid", "SSID", "default-ssid", 32).unwrap();
    config.add("port", "Port", "8080", 6).unwrap();
    config.init(&mut portal);

    // Submitting the form untouched persists the loaded/default values
    portal.submit();

    let written = fs.contents("/config.json").unwrap();
    let document: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(document["ssid"], "MyWiFi");
    assert_eq!(document["port"], "8080");
}

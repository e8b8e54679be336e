// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use queryforge::config::settings::Settings;
use queryforge::EngineId;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.engine.default_engine, EngineId::Google);
    assert!(settings.panel.auto_search);
    assert_eq!(settings.panel.source, "search-helper");
    assert!(settings.suggestions.enabled);
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let settings = Settings::from_toml("[suggestions]\nenabled = false\n").unwrap();
    assert!(!settings.suggestions.enabled);
    assert_eq!(settings.engine.default_engine, EngineId::Google);
    assert!(settings.panel.auto_search);
}

#[test]
fn test_engine_id_is_read_in_lowercase_form() {
    let settings = Settings::from_toml("[engine]\ndefault_engine = \"so360\"\n").unwrap();
    assert_eq!(settings.engine.default_engine, EngineId::So360);
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use queryforge::config::settings::Settings;
use queryforge::domain::services::QueryService;
use queryforge::{EngineId, SearchParams};

fn service_with_default(engine: EngineId) -> QueryService {
    let mut settings = Settings::default();
    settings.engine.default_engine = engine;
    QueryService::new(settings)
}

#[test]
fn test_params_for_uses_configured_engine() {
    let service = service_with_default(EngineId::Sogou);
    let params = service.params_for("微信 公众号");
    assert_eq!(params.engine, EngineId::Sogou);
    assert_eq!(params.keyword, "微信 公众号");
}

#[test]
fn test_prepare_keeps_warnings_for_valid_params() {
    let service = QueryService::default();
    let params = SearchParams::new("rust", EngineId::Google).with_file_type("xyz");
    let prepared = service.prepare(&params);

    assert!(prepared.validation.is_valid);
    assert!(prepared.validation.has_warnings());
    assert!(prepared.url.is_some());
}

#[test]
fn test_prepare_blocks_invalid_domain() {
    let service = QueryService::default();
    let params = SearchParams::new("rust", EngineId::Bing).with_site("not a domain");
    let prepared = service.prepare(&params);

    assert!(!prepared.validation.is_valid);
    assert_eq!(prepared.url, None);
}

#[test]
fn test_prepared_query_serializes_camel_case() {
    let prepared = QueryService::default().prepare(&SearchParams::new("", EngineId::Google));
    let json = serde_json::to_value(&prepared).unwrap();
    assert_eq!(json["validation"]["isValid"], false);
    assert!(json["url"].is_null());
}

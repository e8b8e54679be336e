// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use queryforge::config::settings::Settings;
use queryforge::domain::models::history::SearchHistoryEntry;
use queryforge::domain::models::panel_message::APPLY_QUERY;
use queryforge::domain::models::search_params::SearchParams;
use queryforge::domain::services::QueryService;
use queryforge::EngineId;

#[test]
fn test_history_survives_json_storage() {
    let service = QueryService::default();
    let params = SearchParams {
        exclude_words: vec!["ads".to_string()],
        ..SearchParams::new("async runtime", EngineId::DuckDuckGo).with_exact_match("work stealing")
    };
    let entry = service.record_history(&params);

    let stored = serde_json::to_string(&entry).unwrap();
    let restored: SearchHistoryEntry = serde_json::from_str(&stored).unwrap();

    assert_eq!(restored, entry);
    assert_eq!(service.restore_from_history(&restored), entry.generated_query);
}

#[test]
fn test_restore_uses_entry_engine() {
    let service = QueryService::default();
    let mut entry = service.record_history(&SearchParams::new("rust", EngineId::Google));
    entry.syntax.engine = EngineId::Bing;

    let url = service.restore_from_history(&entry);
    assert!(url.starts_with("https://www.google.com/search?q="));
}

#[test]
fn test_built_url_becomes_panel_query() {
    let mut settings = Settings::default();
    settings.panel.auto_search = false;
    settings.panel.source = "floating-panel".to_string();
    let service = QueryService::new(settings);

    let params = SearchParams::new("测试 搜索", EngineId::Yandex).with_site("ya.ru");
    let prepared = service.prepare(&params);
    let url = prepared.url.expect("valid params produce a url");

    let envelope = service.apply_query_message(&url, Some(EngineId::Yandex));
    assert_eq!(envelope.source, "floating-panel");
    assert_eq!(envelope.message.kind, APPLY_QUERY);
    assert_eq!(envelope.message.payload.query, "测试 搜索 site:ya.ru");
    assert!(!envelope.message.payload.auto_search);
    assert_eq!(envelope.message.payload.search_url, url);
}

#[test]
fn test_engine_detected_when_not_given() {
    let service = QueryService::default();
    let envelope = service.apply_query_message("https://search.naver.com/search.naver?where=nexearch&query=rust", None);
    assert_eq!(envelope.message.payload.query, "rust");
}

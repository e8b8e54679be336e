// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use queryforge::domain::models::search_params::{DateRange, SearchParams};
use queryforge::utils::url_utils::extract_and_decode_query;
use queryforge::{AdapterFactory, EngineId};

#[test]
fn test_baidu_chinese_keyword_round_trips() {
    let params = SearchParams::new("测试搜索", EngineId::Baidu);
    let url = AdapterFactory::get_adapter(EngineId::Baidu).build_query(&params);

    assert!(url.starts_with("https://www.baidu.com/s?wd="));
    assert_eq!(extract_and_decode_query(&url, Some(EngineId::Baidu)), "测试搜索");
}

#[test]
fn test_baidu_site_operator() {
    let params = SearchParams::new("Vue教程", EngineId::Baidu).with_site("vuejs.org");
    let url = AdapterFactory::get_adapter(EngineId::Baidu).build_query(&params);

    assert_eq!(
        extract_and_decode_query(&url, Some(EngineId::Baidu)),
        "Vue教程 site:vuejs.org"
    );
}

#[test]
fn test_startpage_multiple_sites_use_query_param() {
    let params =
        SearchParams::new("test", EngineId::Startpage).with_sites(["example.com", "test.com"]);
    let url = AdapterFactory::get_adapter(EngineId::Startpage).build_query(&params);

    assert!(url.contains("?query="));
    assert!(!url.contains("?q="));
    let decoded = extract_and_decode_query(&url, Some(EngineId::Startpage));
    assert!(decoded.contains("site:example.com"));
    assert!(decoded.contains(" OR "));
    assert!(decoded.contains("site:test.com"));
}

#[test]
fn test_empty_keyword_is_rejected() {
    let result = AdapterFactory::get_adapter(EngineId::Baidu)
        .validate_params(&SearchParams::new("", EngineId::Baidu));

    assert!(!result.is_valid);
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("keyword or exact match required")));
}

#[test]
fn test_reversed_date_range_is_rejected() {
    let params = SearchParams {
        date_range: Some(DateRange::new("2024-12-31", "2024-01-01")),
        ..SearchParams::new("x", EngineId::Baidu)
    };
    let result = AdapterFactory::get_adapter(EngineId::Baidu).validate_params(&params);

    assert!(!result.is_valid);
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("start date is after end date")));
}

#[test]
fn test_malformed_escape_returns_original_substring() {
    assert_eq!(
        extract_and_decode_query("https://www.baidu.com/s?wd=test%2", None),
        "test%2"
    );
    assert_eq!(
        extract_and_decode_query("https://www.baidu.com/s?wd=test%2", Some(EngineId::Baidu)),
        "test%2"
    );
}

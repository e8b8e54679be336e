// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use queryforge::utils::url_utils::{
    detect_engine_from_url, extract_and_decode_query, normalize_domain, safe_decode_uri_component,
};
use queryforge::EngineId;

#[test]
fn test_safe_decode_total_on_hostile_input() {
    let inputs = ["%", "%%%", "test%2", "%FF%FE", "%C3%28", "++%2", "%u4F60", ""];
    for input in inputs {
        let _ = safe_decode_uri_component(input);
    }
    assert_eq!(safe_decode_uri_component("%FF%FE"), "%FF%FE");
}

#[test]
fn test_generic_extraction_priority() {
    assert_eq!(
        extract_and_decode_query("https://example.com/s?ie=utf-8&q=low&wd=high", None),
        "high"
    );
    assert_eq!(
        extract_and_decode_query("https://example.com/s?q=first&wd=second", None),
        "first"
    );
    assert_eq!(
        extract_and_decode_query("https://example.com/search?text=yandex&q=other", None),
        "yandex"
    );
    assert_eq!(extract_and_decode_query("https://example.com/", None), "");
}

#[test]
fn test_engine_extraction_ignores_fragment() {
    assert_eq!(
        extract_and_decode_query(
            "https://www.google.com/search?q=rust%20lang#top",
            Some(EngineId::Google)
        ),
        "rust lang"
    );
    assert_eq!(
        extract_and_decode_query("https://www.bing.com/search?form=QBLH", Some(EngineId::Bing)),
        ""
    );
}

#[test]
fn test_detect_engine_from_url() {
    assert_eq!(
        detect_engine_from_url("https://www.baidu.com/s?wd=x"),
        Some(EngineId::Baidu)
    );
    assert_eq!(
        detect_engine_from_url("https://x.com/search?q=x"),
        Some(EngineId::Twitter)
    );
    assert_eq!(
        detect_engine_from_url("https://yandex.com/search/?text=x"),
        Some(EngineId::Yandex)
    );
    assert_eq!(detect_engine_from_url("https://www.so.com/s?q=x"), Some(EngineId::So360));
    assert_eq!(detect_engine_from_url("https://example.org/"), None);
}

#[test]
fn test_normalize_domain_strips_scheme_and_path() {
    assert_eq!(normalize_domain("HTTPS://Docs.RS/tokio/latest"), "docs.rs");
}

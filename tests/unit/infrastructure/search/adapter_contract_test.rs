// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 所有适配器都必须满足的公共契约

use queryforge::domain::models::search_params::{DateRange, NumberRange, SearchParams};
use queryforge::utils::url_utils::extract_and_decode_query;
use queryforge::{AdapterFactory, EngineId, SyntaxTag};

const PLAIN_KEYWORDS: &[&str] = &[
    "rust",
    "测试搜索",
    "hello world",
    "c++ templates",
    "100% sure",
    "a&b=c",
    "검색어",
];

/// 每个字段都填写的参数，用来触发各引擎的降级
fn everything(engine: EngineId) -> SearchParams {
    SearchParams {
        site: Some("example.com".to_string()),
        sites: vec!["docs.rs".to_string()],
        file_types: vec!["pdf".to_string()],
        exact_matches: vec!["zero cost".to_string()],
        exclude_words: vec!["spam".to_string()],
        or_keywords: vec!["tokio".to_string(), "async-std".to_string()],
        in_title: Some("guide".to_string()),
        in_url: Some("docs".to_string()),
        in_text: Some("borrow".to_string()),
        all_in_title: Some("rust book".to_string()),
        related_site: Some("rust-lang.org".to_string()),
        cache_site: Some("crates.io".to_string()),
        wildcard_query: Some("rust * guide".to_string()),
        from_users: vec!["12345".to_string()],
        to_users: vec!["rustlang".to_string()],
        subreddits: vec!["rust".to_string()],
        languages: vec!["en".to_string()],
        tags: vec!["ownership".to_string()],
        number_range: Some(NumberRange {
            min: Some(1.0),
            max: Some(10.0),
        }),
        date_range: Some(DateRange::new("2024-01-01", "2024-06-30")),
        ..SearchParams::new("rust", engine)
    }
}

#[test]
fn test_plain_keyword_round_trips_for_every_engine() {
    for engine in EngineId::ALL {
        let adapter = AdapterFactory::get_adapter(engine);
        for keyword in PLAIN_KEYWORDS {
            let url = adapter.build_query(&SearchParams::new(*keyword, engine));
            assert_eq!(
                extract_and_decode_query(&url, Some(engine)),
                *keyword,
                "round trip failed for {} with {:?}",
                engine,
                keyword
            );
        }
    }
}

#[test]
fn test_surrounding_whitespace_is_trimmed_before_encoding() {
    for engine in EngineId::ALL {
        let adapter = AdapterFactory::get_adapter(engine);
        for keyword in [" rust", "\trust ", "  hello world\n"] {
            let url = adapter.build_query(&SearchParams::new(keyword, engine));
            assert_eq!(
                extract_and_decode_query(&url, Some(engine)),
                keyword.trim(),
                "{} kept surrounding whitespace of {:?}",
                engine,
                keyword
            );
        }
    }
}

#[test]
fn test_url_uses_engine_query_param() {
    for engine in EngineId::ALL {
        let adapter = AdapterFactory::get_adapter(engine);
        let url = adapter.build_query(&SearchParams::new("rust", engine));
        let expected = format!("{}?{}=rust", adapter.base_url(), engine.query_param());
        assert_eq!(url, expected);
    }
}

#[test]
fn test_degradation_is_idempotent() {
    for engine in EngineId::ALL {
        let adapter = AdapterFactory::get_adapter(engine);
        let once = adapter.degrade_syntax(&everything(engine));
        let twice = adapter.degrade_syntax(&once);
        assert_eq!(once, twice, "degradation not idempotent for {}", engine);
    }
}

#[test]
fn test_degradation_keeps_only_supported_syntax() {
    for engine in EngineId::ALL {
        let adapter = AdapterFactory::get_adapter(engine);
        let degraded = adapter.degrade_syntax(&everything(engine));
        for tag in degraded.requested_syntax().iter() {
            assert!(
                adapter.supported_syntax().contains(tag),
                "{} kept unsupported {}",
                engine,
                tag
            );
        }
        assert_eq!(degraded.keyword, "rust");
    }
}

#[test]
fn test_build_is_deterministic() {
    for engine in EngineId::ALL {
        let adapter = AdapterFactory::get_adapter(engine);
        let first = adapter.build_query(&everything(engine));
        let second = adapter.build_query(&everything(engine).clone());
        assert_eq!(first, second);
    }
}

#[test]
fn test_build_does_not_mutate_params() {
    let params = everything(EngineId::Baidu);
    let snapshot = params.clone();
    let adapter = AdapterFactory::get_adapter(EngineId::Baidu);
    let _ = adapter.build_query(&params);
    let _ = adapter.validate_params(&params);
    assert_eq!(params, snapshot);
}

#[test]
fn test_validation_is_monotonic() {
    for engine in EngineId::ALL {
        let adapter = AdapterFactory::get_adapter(engine);
        let subset = SearchParams::new("rust", engine).with_site("docs.rs");
        let superset = everything(engine);

        let before = adapter.validate_params(&subset);
        let after = adapter.validate_params(&superset);
        for error in &before.errors {
            assert!(after.errors.contains(error), "{} lost error {}", engine, error);
        }
        for warning in &before.warnings {
            assert!(
                after.warnings.contains(warning),
                "{} lost warning {}",
                engine,
                warning
            );
        }
    }
}

#[test]
fn test_unsupported_syntax_produces_warning() {
    let params = SearchParams {
        subreddits: vec!["rust".to_string()],
        ..SearchParams::new("rust", EngineId::Baidu)
    };
    let result = AdapterFactory::get_adapter(EngineId::Baidu).validate_params(&params);

    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains(SyntaxTag::Subreddit.as_str())));
}

#[test]
fn test_exact_match_alone_satisfies_presence_rule() {
    for engine in EngineId::ALL {
        let adapter = AdapterFactory::get_adapter(engine);
        if !adapter.supported_syntax().contains(SyntaxTag::Exact) {
            continue;
        }
        let params = SearchParams::new("", engine).with_exact_match("zero cost");
        let result = adapter.validate_params(&params);
        assert!(
            !result
                .errors
                .iter()
                .any(|e| e.contains("keyword or exact match required")),
            "{} rejected an exact-only query",
            engine
        );
    }
}

#[test]
fn test_operator_only_queries_count_as_content() {
    let cases: [(SyntaxTag, SearchParams); 4] = [
        (
            SyntaxTag::Tag,
            SearchParams {
                tags: vec!["rust".to_string()],
                ..Default::default()
            },
        ),
        (
            SyntaxTag::FromUser,
            SearchParams {
                from_users: vec!["rustlang".to_string()],
                ..Default::default()
            },
        ),
        (
            SyntaxTag::Subreddit,
            SearchParams {
                subreddits: vec!["rust".to_string()],
                ..Default::default()
            },
        ),
        (SyntaxTag::Site, SearchParams::default().with_site("docs.rs")),
    ];

    for engine in EngineId::ALL {
        let adapter = AdapterFactory::get_adapter(engine);
        for (tag, base) in &cases {
            let params = SearchParams {
                engine,
                ..base.clone()
            };
            let missing = adapter
                .validate_params(&params)
                .errors
                .iter()
                .any(|e| e.contains("keyword or exact match required"));
            if adapter.supported_syntax().contains(*tag) {
                assert!(!adapter.compose_query(&params).is_empty());
                assert!(!missing, "{} rejected a {}-only query", engine, tag);
            } else {
                assert!(missing, "{} accepted an empty query after dropping {}", engine, tag);
            }
        }
    }
}

#[test]
fn test_every_adapter_has_a_name() {
    for engine in EngineId::ALL {
        let adapter = AdapterFactory::get_adapter(engine);
        assert!(!adapter.name().is_empty());
        assert!(adapter.base_url().starts_with("https://"));
    }
}

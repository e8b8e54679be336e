// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use queryforge::domain::models::search_params::SearchParams;
use queryforge::{EngineId, SyntaxTag};

#[test]
fn test_deserializes_partial_history_blob() {
    let params: SearchParams = serde_json::from_str(
        r#"{"keyword":"rust","engine":"duckduckgo","fileType":"pdf","exactMatches":["zero cost"]}"#,
    )
    .unwrap();

    assert_eq!(params.engine, EngineId::DuckDuckGo);
    assert_eq!(params.file_type_values(), vec!["pdf"]);
    assert_eq!(params.exact_values(), vec!["zero cost"]);
    assert!(params.sites.is_empty());
}

#[test]
fn test_requested_syntax_reflects_filled_fields() {
    let params = SearchParams::new("rust", EngineId::Google)
        .with_site("docs.rs")
        .with_exclude_words(["spam"])
        .with_date_range("2024-01-01", "");

    let requested = params.requested_syntax();
    assert!(requested.contains(SyntaxTag::Site));
    assert!(requested.contains(SyntaxTag::Exclude));
    assert!(requested.contains(SyntaxTag::DateRange));
    assert!(!requested.contains(SyntaxTag::FileType));
    assert_eq!(requested.len(), 3);
}

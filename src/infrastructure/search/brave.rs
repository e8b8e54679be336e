// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::dialect::Dialect;
use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};

const SUPPORTED: SyntaxSet = SyntaxSet::of(&[
    SyntaxTag::Site,
    SyntaxTag::FileType,
    SyntaxTag::Exact,
    SyntaxTag::Exclude,
    SyntaxTag::Or,
    SyntaxTag::InTitle,
    SyntaxTag::InUrl,
    SyntaxTag::InText,
    SyntaxTag::Language,
]);

static DIALECT: Dialect = Dialect {
    in_text: "inbody:",
    language: "lang:",
    ..Dialect::STANDARD
};

/// Brave Search 搜索适配器
#[derive(Debug, Default, Clone, Copy)]
pub struct BraveAdapter;

impl BraveAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for BraveAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Brave
    }

    fn name(&self) -> &'static str {
        "Brave"
    }

    fn base_url(&self) -> &'static str {
        "https://search.brave.com/search"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn dialect(&self) -> &'static Dialect {
        &DIALECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::search_params::SearchParams;

    #[test]
    fn test_brave_language_and_body() {
        let params = SearchParams {
            languages: vec!["de".to_string(), "fr".to_string()],
            in_text: Some("datenschutz".to_string()),
            ..SearchParams::new("privacy", EngineId::Brave)
        };
        assert_eq!(
            BraveAdapter::new().compose_query(&params),
            "privacy inbody:datenschutz (lang:de OR lang:fr)"
        );
    }
}

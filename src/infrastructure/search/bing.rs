// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::search::dialect::Dialect;
use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::suggestions;
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
    ..Dialect::STANDARD
};

fn has_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// Bing 搜索适配器
///
/// 正文匹配使用 `inbody:`，语言过滤使用 `language:`
#[derive(Debug, Default, Clone, Copy)]
pub struct BingAdapter;

impl BingAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for BingAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Bing
    }

    fn name(&self) -> &'static str {
        "Bing"
    }

    fn base_url(&self) -> &'static str {
        "https://www.bing.com/search"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn dialect(&self) -> &'static Dialect {
        &DIALECT
    }

    fn search_suggestions(&self, params: &SearchParams) -> Vec<String> {
        let mut hints = suggestions::common_suggestions(SUPPORTED, params);
        let wants_language = params
            .keyword_value()
            .is_some_and(|keyword| has_cjk(keyword) && params.languages.is_empty());
        if wants_language {
            hints.push("Add language:zh-hans to keep results in Chinese".to_string());
        }
        hints
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::models::validation_result::ValidationResult;
use crate::domain::search::dialect::{DateSyntax, Dialect, OpenRange, RangeSyntax};
use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::suggestions::{self, mentions_any};
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};
use crate::utils::validators::RuleViolation;

/// Google 忽略第 32 个之后的词
pub const GOOGLE_MAX_WORDS: usize = 32;

const SUPPORTED: SyntaxSet = SyntaxSet::of(&[
    SyntaxTag::Site,
    SyntaxTag::FileType,
    SyntaxTag::Exact,
    SyntaxTag::Exclude,
    SyntaxTag::Or,
    SyntaxTag::InTitle,
    SyntaxTag::InUrl,
    SyntaxTag::InText,
    SyntaxTag::AllInTitle,
    SyntaxTag::Related,
    SyntaxTag::Cache,
    SyntaxTag::Wildcard,
    SyntaxTag::NumberRange,
    SyntaxTag::DateRange,
]);

static DIALECT: Dialect = Dialect {
    date_range: Some(DateSyntax::Bounds {
        after: "after:",
        before: "before:",
    }),
    number_range: Some(RangeSyntax {
        prefix: "",
        open: OpenRange::Dots,
    }),
    ..Dialect::STANDARD
};

const RECENCY_HINTS: &[&str] = &["latest", "recent", "news", "最新", "新闻"];

/// Google 搜索适配器
///
/// 支持的语法最全，包括 `after:`/`before:` 日期范围与 `min..max` 数值范围
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleAdapter;

impl GoogleAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for GoogleAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Google
    }

    fn name(&self) -> &'static str {
        "Google"
    }

    fn base_url(&self) -> &'static str {
        "https://www.google.com/search"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn dialect(&self) -> &'static Dialect {
        &DIALECT
    }

    fn check_engine_rules(&self, params: &SearchParams, result: &mut ValidationResult) {
        let words = self.compose_query(params).split_whitespace().count();
        if words > GOOGLE_MAX_WORDS {
            result.record(RuleViolation::EngineWordLimit {
                engine: self.name().to_string(),
                max: GOOGLE_MAX_WORDS,
            });
        }
    }

    fn search_suggestions(&self, params: &SearchParams) -> Vec<String> {
        let mut hints = suggestions::common_suggestions(SUPPORTED, params);
        if let Some(keyword) = params.keyword_value() {
            if params.date_range_value().is_none() && mentions_any(keyword, RECENCY_HINTS) {
                hints.push("Add a date range (after:/before:) to surface recent results".to_string());
            }
        }
        hints
    }
}

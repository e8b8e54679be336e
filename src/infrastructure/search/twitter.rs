// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::models::validation_result::ValidationResult;
use crate::domain::search::dialect::{DateSyntax, Dialect, TagStyle};
use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::suggestions;
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};
use crate::utils::validators::RuleViolation;
use once_cell::sync::Lazy;
use regex::Regex;

const SUPPORTED: SyntaxSet = SyntaxSet::of(&[
    SyntaxTag::Exact,
    SyntaxTag::Exclude,
    SyntaxTag::Or,
    SyntaxTag::FromUser,
    SyntaxTag::ToUser,
    SyntaxTag::Language,
    SyntaxTag::Tag,
    SyntaxTag::DateRange,
]);

static DIALECT: Dialect = Dialect {
    language: "lang:",
    tag: TagStyle::Hash,
    date_range: Some(DateSyntax::Bounds {
        after: "since:",
        before: "until:",
    }),
    ..Dialect::STANDARD
};

static HANDLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{1,15}$").expect("handle pattern is valid"));

/// Twitter / X 搜索适配器
///
/// 用户范围使用 `from:`/`to:`，日期使用 `since:`/`until:`，标签渲染为 `#tag`
#[derive(Debug, Default, Clone, Copy)]
pub struct TwitterAdapter;

impl TwitterAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for TwitterAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Twitter
    }

    fn name(&self) -> &'static str {
        "Twitter"
    }

    fn base_url(&self) -> &'static str {
        "https://x.com/search"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn dialect(&self) -> &'static Dialect {
        &DIALECT
    }

    fn check_engine_rules(&self, params: &SearchParams, result: &mut ValidationResult) {
        let handles = params
            .from_user_values()
            .into_iter()
            .chain(params.to_user_values());
        for handle in handles {
            if !HANDLE_RE.is_match(handle.trim_start_matches('@')) {
                result.record(RuleViolation::InvalidHandle(handle));
            }
        }
    }

    fn search_suggestions(&self, params: &SearchParams) -> Vec<String> {
        let mut hints = suggestions::common_suggestions(SUPPORTED, params);
        let mentions_handle = params
            .keyword_value()
            .is_some_and(|keyword| keyword.split_whitespace().any(|w| w.starts_with('@')));
        if mentions_handle && params.from_user_values().is_empty() {
            hints.push("Use from:handle to search posts written by that account".to_string());
        }
        hints
    }
}

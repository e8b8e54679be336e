// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::models::validation_result::ValidationResult;
use crate::domain::search::dialect::{DateSyntax, Dialect, OpenRange, RangeSyntax, TagStyle};
use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::suggestions;
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};
use crate::utils::validators::RuleViolation;

const SUPPORTED: SyntaxSet = SyntaxSet::of(&[
    SyntaxTag::Exact,
    SyntaxTag::Exclude,
    SyntaxTag::Or,
    SyntaxTag::Tag,
    SyntaxTag::FromUser,
    SyntaxTag::InTitle,
    SyntaxTag::NumberRange,
    SyntaxTag::DateRange,
]);

static DIALECT: Dialect = Dialect {
    from_user: "user:",
    in_title: "title:",
    tag: TagStyle::Bracket,
    date_range: Some(DateSyntax::Range(RangeSyntax {
        prefix: "created:",
        open: OpenRange::Dots,
    })),
    number_range: Some(RangeSyntax {
        prefix: "score:",
        open: OpenRange::Dots,
    }),
    ..Dialect::STANDARD
};

/// Stack Overflow 搜索适配器
///
/// `user:` 只接受数字 ID 或 `me`
#[derive(Debug, Default, Clone, Copy)]
pub struct StackOverflowAdapter;

impl StackOverflowAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for StackOverflowAdapter {
    fn engine(&self) -> EngineId {
        EngineId::StackOverflow
    }

    fn name(&self) -> &'static str {
        "Stack Overflow"
    }

    fn base_url(&self) -> &'static str {
        "https://stackoverflow.com/search"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn dialect(&self) -> &'static Dialect {
        &DIALECT
    }

    fn check_engine_rules(&self, params: &SearchParams, result: &mut ValidationResult) {
        for user in params.from_user_values() {
            let id = user.trim_start_matches('@');
            if id != "me" && !id.chars().all(|c| c.is_ascii_digit()) {
                result.record(RuleViolation::InvalidHandle(user));
            }
        }
    }

    fn search_suggestions(&self, params: &SearchParams) -> Vec<String> {
        let mut hints = suggestions::common_suggestions(SUPPORTED, params);
        let looks_like_error = params
            .keyword_value()
            .is_some_and(|keyword| keyword.contains("Error") || keyword.contains("Exception"));
        if looks_like_error && params.tags.is_empty() {
            hints.push("Add a [tag] for the language or library to narrow error searches".to_string());
        }
        hints
    }
}

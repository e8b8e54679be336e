// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::search::dialect::{DateSyntax, Dialect, OpenRange, RangeSyntax, TagStyle};
use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::suggestions;
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};

const SUPPORTED: SyntaxSet = SyntaxSet::of(&[
    SyntaxTag::FileType,
    SyntaxTag::Exact,
    SyntaxTag::Exclude,
    SyntaxTag::Or,
    SyntaxTag::FromUser,
    SyntaxTag::Language,
    SyntaxTag::Tag,
    SyntaxTag::NumberRange,
    SyntaxTag::DateRange,
]);

/// GitHub 限定符：`extension:`、`user:`、`topic:`，数值范围作用于 stars
static DIALECT: Dialect = Dialect {
    file_type: "extension:",
    from_user: "user:",
    tag: TagStyle::Prefix("topic:"),
    date_range: Some(DateSyntax::Range(RangeSyntax {
        prefix: "created:",
        open: OpenRange::Comparison,
    })),
    number_range: Some(RangeSyntax {
        prefix: "stars:",
        open: OpenRange::Comparison,
    }),
    ..Dialect::STANDARD
};

const KNOWN_LANGUAGES: &[&str] = &[
    "rust",
    "python",
    "go",
    "golang",
    "typescript",
    "javascript",
    "java",
    "kotlin",
    "swift",
    "c++",
    "ruby",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct GitHubAdapter;

impl GitHubAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for GitHubAdapter {
    fn engine(&self) -> EngineId {
        EngineId::GitHub
    }

    fn name(&self) -> &'static str {
        "GitHub"
    }

    fn base_url(&self) -> &'static str {
        "https://github.com/search"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn dialect(&self) -> &'static Dialect {
        &DIALECT
    }

    fn search_suggestions(&self, params: &SearchParams) -> Vec<String> {
        let mut hints = suggestions::common_suggestions(SUPPORTED, params);
        if !params.languages.is_empty() {
            return hints;
        }
        let Some(keyword) = params.keyword_value() else {
            return hints;
        };
        let lowered = keyword.to_lowercase();
        if let Some(language) = lowered
            .split_whitespace()
            .find(|word| KNOWN_LANGUAGES.contains(word))
        {
            hints.push(format!("Add language:{} to filter by repository language", language));
        }
        hints
    }
}

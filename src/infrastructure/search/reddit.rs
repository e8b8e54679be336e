// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::models::validation_result::ValidationResult;
use crate::domain::search::dialect::Dialect;
use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};
use crate::utils::validators::RuleViolation;
use once_cell::sync::Lazy;
use regex::Regex;

const SUPPORTED: SyntaxSet = SyntaxSet::of(&[
    SyntaxTag::Site,
    SyntaxTag::Exact,
    SyntaxTag::Exclude,
    SyntaxTag::Or,
    SyntaxTag::Subreddit,
    SyntaxTag::FromUser,
    SyntaxTag::InTitle,
    SyntaxTag::InUrl,
]);

static DIALECT: Dialect = Dialect {
    from_user: "author:",
    in_title: "title:",
    in_url: "url:",
    ..Dialect::STANDARD
};

static SUBREDDIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{2,21}$").expect("subreddit pattern is valid"));

fn subreddit_name(raw: &str) -> &str {
    let name = raw.trim();
    name.strip_prefix("/r/")
        .or_else(|| name.strip_prefix("r/"))
        .unwrap_or(name)
}

/// Reddit 搜索适配器
#[derive(Debug, Default, Clone, Copy)]
pub struct RedditAdapter;

impl RedditAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for RedditAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Reddit
    }

    fn name(&self) -> &'static str {
        "Reddit"
    }

    fn base_url(&self) -> &'static str {
        "https://www.reddit.com/search/"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn dialect(&self) -> &'static Dialect {
        &DIALECT
    }

    fn check_engine_rules(&self, params: &SearchParams, result: &mut ValidationResult) {
        for raw in params.subreddits.iter().filter(|s| !s.trim().is_empty()) {
            if !SUBREDDIT_RE.is_match(subreddit_name(raw)) {
                result.record(RuleViolation::InvalidSubreddit(raw.clone()));
            }
        }
    }
}

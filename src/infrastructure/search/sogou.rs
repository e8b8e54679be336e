// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::suggestions::{self, mentions_any};
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};

const SUPPORTED: SyntaxSet = SyntaxSet::of(&[
    SyntaxTag::Site,
    SyntaxTag::FileType,
    SyntaxTag::Exact,
    SyntaxTag::Exclude,
    SyntaxTag::InTitle,
    SyntaxTag::InUrl,
]);

pub struct SogouAdapter;

impl Default for SogouAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SogouAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for SogouAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Sogou
    }

    fn name(&self) -> &'static str {
        "搜狗"
    }

    fn base_url(&self) -> &'static str {
        "https://www.sogou.com/web"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn search_suggestions(&self, params: &SearchParams) -> Vec<String> {
        let mut hints = suggestions::common_suggestions(SUPPORTED, params);
        // 公众号文章在独立的微信搜索频道
        if params
            .keyword_value()
            .is_some_and(|keyword| mentions_any(keyword, &["公众号", "微信"]))
        {
            hints.push("公众号文章可在 weixin.sogou.com 中搜索".to_string());
        }
        hints
    }
}

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

/// 360 搜索适配器
#[derive(Debug, Default, Clone, Copy)]
pub struct So360Adapter;

impl So360Adapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for So360Adapter {
    fn engine(&self) -> EngineId {
        EngineId::So360
    }

    fn name(&self) -> &'static str {
        "360搜索"
    }

    fn base_url(&self) -> &'static str {
        "https://www.so.com/s"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn search_suggestions(&self, params: &SearchParams) -> Vec<String> {
        let mut hints = suggestions::common_suggestions(SUPPORTED, params);
        if params
            .keyword_value()
            .is_some_and(|keyword| mentions_any(keyword, &["下载", "download"]))
            && params.exclude_words.is_empty()
        {
            hints.push("下载类查询可用 -广告 等排除词过滤推广结果".to_string());
        }
        hints
    }
}

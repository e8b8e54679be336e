// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

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
]);

/// Yahoo 搜索适配器，查询参数为 `p`
#[derive(Debug, Default, Clone, Copy)]
pub struct YahooAdapter;

impl YahooAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for YahooAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Yahoo
    }

    fn name(&self) -> &'static str {
        "Yahoo"
    }

    fn base_url(&self) -> &'static str {
        "https://search.yahoo.com/search"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }
}

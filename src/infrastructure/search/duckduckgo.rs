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

/// DuckDuckGo 搜索适配器
#[derive(Debug, Default, Clone, Copy)]
pub struct DuckDuckGoAdapter;

impl DuckDuckGoAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for DuckDuckGoAdapter {
    fn engine(&self) -> EngineId {
        EngineId::DuckDuckGo
    }

    fn name(&self) -> &'static str {
        "DuckDuckGo"
    }

    fn base_url(&self) -> &'static str {
        "https://duckduckgo.com/"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }
}

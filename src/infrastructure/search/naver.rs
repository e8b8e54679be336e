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
]);

/// Naver 搜索适配器
#[derive(Debug, Default, Clone, Copy)]
pub struct NaverAdapter;

impl NaverAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for NaverAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Naver
    }

    fn name(&self) -> &'static str {
        "Naver"
    }

    fn base_url(&self) -> &'static str {
        "https://search.naver.com/search.naver"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }
}

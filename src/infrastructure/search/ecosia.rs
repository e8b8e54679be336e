// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};

/// Ecosia 的结果来自 Bing，语法集合与 Bing 接近，但没有 `inbody:` 和语言过滤
const SUPPORTED: SyntaxSet = SyntaxSet::of(&[
    SyntaxTag::Site,
    SyntaxTag::FileType,
    SyntaxTag::Exact,
    SyntaxTag::Exclude,
    SyntaxTag::Or,
    SyntaxTag::InTitle,
    SyntaxTag::InUrl,
]);

#[derive(Debug, Default, Clone, Copy)]
pub struct EcosiaAdapter;

impl EcosiaAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for EcosiaAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Ecosia
    }

    fn name(&self) -> &'static str {
        "Ecosia"
    }

    fn base_url(&self) -> &'static str {
        "https://www.ecosia.org/search"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};

/// Startpage 代理 Google 结果，但不支持 `inurl:`/`intext:`
const SUPPORTED: SyntaxSet = SyntaxSet::of(&[
    SyntaxTag::Site,
    SyntaxTag::FileType,
    SyntaxTag::Exact,
    SyntaxTag::Exclude,
    SyntaxTag::Or,
    SyntaxTag::InTitle,
]);

#[derive(Debug, Default, Clone, Copy)]
pub struct StartpageAdapter;

impl StartpageAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for StartpageAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Startpage
    }

    fn name(&self) -> &'static str {
        "Startpage"
    }

    fn base_url(&self) -> &'static str {
        "https://www.startpage.com/sp/search"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }
}

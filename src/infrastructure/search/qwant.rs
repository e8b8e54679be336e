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

#[derive(Debug, Default, Clone, Copy)]
pub struct QwantAdapter;

impl QwantAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for QwantAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Qwant
    }

    fn name(&self) -> &'static str {
        "Qwant"
    }

    fn base_url(&self) -> &'static str {
        "https://www.qwant.com/"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }
}

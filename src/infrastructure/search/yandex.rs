// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::dialect::{DateSyntax, Dialect, OpenRange, RangeSyntax};
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
    SyntaxTag::Language,
    SyntaxTag::DateRange,
]);

/// Yandex 运算符与 Google 差异较大：`mime:`、`title:`、`lang:`、
/// `|` 表示 OR，日期写作 `date:YYYYMMDD..YYYYMMDD`
static DIALECT: Dialect = Dialect {
    file_type: "mime:",
    in_title: "title:",
    language: "lang:",
    or_operator: "|",
    date_range: Some(DateSyntax::Compact(RangeSyntax {
        prefix: "date:",
        open: OpenRange::Strict,
    })),
    ..Dialect::STANDARD
};

#[derive(Debug, Default, Clone, Copy)]
pub struct YandexAdapter;

impl YandexAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for YandexAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Yandex
    }

    fn name(&self) -> &'static str {
        "Yandex"
    }

    fn base_url(&self) -> &'static str {
        "https://yandex.com/search/"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn dialect(&self) -> &'static Dialect {
        &DIALECT
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 搜索语法标签
///
/// 每个标签代表一类搜索运算符，适配器通过标签集合声明自己支持哪些语法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxTag {
    /// `site:` 站内搜索
    Site,
    /// `filetype:` 文件类型
    #[serde(rename = "filetype")]
    FileType,
    /// 精确匹配短语
    Exact,
    /// `-word` 排除词
    Exclude,
    /// 关键词 OR 组合
    Or,
    #[serde(rename = "intitle")]
    InTitle,
    #[serde(rename = "inurl")]
    InUrl,
    #[serde(rename = "intext")]
    InText,
    #[serde(rename = "allintitle")]
    AllInTitle,
    Related,
    Cache,
    Wildcard,
    NumberRange,
    DateRange,
    FromUser,
    ToUser,
    Subreddit,
    Language,
    Tag,
}

impl SyntaxTag {
    /// 所有语法标签，顺序与位掩码一致
    pub const ALL: [SyntaxTag; 19] = [
        SyntaxTag::Site,
        SyntaxTag::FileType,
        SyntaxTag::Exact,
        SyntaxTag::Exclude,
        SyntaxTag::Or,
        SyntaxTag::InTitle,
        SyntaxTag::InUrl,
        SyntaxTag::InText,
        SyntaxTag::AllInTitle,
        SyntaxTag::Related,
        SyntaxTag::Cache,
        SyntaxTag::Wildcard,
        SyntaxTag::NumberRange,
        SyntaxTag::DateRange,
        SyntaxTag::FromUser,
        SyntaxTag::ToUser,
        SyntaxTag::Subreddit,
        SyntaxTag::Language,
        SyntaxTag::Tag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::FileType => "filetype",
            Self::Exact => "exact",
            Self::Exclude => "exclude",
            Self::Or => "or",
            Self::InTitle => "intitle",
            Self::InUrl => "inurl",
            Self::InText => "intext",
            Self::AllInTitle => "allintitle",
            Self::Related => "related",
            Self::Cache => "cache",
            Self::Wildcard => "wildcard",
            Self::NumberRange => "number_range",
            Self::DateRange => "date_range",
            Self::FromUser => "from_user",
            Self::ToUser => "to_user",
            Self::Subreddit => "subreddit",
            Self::Language => "language",
            Self::Tag => "tag",
        }
    }

    const fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for SyntaxTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 语法标签集合
///
/// 以位掩码存储，可在常量上下文中构造，适配器的支持声明因此是静态的
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxSet(u32);

impl SyntaxSet {
    pub const EMPTY: SyntaxSet = SyntaxSet(0);

    /// 由标签切片构造集合
    pub const fn of(tags: &[SyntaxTag]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < tags.len() {
            bits |= tags[i].bit();
            i += 1;
        }
        SyntaxSet(bits)
    }

    pub const fn contains(&self, tag: SyntaxTag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub const fn with(self, tag: SyntaxTag) -> Self {
        SyntaxSet(self.0 | tag.bit())
    }

    pub const fn without(self, tag: SyntaxTag) -> Self {
        SyntaxSet(self.0 & !tag.bit())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// 按声明顺序遍历集合中的标签
    pub fn iter(&self) -> impl Iterator<Item = SyntaxTag> + '_ {
        SyntaxTag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }
}

impl fmt::Debug for SyntaxSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<SyntaxTag> for SyntaxSet {
    fn from_iter<I: IntoIterator<Item = SyntaxTag>>(iter: I) -> Self {
        iter.into_iter().fold(SyntaxSet::EMPTY, SyntaxSet::with)
    }
}

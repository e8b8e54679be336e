// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 开放区间（只给出一端）的写法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenRange {
    /// `>=from` / `<=to`
    Comparison,
    /// `>from` / `<to`
    Strict,
    /// `from..` / `..to`
    Dots,
}

/// 区间运算符，例如 `stars:10..100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSyntax {
    pub prefix: &'static str,
    pub open: OpenRange,
}

impl RangeSyntax {
    pub fn render(&self, from: Option<&str>, to: Option<&str>) -> Option<String> {
        let body = match (from, to) {
            (Some(from), Some(to)) => format!("{}..{}", from, to),
            (Some(from), None) => match self.open {
                OpenRange::Comparison => format!(">={}", from),
                OpenRange::Strict => format!(">{}", from),
                OpenRange::Dots => format!("{}..", from),
            },
            (None, Some(to)) => match self.open {
                OpenRange::Comparison => format!("<={}", to),
                OpenRange::Strict => format!("<{}", to),
                OpenRange::Dots => format!("..{}", to),
            },
            (None, None) => return None,
        };
        Some(format!("{}{}", self.prefix, body))
    }
}

/// 日期范围运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSyntax {
    /// 两个独立运算符，例如 `after:2024-01-01 before:2024-12-31`
    Bounds {
        after: &'static str,
        before: &'static str,
    },
    /// 区间写法，日期保持 `YYYY-MM-DD`
    Range(RangeSyntax),
    /// 区间写法，日期压缩为 `YYYYMMDD`
    Compact(RangeSyntax),
}

impl DateSyntax {
    pub fn render(&self, from: Option<&str>, to: Option<&str>) -> Option<String> {
        match self {
            DateSyntax::Bounds { after, before } => {
                let parts: Vec<String> = [
                    from.map(|d| format!("{}{}", after, d)),
                    to.map(|d| format!("{}{}", before, d)),
                ]
                .into_iter()
                .flatten()
                .collect();
                (!parts.is_empty()).then(|| parts.join(" "))
            }
            DateSyntax::Range(range) => range.render(from, to),
            DateSyntax::Compact(range) => {
                let from = from.map(|d| d.replace('-', ""));
                let to = to.map(|d| d.replace('-', ""));
                range.render(from.as_deref(), to.as_deref())
            }
        }
    }
}

/// 标签写法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// `topic:rust`
    Prefix(&'static str),
    /// `[rust]`
    Bracket,
    /// `#rust`
    Hash,
}

impl TagStyle {
    pub fn render(&self, tag: &str) -> String {
        match self {
            TagStyle::Prefix(prefix) => format!("{}{}", prefix, tag),
            TagStyle::Bracket => format!("[{}]", tag),
            TagStyle::Hash => format!("#{}", tag),
        }
    }
}

/// 搜索引擎方言
///
/// 同一类语法在不同引擎上的拼写。适配器以 `Dialect::STANDARD` 为基础，
/// 用结构体更新语法覆盖差异项。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub site: &'static str,
    pub file_type: &'static str,
    pub in_title: &'static str,
    pub in_url: &'static str,
    pub in_text: &'static str,
    pub all_in_title: &'static str,
    pub related: &'static str,
    pub cache: &'static str,
    pub from_user: &'static str,
    pub to_user: &'static str,
    pub subreddit: &'static str,
    pub language: &'static str,
    pub tag: TagStyle,
    pub or_operator: &'static str,
    pub date_range: Option<DateSyntax>,
    pub number_range: Option<RangeSyntax>,
}

impl Dialect {
    pub const STANDARD: Dialect = Dialect {
        site: "site:",
        file_type: "filetype:",
        in_title: "intitle:",
        in_url: "inurl:",
        in_text: "intext:",
        all_in_title: "allintitle:",
        related: "related:",
        cache: "cache:",
        from_user: "from:",
        to_user: "to:",
        subreddit: "subreddit:",
        language: "language:",
        tag: TagStyle::Hash,
        or_operator: "OR",
        date_range: None,
        number_range: None,
    };
}

impl Default for Dialect {
    fn default() -> Self {
        Self::STANDARD
    }
}

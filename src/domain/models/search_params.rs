// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::EngineId;
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};
use serde::{Deserialize, Serialize};

/// 数值范围
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberRange {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// 日期范围，ISO 8601 `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    pub fn from_value(&self) -> Option<&str> {
        non_blank(&self.from)
    }

    pub fn to_value(&self) -> Option<&str> {
        non_blank(&self.to)
    }

    pub fn is_empty(&self) -> bool {
        self.from_value().is_none() && self.to_value().is_none()
    }
}

/// 搜索参数
///
/// 与引擎无关的规范化请求对象。适配器从不修改它，只从中派生查询字符串。
/// 字段名使用 camelCase 序列化，以便与历史记录中保存的数据保持兼容。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    /// 自由文本关键词
    pub keyword: String,
    /// 目标搜索引擎
    pub engine: EngineId,

    // 旧版单值字段
    pub site: Option<String>,
    pub file_type: Option<String>,
    pub exact_match: Option<String>,
    pub from_user: Option<String>,
    pub to_user: Option<String>,

    // 多值字段
    pub exact_matches: Vec<String>,
    pub sites: Vec<String>,
    pub file_types: Vec<String>,
    pub from_users: Vec<String>,
    pub to_users: Vec<String>,
    pub subreddits: Vec<String>,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    pub exclude_words: Vec<String>,
    pub or_keywords: Vec<String>,

    pub in_title: Option<String>,
    pub in_url: Option<String>,
    pub in_text: Option<String>,
    pub all_in_title: Option<String>,
    pub related_site: Option<String>,
    pub cache_site: Option<String>,
    pub wildcard_query: Option<String>,

    pub number_range: Option<NumberRange>,
    pub date_range: Option<DateRange>,
}

impl SearchParams {
    pub fn new(keyword: impl Into<String>, engine: EngineId) -> Self {
        Self {
            keyword: keyword.into(),
            engine,
            ..Default::default()
        }
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn with_sites<I, S>(mut self, sites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sites = sites.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    pub fn with_exact_match(mut self, phrase: impl Into<String>) -> Self {
        self.exact_match = Some(phrase.into());
        self
    }

    pub fn with_exclude_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.date_range = Some(DateRange::new(from, to));
        self
    }

    /// 去掉首尾空白后的关键词，内部空白原样保留；拼接查询时只使用这个值
    pub fn keyword_value(&self) -> Option<&str> {
        let keyword = self.keyword.trim();
        (!keyword.is_empty()).then_some(keyword)
    }

    /// 站点：旧版 `site` 在前，随后是 `sites`
    pub fn site_values(&self) -> Vec<String> {
        merge_values(&self.site, &self.sites)
    }

    pub fn file_type_values(&self) -> Vec<String> {
        merge_values(&self.file_type, &self.file_types)
    }

    pub fn exact_values(&self) -> Vec<String> {
        merge_values(&self.exact_match, &self.exact_matches)
    }

    pub fn from_user_values(&self) -> Vec<String> {
        merge_values(&self.from_user, &self.from_users)
    }

    pub fn to_user_values(&self) -> Vec<String> {
        merge_values(&self.to_user, &self.to_users)
    }

    pub fn date_range_value(&self) -> Option<&DateRange> {
        self.date_range.as_ref().filter(|range| !range.is_empty())
    }

    pub fn number_range_value(&self) -> Option<&NumberRange> {
        self.number_range.as_ref().filter(|range| !range.is_empty())
    }

    /// 参数中实际填写了哪些语法
    pub fn requested_syntax(&self) -> SyntaxSet {
        SyntaxTag::ALL
            .into_iter()
            .filter(|tag| self.has_syntax(*tag))
            .collect()
    }

    fn has_syntax(&self, tag: SyntaxTag) -> bool {
        match tag {
            SyntaxTag::Site => !self.site_values().is_empty(),
            SyntaxTag::FileType => !self.file_type_values().is_empty(),
            SyntaxTag::Exact => !self.exact_values().is_empty(),
            SyntaxTag::Exclude => has_values(&self.exclude_words),
            SyntaxTag::Or => has_values(&self.or_keywords),
            SyntaxTag::InTitle => non_blank(&self.in_title).is_some(),
            SyntaxTag::InUrl => non_blank(&self.in_url).is_some(),
            SyntaxTag::InText => non_blank(&self.in_text).is_some(),
            SyntaxTag::AllInTitle => non_blank(&self.all_in_title).is_some(),
            SyntaxTag::Related => non_blank(&self.related_site).is_some(),
            SyntaxTag::Cache => non_blank(&self.cache_site).is_some(),
            SyntaxTag::Wildcard => non_blank(&self.wildcard_query).is_some(),
            SyntaxTag::NumberRange => self.number_range_value().is_some(),
            SyntaxTag::DateRange => self.date_range_value().is_some(),
            SyntaxTag::FromUser => !self.from_user_values().is_empty(),
            SyntaxTag::ToUser => !self.to_user_values().is_empty(),
            SyntaxTag::Subreddit => has_values(&self.subreddits),
            SyntaxTag::Language => has_values(&self.languages),
            SyntaxTag::Tag => has_values(&self.tags),
        }
    }

    /// 返回只保留 `supported` 中语法的新参数对象
    pub fn retain_syntax(&self, supported: SyntaxSet) -> SearchParams {
        let mut params = self.clone();
        for tag in SyntaxTag::ALL {
            if !supported.contains(tag) {
                params.clear_syntax(tag);
            }
        }
        params
    }

    fn clear_syntax(&mut self, tag: SyntaxTag) {
        match tag {
            SyntaxTag::Site => {
                self.site = None;
                self.sites.clear();
            }
            SyntaxTag::FileType => {
                self.file_type = None;
                self.file_types.clear();
            }
            SyntaxTag::Exact => {
                self.exact_match = None;
                self.exact_matches.clear();
            }
            SyntaxTag::Exclude => self.exclude_words.clear(),
            SyntaxTag::Or => self.or_keywords.clear(),
            SyntaxTag::InTitle => self.in_title = None,
            SyntaxTag::InUrl => self.in_url = None,
            SyntaxTag::InText => self.in_text = None,
            SyntaxTag::AllInTitle => self.all_in_title = None,
            SyntaxTag::Related => self.related_site = None,
            SyntaxTag::Cache => self.cache_site = None,
            SyntaxTag::Wildcard => self.wildcard_query = None,
            SyntaxTag::NumberRange => self.number_range = None,
            SyntaxTag::DateRange => self.date_range = None,
            SyntaxTag::FromUser => {
                self.from_user = None;
                self.from_users.clear();
            }
            SyntaxTag::ToUser => {
                self.to_user = None;
                self.to_users.clear();
            }
            SyntaxTag::Subreddit => self.subreddits.clear(),
            SyntaxTag::Language => self.languages.clear(),
            SyntaxTag::Tag => self.tags.clear(),
        }
    }
}

/// 去除首尾空白后非空的值
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn has_values(values: &[String]) -> bool {
    values.iter().any(|value| !value.trim().is_empty())
}

/// 合并单值与多值字段：去空白、去空值、保序去重
pub fn merge_values(legacy: &Option<String>, values: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let candidates = non_blank(legacy)
        .into_iter()
        .chain(values.iter().map(|value| value.trim()));
    for value in candidates {
        if !value.is_empty() && !merged.iter().any(|existing| existing == value) {
            merged.push(value.to_string());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_values_keeps_legacy_first() {
        let merged = merge_values(
            &Some(" a.com ".to_string()),
            &["b.com".to_string(), "a.com".to_string(), "  ".to_string()],
        );
        assert_eq!(merged, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_requested_syntax_ignores_blank_values() {
        let params = SearchParams {
            site: Some("   ".to_string()),
            exclude_words: vec!["".to_string()],
            in_title: Some("rust".to_string()),
            date_range: Some(DateRange::default()),
            ..SearchParams::new("test", EngineId::Google)
        };
        let requested = params.requested_syntax();
        assert!(requested.contains(SyntaxTag::InTitle));
        assert!(!requested.contains(SyntaxTag::Site));
        assert!(!requested.contains(SyntaxTag::Exclude));
        assert!(!requested.contains(SyntaxTag::DateRange));
    }

    #[test]
    fn test_retain_syntax_clears_both_legacy_and_multi_fields() {
        let params = SearchParams {
            site: Some("a.com".to_string()),
            sites: vec!["b.com".to_string()],
            in_url: Some("docs".to_string()),
            ..SearchParams::new("test", EngineId::Startpage)
        };
        let degraded = params.retain_syntax(SyntaxSet::of(&[SyntaxTag::InUrl]));
        assert_eq!(degraded.site, None);
        assert!(degraded.sites.is_empty());
        assert_eq!(degraded.in_url.as_deref(), Some("docs"));
        assert_eq!(degraded.keyword, "test");
        // 输入保持不变
        assert_eq!(params.sites, vec!["b.com"]);
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_fields() {
        let params: SearchParams = serde_json::from_str(
            r#"{"keyword":"Vue教程","engine":"baidu","fileType":"pdf","dateRange":{"from":"2024-01-01"}}"#,
        )
        .unwrap();
        assert_eq!(params.engine, EngineId::Baidu);
        assert_eq!(params.file_type.as_deref(), Some("pdf"));
        assert_eq!(
            params.date_range.as_ref().and_then(|r| r.from_value()),
            Some("2024-01-01")
        );
        assert!(params.sites.is_empty());
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 共享校验规则
//!
//! 每条规则是一个纯函数，接收 `SearchParams` 的相关片段，返回零条或多条违例。
//! 适配器组合这些规则，再追加引擎特有的规则。

use crate::domain::models::search_params::{DateRange, NumberRange, SearchParams};
use crate::domain::models::validation_result::ValidationResult;
use crate::domain::search::syntax::SyntaxTag;
use crate::utils::url_utils::normalize_domain;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// 关键词长度告警阈值（字符）
pub const MAX_KEYWORD_CHARS: usize = 2000;

/// 常见文件类型
pub const COMMON_FILE_TYPES: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "csv", "rtf", "odt", "ods", "odp",
    "epub", "md", "html", "htm", "xml", "json", "ps", "kml", "kmz", "swf",
];

static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$")
        .expect("domain pattern is valid")
});

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

/// 违例严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// 规则违例
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuleViolation {
    #[error("keyword or exact match required")]
    MissingQuery,

    #[error("site domain format invalid: {0}")]
    InvalidDomain(String),

    #[error("date must be a valid YYYY-MM-DD date: {0}")]
    InvalidDate(String),

    #[error("start date is after end date: {from} > {to}")]
    DateOrder { from: String, to: String },

    #[error("number range minimum is greater than maximum: {min} > {max}")]
    NumberRangeOrder { min: f64, max: f64 },

    #[error("uncommon file type: {0}")]
    UncommonFileType(String),

    #[error("keyword exceeds {max} characters and may be truncated by the search engine")]
    KeywordTooLong { max: usize },

    #[error("{engine} does not support {tag}; it will be ignored")]
    UnsupportedSyntax { engine: String, tag: SyntaxTag },

    #[error("{engine} only reads the first {max} characters of a query")]
    EngineKeywordLimit { engine: String, max: usize },

    #[error("{engine} ignores words beyond the first {max}")]
    EngineWordLimit { engine: String, max: usize },

    #[error("exact phrase exceeds {max} characters: {phrase}")]
    ExactPhraseTooLong { phrase: String, max: usize },

    #[error("invalid user handle: {0}")]
    InvalidHandle(String),

    #[error("invalid subreddit name: {0}")]
    InvalidSubreddit(String),
}

impl RuleViolation {
    pub fn severity(&self) -> Severity {
        match self {
            RuleViolation::UncommonFileType(_)
            | RuleViolation::KeywordTooLong { .. }
            | RuleViolation::UnsupportedSyntax { .. }
            | RuleViolation::EngineKeywordLimit { .. }
            | RuleViolation::EngineWordLimit { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// 主机名是否合法（需先经过 `normalize_domain`）
pub fn is_valid_domain(domain: &str) -> bool {
    domain.len() <= 253 && DOMAIN_RE.is_match(domain)
}

/// 严格解析 `YYYY-MM-DD`
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !ISO_DATE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// 查询是否有可检索的内容
///
/// 调用方应传入降级后的参数，不支持的字段不能让查询“看起来”有内容。
/// 排除词只做减法，单独出现不算内容。
pub fn check_query_present(params: &SearchParams) -> Vec<RuleViolation> {
    let has_values = |values: &[String]| values.iter().any(|value| !value.trim().is_empty());
    let has_text = params.keyword_value().is_some()
        || !params.exact_values().is_empty()
        || !params.site_values().is_empty()
        || !params.file_type_values().is_empty()
        || !params.from_user_values().is_empty()
        || !params.to_user_values().is_empty()
        || has_values(&params.subreddits)
        || has_values(&params.languages)
        || has_values(&params.tags)
        || has_values(&params.or_keywords);
    if has_text {
        Vec::new()
    } else {
        vec![RuleViolation::MissingQuery]
    }
}

pub fn check_domains<'a, I>(domains: I) -> Vec<RuleViolation>
where
    I: IntoIterator<Item = &'a str>,
{
    domains
        .into_iter()
        .filter(|domain| !is_valid_domain(&normalize_domain(domain)))
        .map(|domain| RuleViolation::InvalidDomain(domain.to_string()))
        .collect()
}

pub fn check_date_format(range: &DateRange) -> Vec<RuleViolation> {
    [range.from_value(), range.to_value()]
        .into_iter()
        .flatten()
        .filter(|value| parse_iso_date(value).is_none())
        .map(|value| RuleViolation::InvalidDate(value.to_string()))
        .collect()
}

/// 只有两端都能解析时才比较先后
pub fn check_date_order(range: &DateRange) -> Vec<RuleViolation> {
    let (Some(from), Some(to)) = (range.from_value(), range.to_value()) else {
        return Vec::new();
    };
    match (parse_iso_date(from), parse_iso_date(to)) {
        (Some(start), Some(end)) if start > end => vec![RuleViolation::DateOrder {
            from: from.to_string(),
            to: to.to_string(),
        }],
        _ => Vec::new(),
    }
}

pub fn check_number_range(range: &NumberRange) -> Vec<RuleViolation> {
    match (range.min, range.max) {
        (Some(min), Some(max)) if min > max => vec![RuleViolation::NumberRangeOrder { min, max }],
        _ => Vec::new(),
    }
}

pub fn check_file_types(file_types: &[String]) -> Vec<RuleViolation> {
    file_types
        .iter()
        .filter(|file_type| {
            let ext = file_type.trim_start_matches('.').to_lowercase();
            !COMMON_FILE_TYPES.contains(&ext.as_str())
        })
        .map(|file_type| RuleViolation::UncommonFileType(file_type.clone()))
        .collect()
}

pub fn check_keyword_length(keyword: &str, max: usize) -> Vec<RuleViolation> {
    if keyword.chars().count() > max {
        vec![RuleViolation::KeywordTooLong { max }]
    } else {
        Vec::new()
    }
}

/// 组合全部共享规则
///
/// 非空规则作用于降级后的参数，不支持的字段不能让查询“看起来”有内容；
/// 其余规则作用于原始参数。
pub fn apply_shared_rules(
    original: &SearchParams,
    degraded: &SearchParams,
    result: &mut ValidationResult,
) {
    result.extend(check_query_present(degraded));

    let sites = original.site_values();
    let domains = sites
        .iter()
        .map(String::as_str)
        .chain(original.related_site.as_deref())
        .chain(original.cache_site.as_deref())
        .filter(|domain| !domain.trim().is_empty());
    result.extend(check_domains(domains));

    if let Some(range) = original.date_range_value() {
        result.extend(check_date_format(range));
        result.extend(check_date_order(range));
    }

    if let Some(range) = degraded.number_range_value() {
        result.extend(check_number_range(range));
    }

    result.extend(check_file_types(&original.file_type_values()));
    result.extend(check_keyword_length(&original.keyword, MAX_KEYWORD_CHARS));
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 查询拼接
//!
//! 按固定顺序输出语法片段：关键词 → 站点类 → 文件类型 → 精确短语 →
//! 用户范围 → 其它引擎语法 → 排除词 → 日期范围。

use crate::domain::models::search_params::{non_blank, SearchParams};
use crate::domain::search::dialect::Dialect;
use crate::utils::url_utils::normalize_domain;

/// 查询片段
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Single(String),
    /// 同类多值，以 OR 连接
    Group(Vec<String>),
}

#[derive(Debug, Default)]
struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    fn push(&mut self, value: Option<String>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.tokens.push(Token::Single(value));
        }
    }

    fn push_group<I: IntoIterator<Item = String>>(&mut self, values: I) {
        let values: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
        match values.len() {
            0 => {}
            1 => self.tokens.extend(values.into_iter().map(Token::Single)),
            _ => self.tokens.push(Token::Group(values)),
        }
    }

    fn render(self, or_operator: &str) -> String {
        let wrap = self.tokens.len() > 1;
        let separator = format!(" {} ", or_operator);
        self.tokens
            .into_iter()
            .map(|token| match token {
                Token::Single(value) => value,
                Token::Group(values) if wrap => format!("({})", values.join(&separator)),
                Token::Group(values) => values.join(&separator),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn strip_quotes(value: &str) -> String {
    value.replace('"', "").trim().to_string()
}

/// 精确短语总是加引号
pub fn quote_phrase(value: &str) -> String {
    let inner = strip_quotes(value);
    if inner.is_empty() {
        String::new()
    } else {
        format!("\"{}\"", inner)
    }
}

/// 含空白时才加引号
pub fn quote_if_spaced(value: &str) -> String {
    let inner = strip_quotes(value);
    if inner.chars().any(char::is_whitespace) {
        format!("\"{}\"", inner)
    } else {
        inner
    }
}

fn prefixed(prefix: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{}{}", prefix, value)
    }
}

fn domain_token(prefix: &str, raw: &str) -> String {
    prefixed(prefix, &normalize_domain(raw))
}

fn file_type_token(prefix: &str, raw: &str) -> String {
    prefixed(prefix, &raw.trim().trim_start_matches('.').to_lowercase())
}

fn handle_token(prefix: &str, raw: &str) -> String {
    prefixed(prefix, raw.trim().trim_start_matches('@'))
}

fn subreddit_token(prefix: &str, raw: &str) -> String {
    let name = raw.trim();
    let name = name
        .strip_prefix("/r/")
        .or_else(|| name.strip_prefix("r/"))
        .unwrap_or(name);
    prefixed(prefix, name)
}

fn format_number(value: f64) -> String {
    format!("{}", value)
}

fn clean(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// 按方言拼接纯文本查询（调用方负责事先降级）
pub fn compose(dialect: &Dialect, params: &SearchParams) -> String {
    let mut tokens = TokenList::default();

    tokens.push(params.keyword_value().map(str::to_string));

    // 站点类
    tokens.push_group(
        params
            .site_values()
            .iter()
            .map(|site| domain_token(dialect.site, site)),
    );
    tokens.push(non_blank(&params.related_site).map(|d| domain_token(dialect.related, d)));
    tokens.push(non_blank(&params.cache_site).map(|d| domain_token(dialect.cache, d)));

    tokens.push_group(
        params
            .file_type_values()
            .iter()
            .map(|ext| file_type_token(dialect.file_type, ext)),
    );

    tokens.push_group(params.exact_values().iter().map(|p| quote_phrase(p)));

    // 用户范围
    tokens.push_group(
        params
            .from_user_values()
            .iter()
            .map(|u| handle_token(dialect.from_user, u)),
    );
    tokens.push_group(
        params
            .to_user_values()
            .iter()
            .map(|u| handle_token(dialect.to_user, u)),
    );

    // 其它引擎语法
    tokens.push(non_blank(&params.in_title).map(|v| prefixed(dialect.in_title, &quote_if_spaced(v))));
    tokens.push(non_blank(&params.all_in_title).map(|v| prefixed(dialect.all_in_title, &strip_quotes(v))));
    tokens.push(non_blank(&params.in_url).map(|v| prefixed(dialect.in_url, &quote_if_spaced(v))));
    tokens.push(non_blank(&params.in_text).map(|v| prefixed(dialect.in_text, &quote_if_spaced(v))));
    tokens.push(non_blank(&params.wildcard_query).map(quote_phrase));
    if let (Some(syntax), Some(range)) = (dialect.number_range, params.number_range_value()) {
        let min = range.min.map(format_number);
        let max = range.max.map(format_number);
        tokens.push(syntax.render(min.as_deref(), max.as_deref()));
    }
    tokens.push_group(clean(&params.subreddits).map(|s| subreddit_token(dialect.subreddit, s)));
    tokens.push_group(clean(&params.languages).map(|l| prefixed(dialect.language, l)));
    tokens.push_group(
        clean(&params.tags).map(|t| dialect.tag.render(t.trim_start_matches('#'))),
    );
    tokens.push_group(clean(&params.or_keywords).map(quote_if_spaced));

    // 排除词，逐个输出
    for word in clean(&params.exclude_words) {
        tokens.push(Some(prefixed("-", &quote_if_spaced(word))));
    }

    if let (Some(syntax), Some(range)) = (dialect.date_range, params.date_range_value()) {
        tokens.push(syntax.render(range.from_value(), range.to_value()));
    }

    tokens.render(dialect.or_operator)
}

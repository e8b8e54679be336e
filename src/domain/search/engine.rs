// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::models::validation_result::ValidationResult;
use crate::domain::search::dialect::Dialect;
use crate::domain::search::query_builder;
use crate::domain::search::suggestions;
use crate::domain::search::syntax::SyntaxSet;
use crate::utils::validators::{self, RuleViolation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("Unknown search engine: {0}")]
    UnknownEngine(String),
}

/// 支持的搜索引擎标识
///
/// 封闭集合，编译期确定；适配器注册表与 URL 工具共享此枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineId {
    Baidu,
    #[default]
    Google,
    Bing,
    DuckDuckGo,
    Yandex,
    Yahoo,
    Startpage,
    Naver,
    Sogou,
    So360,
    Brave,
    Qwant,
    Ecosia,
    Twitter,
    Reddit,
    GitHub,
    StackOverflow,
}

impl EngineId {
    pub const ALL: [EngineId; 17] = [
        EngineId::Baidu,
        EngineId::Google,
        EngineId::Bing,
        EngineId::DuckDuckGo,
        EngineId::Yandex,
        EngineId::Yahoo,
        EngineId::Startpage,
        EngineId::Naver,
        EngineId::Sogou,
        EngineId::So360,
        EngineId::Brave,
        EngineId::Qwant,
        EngineId::Ecosia,
        EngineId::Twitter,
        EngineId::Reddit,
        EngineId::GitHub,
        EngineId::StackOverflow,
    ];

    /// 获取引擎标识字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baidu => "baidu",
            Self::Google => "google",
            Self::Bing => "bing",
            Self::DuckDuckGo => "duckduckgo",
            Self::Yandex => "yandex",
            Self::Yahoo => "yahoo",
            Self::Startpage => "startpage",
            Self::Naver => "naver",
            Self::Sogou => "sogou",
            Self::So360 => "so360",
            Self::Brave => "brave",
            Self::Qwant => "qwant",
            Self::Ecosia => "ecosia",
            Self::Twitter => "twitter",
            Self::Reddit => "reddit",
            Self::GitHub => "github",
            Self::StackOverflow => "stackoverflow",
        }
    }

    /// 查询文本所在的 URL 参数名
    ///
    /// 构建查询与反向提取查询都只读这一张表
    pub fn query_param(&self) -> &'static str {
        match self {
            Self::Baidu => "wd",
            Self::Yandex => "text",
            Self::Yahoo => "p",
            Self::Startpage | Self::Naver | Self::Sogou => "query",
            Self::Google
            | Self::Bing
            | Self::DuckDuckGo
            | Self::So360
            | Self::Brave
            | Self::Qwant
            | Self::Ecosia
            | Self::Twitter
            | Self::Reddit
            | Self::GitHub
            | Self::StackOverflow => "q",
        }
    }

    /// 用于从 URL 识别引擎的域名
    ///
    /// 以 `.` 结尾的是不限顶级域的名称（`google.` 可匹配 `google.co.uk`），
    /// 其余为完整域名，匹配自身及其子域名
    pub fn domain_patterns(&self) -> &'static [&'static str] {
        match self {
            Self::Baidu => &["baidu.com"],
            Self::Google => &["google."],
            Self::Bing => &["bing.com"],
            Self::DuckDuckGo => &["duckduckgo.com"],
            Self::Yandex => &["yandex."],
            Self::Yahoo => &["search.yahoo."],
            Self::Startpage => &["startpage.com"],
            Self::Naver => &["naver.com"],
            Self::Sogou => &["sogou.com"],
            Self::So360 => &["so.com"],
            Self::Brave => &["search.brave.com"],
            Self::Qwant => &["qwant.com"],
            Self::Ecosia => &["ecosia.org"],
            Self::Twitter => &["twitter.com", "x.com"],
            Self::Reddit => &["reddit.com"],
            Self::GitHub => &["github.com"],
            Self::StackOverflow => &["stackoverflow.com"],
        }
    }

    /// 主机名是否属于该引擎，按完整的域名标签比较
    pub fn matches_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_lowercase();
        self.domain_patterns().iter().any(|pattern| {
            if pattern.ends_with('.') {
                host.starts_with(pattern) || host.contains(&format!(".{}", pattern))
            } else {
                host == *pattern || host.ends_with(&format!(".{}", pattern))
            }
        })
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineId {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        EngineId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| AdapterError::UnknownEngine(s.to_string()))
    }
}

/// 搜索语法适配器
///
/// 每个搜索引擎一个无状态实现。默认方法实现了通用流程：
/// 降级不支持的语法、按引擎方言拼接查询、编码为 URL、运行共享校验规则。
/// 具体引擎只需声明基础信息，并按需覆盖 `check_engine_rules` 与
/// `search_suggestions`。
pub trait SearchAdapter: Send + Sync {
    fn engine(&self) -> EngineId;

    /// 展示用的引擎名称
    fn name(&self) -> &'static str;

    /// 搜索入口地址
    fn base_url(&self) -> &'static str;

    fn supported_syntax(&self) -> SyntaxSet;

    /// 运算符拼写方式
    fn dialect(&self) -> &'static Dialect {
        &Dialect::STANDARD
    }

    /// 生成纯文本查询（未编码）
    fn compose_query(&self, params: &SearchParams) -> String {
        let degraded = self.degrade_syntax(params);
        query_builder::compose(self.dialect(), &degraded)
    }

    /// 生成完整的搜索 URL
    ///
    /// 纯函数；不支持的语法被静默丢弃，空值直接跳过，从不失败
    fn build_query(&self, params: &SearchParams) -> String {
        let query = self.compose_query(params);
        let url = format!(
            "{}?{}={}",
            self.base_url(),
            self.engine().query_param(),
            urlencoding::encode(&query)
        );
        debug!(engine = %self.engine(), query = %query, "已构建搜索 URL");
        url
    }

    /// 校验参数
    ///
    /// 每次调用返回全新的结果；问题只会体现在 errors/warnings 中
    fn validate_params(&self, params: &SearchParams) -> ValidationResult {
        let supported = self.supported_syntax();
        let degraded = self.degrade_syntax(params);
        let mut result = ValidationResult::new();

        validators::apply_shared_rules(params, &degraded, &mut result);

        for tag in params.requested_syntax().iter() {
            if !supported.contains(tag) {
                result.record(RuleViolation::UnsupportedSyntax {
                    engine: self.name().to_string(),
                    tag,
                });
            }
        }

        self.check_engine_rules(params, &mut result);

        debug!(
            engine = %self.engine(),
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "参数校验完成"
        );
        result
    }

    /// 引擎特有的校验规则
    fn check_engine_rules(&self, _params: &SearchParams, _result: &mut ValidationResult) {}

    /// 清除引擎不支持的字段，返回新的参数对象
    fn degrade_syntax(&self, params: &SearchParams) -> SearchParams {
        params.retain_syntax(self.supported_syntax())
    }

    /// 搜索建议，仅供提示，不会自动应用
    fn search_suggestions(&self, params: &SearchParams) -> Vec<String> {
        suggestions::common_suggestions(self.supported_syntax(), params)
    }
}

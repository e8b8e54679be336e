// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::models::validation_result::ValidationResult;
use crate::domain::search::engine::{EngineId, SearchAdapter};
use crate::domain::search::suggestions::{self, mentions_any};
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};
use crate::utils::validators::RuleViolation;

/// 百度只读取查询的前 38 个字符
pub const BAIDU_MAX_QUERY_CHARS: usize = 38;

const SUPPORTED: SyntaxSet = SyntaxSet::of(&[
    SyntaxTag::Site,
    SyntaxTag::FileType,
    SyntaxTag::Exact,
    SyntaxTag::Exclude,
    SyntaxTag::InTitle,
    SyntaxTag::InUrl,
]);

/// 常见社区站点，命中时建议用 site: 聚焦
const COMMUNITY_SITES: &[(&str, &str)] = &[
    ("知乎", "zhihu.com"),
    ("csdn", "csdn.net"),
    ("掘金", "juejin.cn"),
    ("b站", "bilibili.com"),
];

/// 百度搜索适配器
#[derive(Debug, Default, Clone, Copy)]
pub struct BaiduAdapter;

impl BaiduAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchAdapter for BaiduAdapter {
    fn engine(&self) -> EngineId {
        EngineId::Baidu
    }

    fn name(&self) -> &'static str {
        "百度"
    }

    fn base_url(&self) -> &'static str {
        "https://www.baidu.com/s"
    }

    fn supported_syntax(&self) -> SyntaxSet {
        SUPPORTED
    }

    fn check_engine_rules(&self, params: &SearchParams, result: &mut ValidationResult) {
        if params.keyword.trim().chars().count() > BAIDU_MAX_QUERY_CHARS {
            result.record(RuleViolation::EngineKeywordLimit {
                engine: self.name().to_string(),
                max: BAIDU_MAX_QUERY_CHARS,
            });
        }

        for phrase in params.exact_values() {
            if phrase.chars().count() > BAIDU_MAX_QUERY_CHARS {
                result.record(RuleViolation::ExactPhraseTooLong {
                    phrase,
                    max: BAIDU_MAX_QUERY_CHARS,
                });
            }
        }
    }

    fn search_suggestions(&self, params: &SearchParams) -> Vec<String> {
        let mut hints = suggestions::common_suggestions(SUPPORTED, params);
        let Some(keyword) = params.keyword_value() else {
            return hints;
        };

        if params.site_values().is_empty() {
            for (name, domain) in COMMUNITY_SITES {
                if mentions_any(keyword, &[*name]) {
                    hints.push(format!("使用 site:{} 只看该站点的结果", domain));
                }
            }
        }

        if params.in_title.is_none() && mentions_any(keyword, &["报错", "错误", "error"]) {
            hints.push("报错信息可放入 intitle: 以匹配标题".to_string());
        }

        hints
    }
}

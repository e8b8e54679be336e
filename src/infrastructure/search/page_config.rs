// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::EngineId;
use url::Url;

/// 搜索页识别配置
///
/// 供页面注入侧检测搜索框与结果页使用，与查询构建无关，只共享引擎标识
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngineConfig {
    pub engine: EngineId,
    /// 搜索输入框的 CSS 选择器，按优先级排列
    pub search_box_selectors: &'static [&'static str],
    /// 结果页路径前缀
    pub results_path: &'static str,
}

impl SearchEngineConfig {
    /// 引擎的页面配置；`match` 是穷尽的，新增引擎而缺少配置会在编译期报错
    pub fn for_engine(engine: EngineId) -> &'static SearchEngineConfig {
        match engine {
            EngineId::Baidu => &SearchEngineConfig {
                engine: EngineId::Baidu,
                search_box_selectors: &["#kw", "input[name='wd']"],
                results_path: "/s",
            },
            EngineId::Google => &SearchEngineConfig {
                engine: EngineId::Google,
                search_box_selectors: &["textarea[name='q']", "input[name='q']"],
                results_path: "/search",
            },
            EngineId::Bing => &SearchEngineConfig {
                engine: EngineId::Bing,
                search_box_selectors: &["#sb_form_q", "textarea[name='q']"],
                results_path: "/search",
            },
            EngineId::DuckDuckGo => &SearchEngineConfig {
                engine: EngineId::DuckDuckGo,
                search_box_selectors: &["#search_form_input", "input[name='q']"],
                results_path: "/",
            },
            EngineId::Yandex => &SearchEngineConfig {
                engine: EngineId::Yandex,
                search_box_selectors: &["input[name='text']"],
                results_path: "/search",
            },
            EngineId::Yahoo => &SearchEngineConfig {
                engine: EngineId::Yahoo,
                search_box_selectors: &["#yschsp", "input[name='p']"],
                results_path: "/search",
            },
            EngineId::Startpage => &SearchEngineConfig {
                engine: EngineId::Startpage,
                search_box_selectors: &["#q", "input[name='query']"],
                results_path: "/sp/search",
            },
            EngineId::Naver => &SearchEngineConfig {
                engine: EngineId::Naver,
                search_box_selectors: &["#nx_query", "input[name='query']"],
                results_path: "/search.naver",
            },
            EngineId::Sogou => &SearchEngineConfig {
                engine: EngineId::Sogou,
                search_box_selectors: &["#upquery", "input[name='query']"],
                results_path: "/web",
            },
            EngineId::So360 => &SearchEngineConfig {
                engine: EngineId::So360,
                search_box_selectors: &["#keyword", "input[name='q']"],
                results_path: "/s",
            },
            EngineId::Brave => &SearchEngineConfig {
                engine: EngineId::Brave,
                search_box_selectors: &["#searchbox", "input[name='q']"],
                results_path: "/search",
            },
            EngineId::Qwant => &SearchEngineConfig {
                engine: EngineId::Qwant,
                search_box_selectors: &["input[name='q']"],
                results_path: "/",
            },
            EngineId::Ecosia => &SearchEngineConfig {
                engine: EngineId::Ecosia,
                search_box_selectors: &["input[name='q']"],
                results_path: "/search",
            },
            EngineId::Twitter => &SearchEngineConfig {
                engine: EngineId::Twitter,
                search_box_selectors: &["input[data-testid='SearchBox_Search_Input']"],
                results_path: "/search",
            },
            EngineId::Reddit => &SearchEngineConfig {
                engine: EngineId::Reddit,
                search_box_selectors: &["input[name='q']", "faceplate-search-input"],
                results_path: "/search",
            },
            EngineId::GitHub => &SearchEngineConfig {
                engine: EngineId::GitHub,
                search_box_selectors: &["#query-builder-test", "input[name='q']"],
                results_path: "/search",
            },
            EngineId::StackOverflow => &SearchEngineConfig {
                engine: EngineId::StackOverflow,
                search_box_selectors: &["input[name='q']"],
                results_path: "/search",
            },
        }
    }

    pub fn domains(&self) -> &'static [&'static str] {
        self.engine.domain_patterns()
    }

    /// 当前 URL 是否为该引擎的结果页：域名匹配、路径匹配且带有查询参数
    pub fn is_results_page(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        if !self.engine.matches_host(host) {
            return false;
        }
        if !parsed.path().starts_with(self.results_path) {
            return false;
        }
        let param = self.engine.query_param();
        parsed.query_pairs().any(|(key, _)| key == param)
    }
}

/// 全部引擎的页面配置
pub fn all_configs() -> Vec<&'static SearchEngineConfig> {
    EngineId::ALL
        .into_iter()
        .map(SearchEngineConfig::for_engine)
        .collect()
}

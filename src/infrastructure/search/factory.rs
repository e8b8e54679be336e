// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::{AdapterError, EngineId, SearchAdapter};
use crate::infrastructure::search::baidu::BaiduAdapter;
use crate::infrastructure::search::bing::BingAdapter;
use crate::infrastructure::search::brave::BraveAdapter;
use crate::infrastructure::search::duckduckgo::DuckDuckGoAdapter;
use crate::infrastructure::search::ecosia::EcosiaAdapter;
use crate::infrastructure::search::github::GitHubAdapter;
use crate::infrastructure::search::google::GoogleAdapter;
use crate::infrastructure::search::naver::NaverAdapter;
use crate::infrastructure::search::qwant::QwantAdapter;
use crate::infrastructure::search::reddit::RedditAdapter;
use crate::infrastructure::search::so360::So360Adapter;
use crate::infrastructure::search::sogou::SogouAdapter;
use crate::infrastructure::search::stackoverflow::StackOverflowAdapter;
use crate::infrastructure::search::startpage::StartpageAdapter;
use crate::infrastructure::search::twitter::TwitterAdapter;
use crate::infrastructure::search::yahoo::YahooAdapter;
use crate::infrastructure::search::yandex::YandexAdapter;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::info;

type Registry = HashMap<EngineId, Box<dyn SearchAdapter>>;

/// 适配器注册表
///
/// 进程内只构建一次，之后只读，因此并发访问无需加锁
static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry: Registry = EngineId::ALL
        .into_iter()
        .map(|engine| (engine, create_adapter(engine)))
        .collect();
    info!(count = registry.len(), "搜索适配器注册表已初始化");
    registry
});

/// 创建指定引擎的适配器
///
/// `match` 是穷尽的，新增引擎而忘记注册会在编译期报错
fn create_adapter(engine: EngineId) -> Box<dyn SearchAdapter> {
    match engine {
        EngineId::Baidu => Box::new(BaiduAdapter::new()),
        EngineId::Google => Box::new(GoogleAdapter::new()),
        EngineId::Bing => Box::new(BingAdapter::new()),
        EngineId::DuckDuckGo => Box::new(DuckDuckGoAdapter::new()),
        EngineId::Yandex => Box::new(YandexAdapter::new()),
        EngineId::Yahoo => Box::new(YahooAdapter::new()),
        EngineId::Startpage => Box::new(StartpageAdapter::new()),
        EngineId::Naver => Box::new(NaverAdapter::new()),
        EngineId::Sogou => Box::new(SogouAdapter::new()),
        EngineId::So360 => Box::new(So360Adapter::new()),
        EngineId::Brave => Box::new(BraveAdapter::new()),
        EngineId::Qwant => Box::new(QwantAdapter::new()),
        EngineId::Ecosia => Box::new(EcosiaAdapter::new()),
        EngineId::Twitter => Box::new(TwitterAdapter::new()),
        EngineId::Reddit => Box::new(RedditAdapter::new()),
        EngineId::GitHub => Box::new(GitHubAdapter::new()),
        EngineId::StackOverflow => Box::new(StackOverflowAdapter::new()),
    }
}

/// 搜索适配器工厂
///
/// 提供按引擎标识获取适配器的统一入口；实例全局唯一、不会重复构建
pub struct AdapterFactory;

impl AdapterFactory {
    /// 获取适配器，注册表缺失视为配置错误并直接 panic
    pub fn get_adapter(engine: EngineId) -> &'static dyn SearchAdapter {
        match Self::try_get_adapter(engine) {
            Ok(adapter) => adapter,
            Err(e) => panic!("adapter registry is out of sync with EngineId: {}", e),
        }
    }

    pub fn try_get_adapter(engine: EngineId) -> Result<&'static dyn SearchAdapter, AdapterError> {
        REGISTRY
            .get(&engine)
            .map(|adapter| &**adapter)
            .ok_or_else(|| AdapterError::UnknownEngine(engine.to_string()))
    }

    /// 按字符串标识获取适配器
    pub fn get_adapter_by_name(name: &str) -> Result<&'static dyn SearchAdapter, AdapterError> {
        let engine: EngineId = name.parse()?;
        Self::try_get_adapter(engine)
    }

    /// 所有已注册的引擎
    pub fn registered_engines() -> Vec<EngineId> {
        EngineId::ALL
            .into_iter()
            .filter(|engine| REGISTRY.contains_key(engine))
            .collect()
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::history::SearchHistoryEntry;
use crate::domain::models::panel_message::{ApplyQueryPayload, PanelEnvelope};
use crate::domain::models::search_params::SearchParams;
use crate::domain::models::validation_result::ValidationResult;
use crate::domain::search::engine::EngineId;
use crate::infrastructure::search::factory::AdapterFactory;
use crate::utils::url_utils;
use serde::Serialize;
use tracing::{debug, info};

/// 一次查询准备的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedQuery {
    pub validation: ValidationResult,
    /// 校验未通过时为 `None`
    pub url: Option<String>,
    pub suggestions: Vec<String>,
}

/// 查询服务
///
/// 串起 UI 层的完整流程：取适配器、校验、构建 URL、记录与恢复历史、
/// 生成发往宿主页面的面板消息。本身不做任何 I/O。
#[derive(Debug, Clone, Default)]
pub struct QueryService {
    settings: Settings,
}

impl QueryService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// 以配置的默认引擎创建参数
    pub fn params_for(&self, keyword: impl Into<String>) -> SearchParams {
        SearchParams::new(keyword, self.settings.engine.default_engine)
    }

    /// 校验并构建查询
    pub fn prepare(&self, params: &SearchParams) -> PreparedQuery {
        let adapter = AdapterFactory::get_adapter(params.engine);
        let validation = adapter.validate_params(params);
        let url = validation.is_valid.then(|| adapter.build_query(params));
        let suggestions = if self.settings.suggestions.enabled {
            adapter.search_suggestions(params)
        } else {
            Vec::new()
        };

        debug!(
            engine = %params.engine,
            valid = validation.is_valid,
            suggestions = suggestions.len(),
            "查询准备完成"
        );
        PreparedQuery {
            validation,
            url,
            suggestions,
        }
    }

    /// 构建查询并生成历史条目
    pub fn record_history(&self, params: &SearchParams) -> SearchHistoryEntry {
        let url = AdapterFactory::get_adapter(params.engine).build_query(params);
        let entry = SearchHistoryEntry::record(params, url);
        info!(id = %entry.id, engine = %entry.engine, "已记录搜索历史");
        entry
    }

    /// 从历史条目重新构建 URL
    ///
    /// 以条目的 `engine` 为准，并按当前适配器规则重新生成，
    /// 不复用已保存的 `generated_query`
    pub fn restore_from_history(&self, entry: &SearchHistoryEntry) -> String {
        let mut params = entry.syntax.clone();
        params.engine = entry.engine;
        AdapterFactory::get_adapter(entry.engine).build_query(&params)
    }

    /// 生成要求宿主页面填入查询的面板消息
    pub fn apply_query_message(
        &self,
        search_url: &str,
        engine: Option<EngineId>,
    ) -> PanelEnvelope<ApplyQueryPayload> {
        let engine = engine.or_else(|| url_utils::detect_engine_from_url(search_url));
        let payload = ApplyQueryPayload {
            query: url_utils::extract_and_decode_query(search_url, engine),
            auto_search: self.settings.panel.auto_search,
            search_url: search_url.to_string(),
        };
        PanelEnvelope::apply_query(self.settings.panel.source.clone(), payload)
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::search::engine::EngineId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 搜索历史条目
///
/// 由存储层持久化。`syntax` 保存生成查询时使用的完整参数，
/// 恢复历史时据此重新构建 URL，而不是直接复用 `generated_query`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    /// 条目唯一标识符
    pub id: Uuid,
    pub keyword: String,
    pub engine: EngineId,
    /// 生成查询时使用的参数
    pub syntax: SearchParams,
    /// 构建出的完整搜索 URL
    pub generated_query: String,
    pub timestamp: DateTime<Utc>,
}

impl SearchHistoryEntry {
    /// 记录一次搜索
    ///
    /// # 参数
    ///
    /// * `params` - 本次搜索的参数
    /// * `generated_query` - 适配器构建出的 URL
    pub fn record(params: &SearchParams, generated_query: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            keyword: params.keyword.clone(),
            engine: params.engine,
            syntax: params.clone(),
            generated_query: generated_query.into(),
            timestamp: Utc::now(),
        }
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 浮动面板发往宿主页面、要求填入查询的消息类型
pub const APPLY_QUERY: &str = "APPLY_QUERY";

/// 浮动面板与宿主页面之间传递的消息信封
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelEnvelope<T> {
    /// 发送方标识，接收方据此过滤无关消息
    pub source: String,
    pub message: PanelMessage<T>,
    /// 毫秒级 Unix 时间戳
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelMessage<T> {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: T,
}

/// 应用查询的负载
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyQueryPayload {
    /// 解码后的纯文本查询
    pub query: String,
    /// 填入后是否立即提交
    pub auto_search: bool,
    pub search_url: String,
}

impl<T> PanelEnvelope<T> {
    pub fn new(source: impl Into<String>, kind: impl Into<String>, payload: T) -> Self {
        Self {
            source: source.into(),
            message: PanelMessage {
                kind: kind.into(),
                payload,
            },
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

impl PanelEnvelope<ApplyQueryPayload> {
    pub fn apply_query(source: impl Into<String>, payload: ApplyQueryPayload) -> Self {
        Self::new(source, APPLY_QUERY, payload)
    }
}

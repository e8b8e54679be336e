// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 搜索参数（search_params）：与引擎无关的查询请求
/// - 校验结果（validation_result）：错误与警告的累积
/// - 历史记录（history）：存储层持久化的搜索记录
/// - 面板消息（panel_message）：浮动面板与宿主页面之间的消息信封
pub mod history;
pub mod panel_message;
pub mod search_params;
pub mod validation_result;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含查询构建的核心逻辑，包括：
/// - 领域模型（models）：搜索参数、校验结果、历史与消息
/// - 搜索（search）：适配器契约、语法标签、方言与拼接规则
/// - 服务（services）：串联适配器与历史记录的查询服务
///
/// 领域层只处理纯数据，不执行任何 I/O。
pub mod models;
pub mod search;
pub mod services;

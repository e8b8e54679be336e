// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理默认引擎、面板行为等配置项和环境变量
pub mod config;

/// 领域模块
///
/// 包含搜索参数、适配器契约、查询拼接规则和领域服务
pub mod domain;

/// 基础设施模块
///
/// 各搜索引擎适配器的具体实现与注册表
pub mod infrastructure;

/// 工具模块
///
/// URL 编解码、校验规则和遥测
pub mod utils;

pub use domain::models::search_params::SearchParams;
pub use domain::models::validation_result::ValidationResult;
pub use domain::search::{EngineId, SearchAdapter, SyntaxTag};
pub use infrastructure::search::AdapterFactory;

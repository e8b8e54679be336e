// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 各搜索引擎的适配器实现、适配器注册表以及页面识别配置
pub mod search;

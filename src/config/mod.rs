// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理默认引擎、浮动面板和搜索建议等配置项
pub mod settings;

pub use settings::Settings;

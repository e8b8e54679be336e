// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义适配器接口、引擎标识、语法标签与方言，以及与引擎无关的查询拼接和建议逻辑
pub mod dialect;
pub mod engine;
pub mod query_builder;
pub mod suggestions;
pub mod syntax;

pub use engine::{AdapterError, EngineId, SearchAdapter};
pub use syntax::{SyntaxSet, SyntaxTag};

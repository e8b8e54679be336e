// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索适配器模块
///
/// 每个引擎一个适配器文件，由 `factory` 统一注册
pub mod baidu;
pub mod bing;
pub mod brave;
pub mod duckduckgo;
pub mod ecosia;
pub mod factory;
pub mod github;
pub mod google;
pub mod naver;
pub mod page_config;
pub mod qwant;
pub mod reddit;
pub mod so360;
pub mod sogou;
pub mod stackoverflow;
pub mod startpage;
pub mod twitter;
pub mod yahoo;
pub mod yandex;

pub use factory::AdapterFactory;
pub use page_config::SearchEngineConfig;

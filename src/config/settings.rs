// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::EngineId;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_PANEL_SOURCE: &str = "search-helper";

/// 应用程序配置设置
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// 引擎配置
    pub engine: EngineSettings,
    /// 浮动面板配置
    pub panel: PanelSettings,
    /// 搜索建议配置
    pub suggestions: SuggestionSettings,
}

/// 引擎配置设置
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineSettings {
    /// 未指定引擎时使用的默认引擎
    pub default_engine: EngineId,
}

/// 浮动面板配置设置
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PanelSettings {
    /// 填入查询后是否自动提交
    pub auto_search: bool,
    /// 消息信封中的发送方标识
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuggestionSettings {
    pub enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: EngineSettings {
                default_engine: EngineId::Google,
            },
            panel: PanelSettings {
                auto_search: true,
                source: DEFAULT_PANEL_SOURCE.to_string(),
            },
            suggestions: SuggestionSettings { enabled: true },
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 加载顺序：内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// 以 `QUERYFORGE` 为前缀的环境变量（例如 `QUERYFORGE__ENGINE__DEFAULT_ENGINE=bing`）
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败，例如引擎标识无法识别
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("QUERYFORGE").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 在默认值之上叠加一段配置文本，供嵌入方和测试使用
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::with_defaults(Config::builder())?
            .add_source(File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("engine.default_engine", EngineId::Google.as_str())?
            .set_default("panel.auto_search", true)?
            .set_default("panel.source", DEFAULT_PANEL_SOURCE)?
            .set_default("suggestions.enabled", true)
    }
}

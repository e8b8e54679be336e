// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::EngineId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::warn;
use url::Url;

/// 未指定引擎时识别查询参数的优先级，越具体越靠前
const GENERIC_PARAM_PRIORITY: [&str; 5] = ["text", "wd", "p", "query", "q"];

static PARAM_REGEXES: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    EngineId::ALL
        .iter()
        .map(EngineId::query_param)
        .filter_map(|param| build_param_regex(param).map(|re| (param, re)))
        .collect()
});

fn build_param_regex(param: &str) -> Option<Regex> {
    Regex::new(&format!(r"[?&]{}=([^&#]*)", regex::escape(param))).ok()
}

/// 规范化域名：去掉协议、路径、查询串和片段，主机名转小写
pub fn normalize_domain(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .or_else(|| lowered.strip_prefix("//"))
        .unwrap_or(&lowered);
    without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .to_string()
}

/// 百分号转义是否残缺，例如 `%`、`%2`、`%zz`
fn has_malformed_escape(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return true;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    false
}

/// 安全解码
///
/// 先按表单编码约定把 `+` 视为空格再做百分号解码；转义残缺或解码结果不是
/// 合法 UTF-8 时记录日志并原样返回输入。
pub fn safe_decode_uri_component(input: &str) -> String {
    if !input.contains('%') && !input.contains('+') {
        return input.to_string();
    }

    let spaced = input.replace('+', " ");
    if has_malformed_escape(&spaced) {
        warn!(input = %input, "百分号转义不完整，保留原始字符串");
        return input.to_string();
    }

    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            warn!(input = %input, error = %e, "解码失败，保留原始字符串");
            input.to_string()
        }
    }
}

/// 从完整的搜索结果页 URL 中还原用户可读的查询文本
///
/// 指定引擎时按参数名表提取；否则按通用参数优先级猜测。从不失败，
/// URL 无法解析时原样返回。
pub fn extract_and_decode_query(full_url: &str, engine: Option<EngineId>) -> String {
    match engine {
        Some(engine) => extract_engine_query(full_url, engine.query_param()),
        None => extract_generic_query(full_url),
    }
}

fn extract_engine_query(full_url: &str, param: &str) -> String {
    if !full_url.contains('?') {
        return String::new();
    }

    let captured = match PARAM_REGEXES.get(param) {
        Some(re) => re
            .captures(full_url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
        None => build_param_regex(param)
            .and_then(|re| re.captures(full_url).and_then(|caps| caps.get(1)))
            .map(|m| m.as_str().to_string()),
    };
    if let Some(raw) = captured {
        return safe_decode_uri_component(&raw);
    }

    // 参数名本身被转义时（如 `%71=`）正则匹配不到，按原始键值对逐个比较
    match Url::parse(full_url) {
        Ok(parsed) => parsed
            .query()
            .unwrap_or_default()
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| safe_decode_uri_component(key) == param)
            .map(|(_, raw)| safe_decode_uri_component(raw))
            .unwrap_or_default(),
        Err(e) => {
            warn!(url = %full_url, error = %e, "URL 解析失败");
            full_url.to_string()
        }
    }
}

fn extract_generic_query(full_url: &str) -> String {
    let Some((_, query)) = full_url.split_once('?') else {
        return String::new();
    };
    let query = query.split('#').next().unwrap_or_default();

    // 查询串以已知参数开头时直接剥离前缀
    for name in GENERIC_PARAM_PRIORITY {
        if let Some(rest) = query.strip_prefix(name).and_then(|r| r.strip_prefix('=')) {
            let value = rest.split('&').next().unwrap_or_default();
            return safe_decode_uri_component(value);
        }
    }

    for name in GENERIC_PARAM_PRIORITY {
        let found = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(name).and_then(|r| r.strip_prefix('=')));
        if let Some(value) = found {
            return safe_decode_uri_component(value);
        }
    }

    String::new()
}

/// 根据域名识别搜索引擎，首个匹配者胜出
///
/// 缺少协议的地址（如 `www.baidu.com/s?wd=x`）按域名处理
pub fn detect_engine_from_url(url: &str) -> Option<EngineId> {
    let host = match Url::parse(url) {
        Ok(parsed) => parsed.host_str().map(str::to_string),
        Err(_) => Some(normalize_domain(url)),
    }?;

    EngineId::ALL
        .into_iter()
        .find(|engine| engine.matches_host(&host))
}

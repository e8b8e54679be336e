// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_params::SearchParams;
use crate::domain::search::syntax::{SyntaxSet, SyntaxTag};

/// 关键词超过该字符数时建议使用精确匹配
pub const LONG_KEYWORD_CHARS: usize = 30;

const TUTORIAL_HINTS: &[&str] = &["教程", "tutorial", "guide", "手册", "manual"];
const OFFICIAL_HINTS: &[&str] = &["官网", "官方", "official site", "official website", "homepage"];

pub fn mentions_any(keyword: &str, hints: &[&str]) -> bool {
    let lowered = keyword.to_lowercase();
    hints.iter().any(|hint| lowered.contains(hint))
}

pub fn is_tutorial_query(keyword: &str) -> bool {
    mentions_any(keyword, TUTORIAL_HINTS)
}

pub fn is_official_site_query(keyword: &str) -> bool {
    mentions_any(keyword, OFFICIAL_HINTS)
}

/// 通用启发式建议
pub fn common_suggestions(supported: SyntaxSet, params: &SearchParams) -> Vec<String> {
    let mut suggestions = Vec::new();
    let Some(keyword) = params.keyword_value() else {
        return suggestions;
    };

    if supported.contains(SyntaxTag::FileType)
        && params.file_type_values().is_empty()
        && is_tutorial_query(keyword)
    {
        suggestions.push("Add filetype:pdf to find downloadable tutorials and manuals".to_string());
    }

    if supported.contains(SyntaxTag::Site)
        && params.site_values().is_empty()
        && is_official_site_query(keyword)
    {
        suggestions.push("Use site: to limit results to the official domain".to_string());
    }

    if supported.contains(SyntaxTag::Exact)
        && params.exact_values().is_empty()
        && !keyword.contains('"')
        && keyword.chars().count() > LONG_KEYWORD_CHARS
    {
        suggestions.push("Wrap the key phrase in quotes for an exact match".to_string());
    }

    suggestions
}

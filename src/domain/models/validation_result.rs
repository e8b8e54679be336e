// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::validators::{RuleViolation, Severity};
use serde::{Deserialize, Serialize};

/// 参数校验结果
///
/// `errors` 会阻止执行查询，`warnings` 仅作提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// 按严重程度记录一条规则违例
    pub fn record(&mut self, violation: RuleViolation) {
        match violation.severity() {
            Severity::Error => self.add_error(violation.to_string()),
            Severity::Warning => self.add_warning(violation.to_string()),
        }
    }

    pub fn extend<I: IntoIterator<Item = RuleViolation>>(&mut self, violations: I) {
        for violation in violations {
            self.record(violation);
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

//! 响应 DTO 定义

use serde::{Deserialize, Serialize};

use crate::models::{Fields, Rule};

/// 行内存储 id 使用的键名
const ROW_ID_KEY: &str = "id";

/// 规则列表中的一行
///
/// 输出为扁平的字段映射；持久化规则额外带上 `id`，便于客户端发起更新。
/// 持久化规则的字段里若也有 `id`，以存储 id 为准，该字段不输出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRowDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Fields,
}

impl From<Rule> for RuleRowDto {
    fn from(rule: Rule) -> Self {
        let mut fields = rule.fields;
        if rule.id.is_some() {
            fields.remove(ROW_ID_KEY);
        }

        Self {
            id: rule.id,
            fields,
        }
    }
}

/// 规则分页响应
///
/// `page` 与 `size` 原样回显请求参数
#[derive(Debug, Serialize, Deserialize)]
pub struct RulePageResponse {
    pub data: Vec<RuleRowDto>,
    pub total: u64,
    pub page: usize,
    pub size: usize,
}

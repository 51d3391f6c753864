//! 规则记录

use serde::{Deserialize, Serialize};

use super::field_value::Fields;

/// 规则记录
///
/// `id` 由持久化存储在创建时分配，mock 数据没有 id。
/// `fields` 对存储层透明，原样存取。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub fields: Fields,
}

impl Rule {
    /// 创建尚未持久化的规则
    pub fn new(fields: Fields) -> Self {
        Self { id: None, fields }
    }

    /// 创建带 id 的规则
    pub fn with_id(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: Some(id.into()),
            fields,
        }
    }

    /// 是否已持久化（拥有 id）
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

//! 请求 DTO 定义
//!
//! 创建和更新的请求体就是字段映射本身（`Fields`），不另外包装。

use serde::Deserialize;

use crate::service::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// 规则分页查询参数
///
/// 负数或非整数参数在提取阶段即被拒绝（400）。`size` 没有上限。
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RulePageQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
}

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for RulePageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
        }
    }
}

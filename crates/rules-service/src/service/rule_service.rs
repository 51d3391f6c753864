//! 规则服务
//!
//! 处理规则列表分页、创建和更新。存储实现在构造时注入，
//! 服务本身不感知当前是 mock 还是持久化模式。

use std::sync::Arc;

use reguler_shared::observability::metrics;
use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::models::{FIELD_CATALOG, Fields, Rule};
use crate::repository::{RuleStore, StorageMode};

/// 默认页码
pub const DEFAULT_PAGE: usize = 0;
/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// 计算分页区间 `[from, to)`
///
/// `from = min(page * size, total)`，`to = min(from + size, total)`，
/// 乘法和加法饱和，超大参数只会得到空页。
pub fn page_bounds(total: usize, page: usize, size: usize) -> (usize, usize) {
    let from = page.saturating_mul(size).min(total);
    let to = from.saturating_add(size).min(total);
    (from, to)
}

/// 规则服务
pub struct RuleService {
    store: Arc<dyn RuleStore>,
}

impl RuleService {
    pub fn new(store: Arc<dyn RuleStore>) -> Self {
        Self { store }
    }

    /// 当前存储模式
    pub fn storage_mode(&self) -> StorageMode {
        self.store.mode()
    }

    /// 字段目录，与存储模式无关
    pub fn get_fields(&self) -> &'static [&'static str] {
        FIELD_CATALOG
    }

    /// 分页获取规则
    ///
    /// 全量加载后在内存中切片
    #[instrument(skip(self))]
    pub async fn get_rules(&self, page: usize, size: usize) -> Result<Vec<Rule>> {
        let mut rules = self.store.list_all().await?;
        let (from, to) = page_bounds(rules.len(), page, size);

        rules.truncate(to);
        Ok(rules.split_off(from))
    }

    /// 规则总数
    pub async fn get_total_count(&self) -> Result<u64> {
        let total = self.store.count().await?;
        metrics::set_rules_total(self.store.mode().as_str(), total);
        Ok(total)
    }

    /// 创建规则
    ///
    /// 持久化模式返回带 id 的记录；mock 模式原样追加，返回的记录没有 id。
    #[instrument(skip(self, fields), fields(field_count = fields.len()))]
    pub async fn add_rule(&self, fields: Fields) -> Result<Rule> {
        let mode = self.store.mode();
        let saved = self.store.save(Rule::new(fields)).await?;

        metrics::record_rule_created(mode.as_str());
        info!(storage = %mode, rule_id = ?saved.id, "Rule created");

        Ok(saved)
    }

    /// 按 id 替换规则字段
    ///
    /// 找不到 id 时返回 None 且不修改存储。mock 记录没有 id，
    /// 因此 mock 模式下总是 None。
    #[instrument(skip(self, fields))]
    pub async fn update_rule(&self, id: &str, fields: Fields) -> Result<Option<Rule>> {
        let mode = self.store.mode();

        let Some(mut rule) = self.store.find_by_id(id).await? else {
            metrics::record_rule_updated(mode.as_str(), "not_found");
            warn!(storage = %mode, rule_id = %id, "Rule not found, update skipped");
            return Ok(None);
        };

        rule.fields = fields;
        let saved = self.store.save(rule).await?;

        metrics::record_rule_updated(mode.as_str(), "updated");
        info!(storage = %mode, rule_id = %id, "Rule updated");

        Ok(Some(saved))
    }

    /// 存储就绪检查
    pub async fn health_check(&self) -> Result<()> {
        self.store.health_check().await
    }
}

//! 内存规则仓储
//!
//! mock 模式使用的有序内存列表。数据由仓储实例自己持有，
//! 通过应用状态注入，不存在进程级全局变量。

use async_trait::async_trait;
use parking_lot::RwLock;

use super::traits::{RuleStore, StorageMode};
use crate::error::Result;
use crate::models::{FieldValue, Rule, fields_from};

/// 内存规则仓储
///
/// `save` 总是追加，不分配 id，也不支持按 id 覆盖。
/// mock 记录没有 id，因此 `find_by_id` 永远不会命中。
#[derive(Debug, Default)]
pub struct MemoryRuleStore {
    rules: RwLock<Vec<Rule>>,
}

impl MemoryRuleStore {
    /// 创建空仓储
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建包含两条示例规则的仓储
    pub fn seeded() -> Self {
        Self::from_rules(seed_rules())
    }

    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self {
            rules: RwLock::new(rules),
        }
    }

    /// 当前数据快照
    pub fn snapshot(&self) -> Vec<Rule> {
        self.rules.read().clone()
    }
}

#[async_trait]
impl RuleStore for MemoryRuleStore {
    fn mode(&self) -> StorageMode {
        StorageMode::Mock
    }

    async fn list_all(&self) -> Result<Vec<Rule>> {
        Ok(self.rules.read().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Rule>> {
        Ok(self
            .rules
            .read()
            .iter()
            .find(|rule| rule.id.as_deref() == Some(id))
            .cloned())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.rules.read().len() as u64)
    }

    async fn save(&self, rule: Rule) -> Result<Rule> {
        self.rules.write().push(rule.clone());
        Ok(rule)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

/// 启动时装载的两条示例规则
pub fn seed_rules() -> Vec<Rule> {
    let entry1 = fields_from::<_, FieldValue, _>([
        ("Rule Type", "Type A".into()),
        ("MD State", "CA".into()),
        ("Ship to State", "CA".into()),
        ("Zip Code", "90001".into()),
        ("Channel", "Online".into()),
        ("Reg Cat Code", "R1".into()),
        ("Drug Schedule", "Schedule II".into()),
        ("Refill", 2.into()),
        ("Quantity", 30.into()),
        ("Days Supply", 30.into()),
        ("User Location", "Location 1".into()),
        ("Dispensing Location", "Dispense 1".into()),
        ("Protocol", "Protocol A".into()),
        ("Days Ago", 5.into()),
        ("Max Days Allowed to Expiry Date", 60.into()),
    ]);

    let entry2 = fields_from::<_, FieldValue, _>([
        ("Rule Type", "Type B".into()),
        ("MD State", "NY".into()),
        ("Ship to State", "NY".into()),
        ("Zip Code", "10001".into()),
        ("Channel", "Retail".into()),
        ("Reg Cat Code", "R2".into()),
        ("Drug Schedule", "Schedule III".into()),
        ("Refill", 1.into()),
        ("Quantity", 15.into()),
        ("Days Supply", 15.into()),
        ("User Location", "Location 2".into()),
        ("Dispensing Location", "Dispense 2".into()),
        ("Protocol", "Protocol B".into()),
        ("Days Ago", 10.into()),
        ("Max Days Allowed to Expiry Date", 30.into()),
    ]);

    vec![Rule::new(entry1), Rule::new(entry2)]
}

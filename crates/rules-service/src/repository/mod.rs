//! 规则仓储层
//!
//! 两种可互换的实现共享同一个 `RuleStore` 接口：
//!
//! - `MemoryRuleStore`：mock 模式，内存中的有序列表，启动时装载示例数据
//! - `PgRuleStore`：持久化模式，PostgreSQL 中的文档表
//!
//! 具体实现在启动时根据配置选定一次，服务层不再区分模式。

mod memory_repo;
mod rule_repo;
mod traits;

pub use memory_repo::{MemoryRuleStore, seed_rules};
pub use rule_repo::PgRuleStore;
pub use traits::*;

/// 编译期嵌入的数据库迁移
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

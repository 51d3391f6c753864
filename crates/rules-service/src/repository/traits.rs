//! 仓储 Trait 定义
//!
//! 服务层只依赖 `RuleStore` 抽象，启动时选定具体实现，便于 mock 测试

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Rule;

/// 存储模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// 内存 mock 数据，进程重启即丢失
    Mock,
    /// PostgreSQL 持久化存储
    Postgres,
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Postgres => "postgres",
        }
    }

    /// 由启动配置中的 mock 开关推导
    pub fn from_mock_flag(mock_data: bool) -> Self {
        if mock_data { Self::Mock } else { Self::Postgres }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 规则仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// 当前实现对应的存储模式
    fn mode(&self) -> StorageMode;

    /// 按插入顺序返回全部规则
    async fn list_all(&self) -> Result<Vec<Rule>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Rule>>;

    async fn count(&self) -> Result<u64>;

    /// 无 id 时插入，有 id 时覆盖
    async fn save(&self, rule: Rule) -> Result<Rule>;

    /// 存储是否可用（就绪探针）
    async fn health_check(&self) -> Result<()>;
}

//! 规则管理后台服务
//!
//! 提供规则记录的列表、创建、更新 REST API。规则是无 schema 的字段映射，
//! 服务只负责存取，不解释或执行规则。
//!
//! ## 存储模式
//!
//! 启动配置 `storage.mock_data` 决定使用哪种 `RuleStore`：
//!
//! - **mock**：内存列表，装载两条示例规则，不支持更新
//! - **postgres**：PostgreSQL 文档表，跨进程重启持久化
//!
//! ## 模块结构
//!
//! - `models`: 规则、字段值与字段目录
//! - `repository`: 存储接口与两种实现
//! - `service`: 分页与创建/更新逻辑
//! - `export`: CSV 导出
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态

pub mod dto;
pub mod error;
pub mod export;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use error::{Result, RuleError};
pub use models::{FIELD_CATALOG, FieldValue, Fields, Rule};
pub use repository::{MemoryRuleStore, PgRuleStore, RuleStore, StorageMode};
pub use service::RuleService;
pub use state::AppState;

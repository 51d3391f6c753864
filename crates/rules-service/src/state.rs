//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use crate::repository::RuleStore;
use crate::service::RuleService;

/// Axum 应用共享状态
///
/// 规则服务在启动时按存储模式构造一次，通过 Arc 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    pub rule_service: Arc<RuleService>,
}

impl AppState {
    /// 以给定存储实现创建应用状态
    pub fn new(store: Arc<dyn RuleStore>) -> Self {
        Self {
            rule_service: Arc::new(RuleService::new(store)),
        }
    }
}

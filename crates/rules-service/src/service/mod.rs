//! 业务服务层

mod rule_service;

pub use rule_service::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, RuleService, page_bounds};

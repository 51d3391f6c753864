//! 数据传输对象
//!
//! REST API 的请求参数和响应体结构

mod request;
mod response;

pub use request::RulePageQuery;
pub use response::{RulePageResponse, RuleRowDto};

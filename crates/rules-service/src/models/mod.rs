//! 领域模型
//!
//! 规则记录、字段值以及字段目录

pub mod catalog;
mod field_value;
mod rule;

pub use catalog::FIELD_CATALOG;
pub use field_value::{FieldValue, Fields, fields_from};
pub use rule::Rule;

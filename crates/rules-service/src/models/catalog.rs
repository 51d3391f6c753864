//! 字段目录
//!
//! 前端表格和表单使用的已知字段名，顺序即展示顺序。
//! 这是静态配置，与存储中实际出现的字段无关。

/// 已知字段名（有序）
pub const FIELD_CATALOG: &[&str] = &[
    "Rule Type",
    "MD State",
    "Ship to State",
    "Zip Code",
    "Channel",
    "Reg Cat Code",
    "Drug Schedule",
    "Refill",
    "Quantity",
    "Days Supply",
    "User Location",
    "Dispensing Location",
    "Protocol",
    "Days Ago",
    "Max Days Allowed to Expiry Date",
];

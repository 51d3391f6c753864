//! 规则字段值
//!
//! 规则记录没有固定 schema，字段值只允许 JSON 标量：字符串、整数、浮点数和布尔值。

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 规则字段映射：字段名 -> 字段值
///
/// 使用 BTreeMap 保证序列化输出稳定，字段顺序本身没有业务含义。
pub type Fields = BTreeMap<String, FieldValue>;

/// 规则字段值
///
/// JSON 表示为裸标量（untagged）。没有小数部分的数字优先解析为整数。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// 从 (字段名, 值) 序列构建字段映射
pub fn fields_from<K, V, I>(entries: I) -> Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_scalars() {
        let fields: Fields = serde_json::from_value(json!({
            "Rule Type": "Type A",
            "Refill": 2,
            "Ratio": 0.5,
            "Active": true
        }))
        .unwrap();

        assert_eq!(fields["Rule Type"], FieldValue::String("Type A".into()));
        assert_eq!(fields["Refill"], FieldValue::Integer(2));
        assert_eq!(fields["Ratio"], FieldValue::Float(0.5));
        assert_eq!(fields["Active"], FieldValue::Bool(true));
    }

    #[test]
    fn test_numeric_string_stays_string() {
        let value: FieldValue = serde_json::from_value(json!("90001")).unwrap();
        assert_eq!(value, FieldValue::String("90001".to_string()));
    }

    #[test]
    fn test_non_scalar_rejected() {
        assert!(serde_json::from_value::<FieldValue>(json!({"nested": 1})).is_err());
        assert!(serde_json::from_value::<FieldValue>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<FieldValue>(json!(null)).is_err());
    }

    #[test]
    fn test_serialize_as_bare_scalar() {
        let fields = fields_from([("Quantity", FieldValue::from(30)), ("Channel", "Online".into())]);
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"Quantity": 30, "Channel": "Online"})
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from("Type A").to_string(), "Type A");
        assert_eq!(FieldValue::from(60).to_string(), "60");
        assert_eq!(FieldValue::from(1.5).to_string(), "1.5");
        assert_eq!(FieldValue::from(false).to_string(), "false");
    }
}

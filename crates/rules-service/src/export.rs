//! CSV 导出
//!
//! 按字段目录的顺序导出规则：首行为字段名，之后每条规则一行。
//! 缺失的字段输出为空，其余值一律加双引号，值内的双引号转义为两个双引号。

use crate::models::{FieldValue, Rule};

/// 导出文件名
pub const EXPORT_FILE_NAME: &str = "reguler_rules_export.csv";

/// 将规则渲染为 CSV 文本
pub fn rules_to_csv(columns: &[&str], rules: &[Rule]) -> String {
    let mut lines = Vec::with_capacity(rules.len() + 1);
    lines.push(columns.join(","));

    for rule in rules {
        let row: Vec<String> = columns
            .iter()
            .map(|column| rule.fields.get(*column).map(quote).unwrap_or_default())
            .collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn quote(value: &FieldValue) -> String {
    format!("\"{}\"", value.to_string().replace('"', "\"\""))
}

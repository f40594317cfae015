// ==========================================
// 一年级班级名册统计 - 学生记录
// ==========================================
// 职责: 原始表格 (RosterTable) 与单行学生记录 (StudentRecord)
// 生命周期: 仅在一次调用内有效，不持久化
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// RosterTable - 原始表格
// ==========================================
// 空单元格以空字符串保存，视为 NULL；其余单元格保留原文
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterTable {
    pub headers: Vec<String>,                // 表头（已 TRIM）
    pub rows: Vec<HashMap<String, String>>,  // 数据行（列名 → 值）
}

impl RosterTable {
    pub fn new(headers: Vec<String>, rows: Vec<HashMap<String, String>>) -> Self {
        Self { headers, rows }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 读取某列的非空值（只跳过空单元格，纯空白保留）
    pub fn non_null_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows
            .iter()
            .filter_map(move |row| row.get(column))
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// 前 n 行（预览用）
    pub fn head(&self, n: usize) -> &[HashMap<String, String>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

// ==========================================
// StudentRecord - 学生记录（一行输入）
// ==========================================
// 字段保存清洗前的原值，规范化在汇总阶段完成
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: Option<String>,             // ΟΝΟΜΑ
    pub gender: Option<String>,           // ΦΥΛΟ
    pub educator_child: Option<String>,   // ΠΑΙΔΙ_ΕΚΠΑΙΔΕΥΤΙΚΟΥ
    pub energetic: Option<String>,        // ΖΩΗΡΟΣ
    pub special_needs: Option<String>,    // ΙΔΙΑΙΤΕΡΟΤΗΤΑ
    pub greek_proficient: Option<String>, // ΚΑΛΗ_ΓΝΩΣΗ_ΕΛΛΗΝΙΚΩΝ
    pub friends: Option<String>,          // ΦΙΛΟΙ（不参与统计）
    pub conflicts: Option<String>,        // ΣΥΓΚΡΟΥΣΗ（不参与统计）
    pub classroom: Option<String>,        // ΤΜΗΜΑ
    pub row_number: usize,                // 原始文件行号（表头为第 1 行）
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: &[&str]) -> RosterTable {
        let rows = values
            .iter()
            .map(|v| HashMap::from([("ΦΥΛΟ".to_string(), v.to_string())]))
            .collect();
        RosterTable::new(vec!["ΦΥΛΟ".to_string()], rows)
    }

    #[test]
    fn test_non_null_values_keeps_whitespace() {
        let table = table(&["Α", "", "  "]);

        let values: Vec<&str> = table.non_null_values("ΦΥΛΟ").collect();

        assert_eq!(values, vec!["Α", "  "]);
    }

    #[test]
    fn test_head_clamps_to_len() {
        let table = table(&["Α", "Κ", "Α"]);

        assert_eq!(table.head(2).len(), 2);
        assert_eq!(table.head(10).len(), 3);
        assert!(RosterTable::default().head(10).is_empty());
    }
}

// ==========================================
// 一年级班级名册统计 - 名册校验器
// ==========================================
// 职责: 结构校验（必需列/空文件）+ 值域校验（性别/是否/班级缺失）
// 规则: 除空文件外所有检查都执行，一次返回全部缺陷
// ==========================================

use crate::domain::columns::{CLASSROOM, GENDER, REQUIRED_COLUMNS, YES_NO_COLUMNS};
use crate::domain::report::ValidationReport;
use crate::domain::student::RosterTable;
use crate::importer::data_cleaner::DataCleaner;

/// 空文件缺陷信息
pub const EMPTY_FILE_DEFECT: &str = "Το αρχείο είναι κενό";

// ==========================================
// RosterValidator - 名册校验器
// ==========================================
#[derive(Default)]
pub struct RosterValidator {
    cleaner: DataCleaner,
}

impl RosterValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 校验原始表格
    ///
    /// # 检查顺序
    /// 1. 必需列（缺失列合并为一条缺陷）
    /// 2. 空文件（唯一提前返回的检查）
    /// 3. 性别值域
    /// 4. 四个是/否列的值域（每列一条缺陷）
    /// 5. 班级缺失计数
    pub fn validate(&self, table: &RosterTable) -> ValidationReport {
        let mut defects = Vec::new();

        if let Some(defect) = self.check_required_columns(table) {
            defects.push(defect);
        }

        if table.is_empty() {
            defects.push(EMPTY_FILE_DEFECT.to_string());
            tracing::info!(defects = defects.len(), "名册为空，跳过其余检查");
            return ValidationReport::from_defects(defects);
        }

        if let Some(defect) = self.check_gender(table) {
            defects.push(defect);
        }

        for column in YES_NO_COLUMNS {
            if let Some(defect) = self.check_yes_no(table, column) {
                defects.push(defect);
            }
        }

        if let Some(defect) = self.check_missing_classroom(table) {
            defects.push(defect);
        }

        if defects.is_empty() {
            tracing::info!(rows = table.len(), "名册校验通过");
        } else {
            tracing::info!(rows = table.len(), defects = defects.len(), "名册校验未通过");
        }

        ValidationReport::from_defects(defects)
    }

    /// 仅返回缺陷列表
    pub fn validation_errors(&self, table: &RosterTable) -> Vec<String> {
        self.validate(table).into_defects()
    }

    fn check_required_columns(&self, table: &RosterTable) -> Option<String> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !table.has_column(col))
            .collect();

        if missing.is_empty() {
            return None;
        }

        tracing::debug!(?missing, "缺少必需列");
        Some(format!("Λείπουν στήλες: {}", missing.join(", ")))
    }

    fn check_gender(&self, table: &RosterTable) -> Option<String> {
        if !table.has_column(GENDER) {
            return None;
        }

        let invalid = distinct_invalid(table, GENDER, |v| self.cleaner.is_valid_gender_token(v));
        if invalid.is_empty() {
            return None;
        }

        Some(format!(
            "Μη έγκυρες τιμές στο {}: {}",
            GENDER,
            format_value_list(&invalid)
        ))
    }

    fn check_yes_no(&self, table: &RosterTable, column: &str) -> Option<String> {
        if !table.has_column(column) {
            return None;
        }

        let invalid = distinct_invalid(table, column, |v| self.cleaner.is_valid_yes_no_token(v));
        if invalid.is_empty() {
            return None;
        }

        Some(format!(
            "Μη έγκυρες τιμές στο {}: {}",
            column,
            format_value_list(&invalid)
        ))
    }

    fn check_missing_classroom(&self, table: &RosterTable) -> Option<String> {
        if !table.has_column(CLASSROOM) {
            return None;
        }

        let missing = table
            .rows
            .iter()
            .filter(|row| row.get(CLASSROOM).map_or(true, |v| v.trim().is_empty()))
            .count();

        if missing == 0 {
            return None;
        }

        Some(format!("Βρέθηκαν {} μαθητές χωρίς {}", missing, CLASSROOM))
    }
}

/// 收集某列中不合法的非空值（去重，保持首次出现顺序）
fn distinct_invalid<'a, F>(table: &'a RosterTable, column: &'a str, is_valid: F) -> Vec<&'a str>
where
    F: Fn(&str) -> bool,
{
    let mut invalid: Vec<&str> = Vec::new();
    for value in table.non_null_values(column) {
        if !is_valid(value) && !invalid.contains(&value) {
            invalid.push(value);
        }
    }
    invalid
}

/// ['X', 'Y'] 形式
fn format_value_list(values: &[&str]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_row(gender: &str, flags: [&str; 4], classroom: &str) -> HashMap<String, String> {
        let mut row = HashMap::new();
        row.insert("ΟΝΟΜΑ".to_string(), "Μαθητής".to_string());
        row.insert("ΦΥΛΟ".to_string(), gender.to_string());
        for (col, flag) in YES_NO_COLUMNS.iter().zip(flags) {
            row.insert(col.to_string(), flag.to_string());
        }
        row.insert("ΦΙΛΟΙ".to_string(), String::new());
        row.insert("ΣΥΓΚΡΟΥΣΗ".to_string(), String::new());
        row.insert("ΤΜΗΜΑ".to_string(), classroom.to_string());
        row
    }

    fn full_headers() -> Vec<String> {
        REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_valid_table() {
        let table = RosterTable::new(
            full_headers(),
            vec![
                full_row("Κ", ["Ν", "N", "Ο", "N"], "Α1"),
                full_row("a", ["o", "ν", "O", "ο"], "Α2"),
            ],
        );

        let report = RosterValidator::new().validate(&table);

        assert!(report.is_valid());
        assert!(report.defects().is_empty());
    }

    #[test]
    fn test_missing_columns_single_defect() {
        let headers: Vec<String> = full_headers()
            .into_iter()
            .filter(|h| h != "ΦΙΛΟΙ" && h != "ΖΩΗΡΟΣ")
            .collect();
        let table = RosterTable::new(headers, vec![full_row("Α", ["Ν"; 4], "Α1")]);

        let report = RosterValidator::new().validate(&table);

        assert!(!report.is_valid());
        assert_eq!(report.defects(), &["Λείπουν στήλες: ΖΩΗΡΟΣ, ΦΙΛΟΙ".to_string()]);
    }

    #[test]
    fn test_empty_table_short_circuits() {
        let table = RosterTable::new(full_headers(), vec![]);

        let report = RosterValidator::new().validate(&table);

        assert!(!report.is_valid());
        assert_eq!(report.defects(), &[EMPTY_FILE_DEFECT.to_string()]);
    }

    #[test]
    fn test_invalid_gender_reported_once_with_distinct_values() {
        let table = RosterTable::new(
            full_headers(),
            vec![
                full_row("X", ["Ν"; 4], "Α1"),
                full_row("X", ["Ν"; 4], "Α1"),
                full_row("Κ", ["Ν"; 4], "Α1"),
            ],
        );

        let report = RosterValidator::new().validate(&table);

        assert!(!report.is_valid());
        assert_eq!(report.defects(), &["Μη έγκυρες τιμές στο ΦΥΛΟ: ['X']".to_string()]);
    }

    #[test]
    fn test_yes_no_defect_per_column() {
        let table = RosterTable::new(
            full_headers(),
            vec![
                full_row("Α", ["ΝΑΙ", "Ν", "Ν", "Y"], "Α1"),
                full_row("Α", ["Ν", "Ν", "Ν", "Z"], "Α1"),
            ],
        );

        let report = RosterValidator::new().validate(&table);

        assert_eq!(
            report.defects(),
            &[
                "Μη έγκυρες τιμές στο ΠΑΙΔΙ_ΕΚΠΑΙΔΕΥΤΙΚΟΥ: ['ΝΑΙ']".to_string(),
                "Μη έγκυρες τιμές στο ΚΑΛΗ_ΓΝΩΣΗ_ΕΛΛΗΝΙΚΩΝ: ['Y', 'Z']".to_string(),
            ]
        );
    }

    #[test]
    fn test_null_values_are_not_defects() {
        let table = RosterTable::new(
            full_headers(),
            vec![full_row("", ["", "Ν", "", "Ο"], "Α1")],
        );

        let report = RosterValidator::new().validate(&table);

        assert!(report.is_valid());
    }

    #[test]
    fn test_padded_and_blank_tokens_are_defects() {
        let table = RosterTable::new(
            full_headers(),
            vec![
                full_row(" Α ", ["Ν", "Ν", "Ν", "Ν"], "Α1"),
                full_row("  ", ["Ν ", "Ν", "Ν", "Ν"], "Α1"),
                full_row("Κ", ["Ν", "Ν", "Ν", "Ν"], "Α1"),
            ],
        );

        let report = RosterValidator::new().validate(&table);

        assert!(!report.is_valid());
        assert_eq!(
            report.defects(),
            &[
                "Μη έγκυρες τιμές στο ΦΥΛΟ: [' Α ', '  ']".to_string(),
                "Μη έγκυρες τιμές στο ΠΑΙΔΙ_ΕΚΠΑΙΔΕΥΤΙΚΟΥ: ['Ν ']".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_classroom_counted() {
        let table = RosterTable::new(
            full_headers(),
            vec![
                full_row("Α", ["Ν"; 4], ""),
                full_row("Κ", ["Ν"; 4], "  "),
                full_row("Κ", ["Ν"; 4], "Α1"),
            ],
        );

        let report = RosterValidator::new().validate(&table);

        assert_eq!(report.defects(), &["Βρέθηκαν 2 μαθητές χωρίς ΤΜΗΜΑ".to_string()]);
    }

    #[test]
    fn test_all_checks_run_together() {
        let headers: Vec<String> = full_headers()
            .into_iter()
            .filter(|h| h != "ΣΥΓΚΡΟΥΣΗ")
            .collect();
        let table = RosterTable::new(headers, vec![full_row("M", ["Q", "Ν", "Ν", "Ν"], "")]);

        let errors = RosterValidator::new().validation_errors(&table);

        assert_eq!(errors.len(), 4);
        assert!(errors[0].starts_with("Λείπουν στήλες"));
        assert!(errors[1].contains("ΦΥΛΟ"));
        assert!(errors[2].contains("ΠΑΙΔΙ_ΕΚΠΑΙΔΕΥΤΙΚΟΥ"));
        assert!(errors[3].contains("χωρίς ΤΜΗΜΑ"));
    }
}

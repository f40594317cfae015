// ==========================================
// 一年级班级名册统计 - 字段映射器实现
// ==========================================
// 职责: 源列名 → StudentRecord 字段映射
// 说明: 额外列忽略；缺失列映射为 None；班级标签保留原文
// ==========================================

use crate::domain::columns;
use crate::domain::student::{RosterTable, StudentRecord};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::roster_importer_trait::{
    DataCleaner as DataCleanerTrait, FieldMapper as FieldMapperTrait,
};
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_to_student(&self, row: &HashMap<String, String>, row_number: usize) -> StudentRecord {
        StudentRecord {
            name: self.get_string(row, columns::NAME),
            gender: self.get_string(row, columns::GENDER),
            educator_child: self.get_string(row, columns::EDUCATOR_CHILD),
            energetic: self.get_string(row, columns::ENERGETIC),
            special_needs: self.get_string(row, columns::SPECIAL_NEEDS),
            greek_proficient: self.get_string(row, columns::GREEK_PROFICIENT),
            friends: self.get_string(row, columns::FRIENDS),
            conflicts: self.get_string(row, columns::CONFLICT),
            classroom: self.get_label(row, columns::CLASSROOM),
            row_number,
        }
    }
}

impl FieldMapper {
    /// 映射整张表（数据行从第 2 行开始编号）
    pub fn map_table(&self, table: &RosterTable) -> Vec<StudentRecord> {
        table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.map_to_student(row, idx + 2))
            .collect()
    }

    /// 提取字符串字段（空白 → None）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        DataCleaner.normalize_null(row.get(key).cloned())
    }

    /// 提取标签字段：空白 → None，否则保留原文（不 TRIM）
    fn get_label(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key).filter(|v| !v.trim().is_empty()).cloned()
    }
}

// ==========================================
// 一年级班级名册统计 - 班级汇总
// ==========================================
// 职责: 每个班级一行的计数结果，及完整汇总表
// 不变量: boys + girls <= total，各计数 <= total
// ==========================================

use crate::domain::columns::{SUMMARY_COLUMNS, SUMMARY_INDEX_LABEL};
use serde::{Deserialize, Serialize};

// ==========================================
// ClassroomSummary - 班级汇总行
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomSummary {
    pub classroom: String,      // 班级标签（原值，不做规范化）
    pub boys: u32,              // ΑΓΟΡΙΑ
    pub girls: u32,             // ΚΟΡΙΤΣΙΑ
    pub educator_child: u32,    // ΠΑΙΔΙ_ΕΚΠΑΙΔΕΥΤΙΚΟΥ
    pub energetic: u32,         // ΖΩΗΡΟΙ
    pub special_needs: u32,     // ΙΔΙΑΙΤΕΡΟΤΗΤΑ
    pub greek_proficient: u32,  // ΓΝΩΣΗ ΕΛΛ.
    pub total: u32,             // ΣΥΝΟΛΟ
}

impl ClassroomSummary {
    /// 全部计数为 0 的新行
    pub fn empty(classroom: impl Into<String>) -> Self {
        Self {
            classroom: classroom.into(),
            ..Default::default()
        }
    }

    /// 计数列，顺序与 SUMMARY_COLUMNS 一致
    pub fn counts(&self) -> [u32; 7] {
        [
            self.boys,
            self.girls,
            self.educator_child,
            self.energetic,
            self.special_needs,
            self.greek_proficient,
            self.total,
        ]
    }
}

// ==========================================
// StatisticsTable - 汇总表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsTable {
    pub rows: Vec<ClassroomSummary>,
}

impl StatisticsTable {
    pub fn new(rows: Vec<ClassroomSummary>) -> Self {
        Self { rows }
    }

    /// 表头：班级标签 + 7 个计数列
    pub fn header_labels() -> Vec<&'static str> {
        std::iter::once(SUMMARY_INDEX_LABEL)
            .chain(SUMMARY_COLUMNS.iter().copied())
            .collect()
    }

    pub fn classrooms(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.classroom.as_str()).collect()
    }

    pub fn get(&self, classroom: &str) -> Option<&ClassroomSummary> {
        self.rows.iter().find(|r| r.classroom == classroom)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

// ==========================================
// RosterOverview - 名册概览
// ==========================================
// 用途: 预览阶段显示学生总数与班级数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterOverview {
    pub student_count: usize,
    pub classroom_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_labels_order() {
        let labels = StatisticsTable::header_labels();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "ΤΜΗΜΑ");
        assert_eq!(labels[1], "ΑΓΟΡΙΑ");
        assert_eq!(labels[7], "ΣΥΝΟΛΟ");
    }

    #[test]
    fn test_counts_follow_column_order() {
        let row = ClassroomSummary {
            classroom: "Α1".to_string(),
            boys: 1,
            girls: 2,
            educator_child: 3,
            energetic: 4,
            special_needs: 5,
            greek_proficient: 6,
            total: 7,
        };
        assert_eq!(row.counts(), [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(ClassroomSummary::empty("Α2").counts(), [0; 7]);
    }
}

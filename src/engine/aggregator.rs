// ==========================================
// 一年级班级名册统计 - 班级汇总引擎
// ==========================================
// 职责: 标记规范化 → 按班级分组 → 计数 → 排序
// 前置条件: 输入已通过 RosterValidator（本引擎不重复校验）
// 宽松处理: 无法识别的标记不计入任何正向计数
// ==========================================

use crate::domain::student::StudentRecord;
use crate::domain::summary::{ClassroomSummary, RosterOverview, StatisticsTable};
use crate::domain::types::Gender;
use crate::engine::ordering::sort_classrooms;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::roster_importer_trait::DataCleaner as DataCleanerTrait;
use std::collections::{BTreeMap, HashSet};

// ==========================================
// ClassroomAggregator - 班级汇总引擎
// ==========================================
#[derive(Default)]
pub struct ClassroomAggregator {
    cleaner: DataCleaner,
}

impl ClassroomAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成按班级汇总的统计表
    ///
    /// # 参数
    /// - records: 已校验的学生记录
    ///
    /// # 返回
    /// - StatisticsTable: 每个班级一行，按班级编号排序
    ///
    /// # 说明
    /// - 班级标签本身不做规范化（精确匹配分组）
    /// - 无班级标签的记录不参与分组
    pub fn aggregate(&self, records: &[StudentRecord]) -> StatisticsTable {
        let mut groups: BTreeMap<&str, ClassroomSummary> = BTreeMap::new();
        let mut skipped = 0usize;

        for record in records {
            let Some(classroom) = record.classroom.as_deref() else {
                skipped += 1;
                continue;
            };

            let summary = groups
                .entry(classroom)
                .or_insert_with(|| ClassroomSummary::empty(classroom));
            self.accumulate(summary, record);
        }

        if skipped > 0 {
            tracing::warn!(skipped, "存在无班级标签的记录，未计入汇总");
        }

        let mut rows: Vec<ClassroomSummary> = groups.into_values().collect();
        let ordering = sort_classrooms(&mut rows);

        tracing::info!(
            students = records.len(),
            classrooms = rows.len(),
            ?ordering,
            "班级汇总完成"
        );

        StatisticsTable::new(rows)
    }

    /// 名册概览（学生数 / 班级数）
    pub fn overview(&self, records: &[StudentRecord]) -> RosterOverview {
        let classrooms: HashSet<&str> = records
            .iter()
            .filter_map(|r| r.classroom.as_deref())
            .collect();

        RosterOverview {
            student_count: records.len(),
            classroom_count: classrooms.len(),
        }
    }

    fn accumulate(&self, summary: &mut ClassroomSummary, record: &StudentRecord) {
        summary.total += 1;

        match self.cleaner.parse_gender(record.gender.as_deref()) {
            Some(Gender::Male) => summary.boys += 1,
            Some(Gender::Female) => summary.girls += 1,
            None => {}
        }

        summary.educator_child += self.yes_count(record.educator_child.as_deref());
        summary.energetic += self.yes_count(record.energetic.as_deref());
        summary.special_needs += self.yes_count(record.special_needs.as_deref());
        summary.greek_proficient += self.yes_count(record.greek_proficient.as_deref());
    }

    fn yes_count(&self, value: Option<&str>) -> u32 {
        match self.cleaner.parse_yes_no(value) {
            Some(flag) if flag.is_yes() => 1,
            _ => 0,
        }
    }
}

// ==========================================
// 一年级班级名册统计 - 引擎层
// ==========================================
// 职责: 名册校验 + 班级汇总 + 班级排序
// 红线: 引擎不读写文件, 无跨调用的可变状态
// ==========================================

pub mod aggregator;
pub mod ordering;
pub mod validator;

// 重导出核心引擎
pub use aggregator::ClassroomAggregator;
pub use ordering::{classroom_sort_key, sort_classrooms, ClassroomOrdering};
pub use validator::{RosterValidator, EMPTY_FILE_DEFECT};

// ==========================================
// 一年级班级名册统计 - 领域模型层
// ==========================================
// 职责: 定义名册、校验报告、汇总表等领域类型
// 红线: 不含文件读写逻辑,不含统计逻辑
// ==========================================

pub mod columns;
pub mod report;
pub mod student;
pub mod summary;
pub mod types;

// 重导出核心类型
pub use report::ValidationReport;
pub use student::{RosterTable, StudentRecord};
pub use summary::{ClassroomSummary, RosterOverview, StatisticsTable};
pub use types::{Gender, YesNo};

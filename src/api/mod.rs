// ==========================================
// 一年级班级名册统计 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行外壳调用
// ==========================================

pub mod error;
pub mod roster_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use roster_api::{ProcessOutcome, RosterStatsApi};

// ==========================================
// 一年级班级名册统计 - 核心库
// ==========================================
// 管道: 名册文件 → 校验 → 按班汇总 → Excel 导出
// 系统定位: 单次调用、无持久化的数据转换工具
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 名册与汇总类型
pub mod domain;

// 导入层 - 外部文件
pub mod importer;

// 引擎层 - 校验与汇总
pub mod engine;

// 导出层 - xlsx 输出
pub mod exporter;

// 配置层 - 导出格式
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 管道封装
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    ClassroomSummary, Gender, RosterOverview, RosterTable, StatisticsTable, StudentRecord,
    ValidationReport, YesNo,
};

pub use engine::{ClassroomAggregator, RosterValidator};

pub use exporter::StatisticsExporter;

pub use api::{ApiError, ApiResult, ProcessOutcome, RosterStatsApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Στατιστικά Μαθητών Α' Δημοτικού";

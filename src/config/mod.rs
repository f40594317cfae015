// ==========================================
// 一年级班级名册统计 - 配置层
// ==========================================
// 职责: 导出格式配置,支持 JSON 文件覆写
// ==========================================

pub mod config_manager;
pub mod error;
pub mod export_config;

// 重导出核心配置管理器
pub use config_manager::{get_default_config_path, ConfigManager, CONFIG_PATH_ENV};
pub use error::{ConfigError, ConfigResult};
pub use export_config::ExportConfig;

// ==========================================
// 一年级班级名册统计 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、快照
// 存储: JSON 文件（缺省时使用内置默认值）
// 说明: 配置仅由外壳读取，核心组件显式接收配置
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::export_config::ExportConfig;
use std::path::{Path, PathBuf};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "ROSTER_STATS_CONFIG";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    export: ExportConfig,
}

impl ConfigManager {
    /// 使用内置默认值
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// # 返回
    /// - Ok(ConfigManager): 加载并校验成功
    /// - Err: 文件读取失败、JSON 格式错误、配置值非法
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let manager = Self::from_snapshot(&raw)?;
        tracing::info!(path = %path.display(), "已加载配置文件");
        Ok(manager)
    }

    /// 从配置快照（JSON 字符串）恢复
    pub fn from_snapshot(snapshot_json: &str) -> ConfigResult<Self> {
        let export: ExportConfig = serde_json::from_str(snapshot_json)?;
        export.validate()?;
        Ok(Self { export })
    }

    /// 加载配置，带回退
    ///
    /// # 逻辑
    /// 1. 显式路径 → 必须可读
    /// 2. 默认路径存在 → 读取
    /// 3. 否则使用内置默认值
    pub fn load_or_default(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match get_default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("未找到配置文件，使用默认配置");
                Ok(Self::new())
            }
        }
    }

    pub fn export_config(&self) -> &ExportConfig {
        &self.export
    }

    /// 获取配置快照（JSON 格式）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.export)?)
    }
}

/// 默认配置文件路径
///
/// 优先级: 环境变量 ROSTER_STATS_CONFIG > 用户配置目录/roster-stats/config.json
pub fn get_default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    dirs::config_dir().map(|dir| dir.join("roster-stats").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"sheet_name": "Σύνοψη", "column_width": 18}}"#).unwrap();

        let manager = ConfigManager::from_file(temp_file.path()).unwrap();

        assert_eq!(manager.export_config().sheet_name, "Σύνοψη");
        assert_eq!(manager.export_config().column_width, 18.0);
        assert_eq!(manager.export_config().header_bg_color, "#D7E4BC");
    }

    #[test]
    fn test_from_file_missing() {
        let result = ConfigManager::from_file(Path::new("/non/existent/config.json"));
        assert!(matches!(result, Err(ConfigError::FileReadError { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let result = ConfigManager::from_snapshot("{not json");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let manager = ConfigManager::new();
        let snapshot = manager.get_config_snapshot().unwrap();

        let restored = ConfigManager::from_snapshot(&snapshot).unwrap();

        assert_eq!(restored.export_config(), manager.export_config());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let result = ConfigManager::load_or_default(Some(Path::new("/non/existent.json")));
        assert!(result.is_err());
    }
}

use serde::{Deserialize, Serialize};

use crate::config::error::{ConfigError, ConfigResult};

/// Excel 工作表名长度上限
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// 导出配置
///
/// 存储位置：JSON 文件（见 config_manager::get_default_config_path）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// 工作表名
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// 统一列宽（字符数），包括班级列
    #[serde(default = "default_column_width")]
    pub column_width: f64,

    /// 表头背景色（#RRGGBB）
    #[serde(default = "default_header_bg_color")]
    pub header_bg_color: String,

    /// 默认下载文件名
    #[serde(default = "default_download_file_name")]
    pub download_file_name: String,
}

fn default_sheet_name() -> String {
    "Στατιστικά".to_string()
}

fn default_column_width() -> f64 {
    15.0
}

fn default_header_bg_color() -> String {
    "#D7E4BC".to_string()
}

fn default_download_file_name() -> String {
    "statistika_mathiton.xlsx".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: default_sheet_name(),
            column_width: default_column_width(),
            header_bg_color: default_header_bg_color(),
            download_file_name: default_download_file_name(),
        }
    }
}

impl ExportConfig {
    /// 表头背景色转换为 0xRRGGBB
    pub fn header_bg_rgb(&self) -> ConfigResult<u32> {
        let hex = self.header_bg_color.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return Err(self.invalid("header_bg_color", "期望 #RRGGBB 格式"));
        }
        u32::from_str_radix(hex, 16)
            .map_err(|e| self.invalid("header_bg_color", &e.to_string()))
    }

    /// 校验配置值
    pub fn validate(&self) -> ConfigResult<()> {
        let name_len = self.sheet_name.chars().count();
        if name_len == 0 || name_len > MAX_SHEET_NAME_LEN {
            return Err(self.invalid("sheet_name", "长度必须在 1~31 之间"));
        }
        if !(self.column_width.is_finite() && self.column_width > 0.0) {
            return Err(self.invalid("column_width", "必须为正数"));
        }
        self.header_bg_rgb()?;
        if self.download_file_name.trim().is_empty() {
            return Err(self.invalid("download_file_name", "不能为空"));
        }
        Ok(())
    }

    fn invalid(&self, key: &str, message: &str) -> ConfigError {
        let value = match key {
            "sheet_name" => self.sheet_name.clone(),
            "column_width" => self.column_width.to_string(),
            "header_bg_color" => self.header_bg_color.clone(),
            _ => self.download_file_name.clone(),
        };
        ConfigError::InvalidValue {
            key: key.to_string(),
            value,
            message: message.to_string(),
        }
    }
}

// ==========================================
// 一年级班级名册统计 - 导出模块错误类型
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    /// 写入引擎错误（主写入器失败时会被回退吞掉）
    #[error("Σφάλμα εγγραφής Excel: {0}")]
    XlsxError(String),

    /// 导出配置不可用
    #[error("Μη έγκυρη ρύθμιση εξαγωγής: {0}")]
    ConfigError(String),

    /// 主写入器与回退写入器均失败
    #[error("Αποτυχία εξαγωγής: {fallback} (αρχικό σφάλμα: {primary})")]
    ExportFailed { primary: String, fallback: String },

    #[error("Σφάλμα αποθήκευσης αρχείου: {0}")]
    FileWriteError(String),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::XlsxError(err.to_string())
    }
}

impl From<crate::config::ConfigError> for ExportError {
    fn from(err: crate::config::ConfigError) -> Self {
        ExportError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;

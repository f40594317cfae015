// ==========================================
// 一年级班级名册统计 - API层错误类型
// ==========================================
// 职责: 汇总各层错误，转换为面向用户的错误消息
// 说明: 校验缺陷本身不是错误；只有在调用方要求继续统计时才转为 ValidationFailed
// ==========================================

use crate::config::ConfigError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 导入错误
    // ==========================================
    #[error("Σφάλμα κατά την επεξεργασία: {0}")]
    ImportError(String),

    // ==========================================
    // 校验错误
    // ==========================================
    /// 名册未通过校验（携带全部缺陷）
    #[error("Σφάλμα στη δομή του αρχείου: {}", .defects.join("; "))]
    ValidationFailed { defects: Vec<String> },

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("{0}")]
    ExportError(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("Σφάλμα ρυθμίσεων: {0}")]
    ConfigError(String),
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// 面向用户逐条显示的消息
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            ApiError::ValidationFailed { defects } => defects.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_conversion() {
        let api_err: ApiError = ImportError::FileNotFound("roster.xlsx".to_string()).into();
        match api_err {
            ApiError::ImportError(msg) => assert!(msg.contains("roster.xlsx")),
            _ => panic!("Expected ImportError"),
        }
    }

    #[test]
    fn test_export_error_conversion() {
        let api_err: ApiError = ExportError::ExportFailed {
            primary: "a".to_string(),
            fallback: "b".to_string(),
        }
        .into();
        assert!(matches!(api_err, ApiError::ExportError(_)));
    }

    #[test]
    fn test_every_variant_renders_user_message() {
        let errors = vec![
            ApiError::ImportError("x".to_string()),
            ApiError::ValidationFailed {
                defects: vec!["a".to_string(), "b".to_string()],
            },
            ApiError::ExportError("x".to_string()),
            ApiError::ConfigError("x".to_string()),
        ];

        for err in &errors {
            // 穷举匹配：新增变体必须在这里登记
            let expected = match err {
                ApiError::ValidationFailed { defects } => defects.len(),
                ApiError::ImportError(_) | ApiError::ExportError(_) | ApiError::ConfigError(_) => 1,
            };
            assert_eq!(err.user_messages().len(), expected);
        }
    }

    #[test]
    fn test_validation_failed_user_messages() {
        let err = ApiError::ValidationFailed {
            defects: vec!["Το αρχείο είναι κενό".to_string()],
        };
        assert_eq!(err.user_messages(), vec!["Το αρχείο είναι κενό".to_string()]);
        assert!(err.to_string().contains("Το αρχείο είναι κενό"));
    }
}

// ==========================================
// 一年级班级名册统计 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 错误信息面向最终用户（希腊语界面）
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("Το αρχείο δεν βρέθηκε: {0}")]
    FileNotFound(String),

    #[error("Μη υποστηριζόμενη μορφή αρχείου: {0} (μόνο .xlsx/.xls/.ods/.csv)")]
    UnsupportedFormat(String),

    #[error("Σφάλμα ανάγνωσης αρχείου: {0}")]
    FileReadError(String),

    #[error("Σφάλμα ανάγνωσης Excel: {0}")]
    ExcelParseError(String),

    #[error("Σφάλμα ανάγνωσης CSV: {0}")]
    CsvParseError(String),

    // ===== 结构错误 =====
    #[error("Το αρχείο Excel δεν έχει φύλλα εργασίας")]
    EmptyWorkbook,

    #[error("Το αρχείο δεν έχει γραμμή επικεφαλίδων")]
    MissingHeaderRow,
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

// ==========================================
// 一年级班级名册统计 - 名册导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 管道: 文件解析 → 字段映射 → 数据清洗
// ==========================================

use crate::domain::student::{RosterTable, StudentRecord};
use crate::domain::types::{Gender, YesNo};
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: ExcelParser, CsvParser
pub trait FileParser: Send + Sync {
    /// 支持的扩展名（小写，不含点）
    fn extensions(&self) -> &'static [&'static str];

    /// 解析内存中的文件内容为原始表格
    ///
    /// # 参数
    /// - data: 文件完整字节
    ///
    /// # 返回
    /// - Ok(RosterTable): 表头 + 数据行（已跳过完全空白的行）
    /// - Err: 格式错误、无表头
    fn parse_bytes(&self, data: &[u8]) -> ImportResult<RosterTable>;

    /// 解析磁盘文件为原始表格
    ///
    /// 默认实现: 检查存在性与扩展名后读取全部字节，交给 parse_bytes
    fn parse_file(&self, file_path: &Path) -> ImportResult<RosterTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !self.extensions().contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let data = std::fs::read(file_path)?;
        self.parse_bytes(&data)
    }
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: FieldMapperImpl
pub trait FieldMapper: Send + Sync {
    /// 将原始行记录映射为 StudentRecord
    ///
    /// # 参数
    /// - row: 原始行记录（HashMap<列名, 值>）
    /// - row_number: 行号（表头为第 1 行）
    fn map_to_student(&self, row: &HashMap<String, String>, row_number: usize) -> StudentRecord;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 数据清洗接口（阶段 2）
// 实现者: DataCleanerImpl
pub trait DataCleaner: Send + Sync {
    /// 清洗文本字段（TRIM + 可选 UPPER）
    fn clean_text(&self, value: &str, uppercase: bool) -> String;

    /// 标准化 NULL 值（空字符串/空白 → None）
    fn normalize_null(&self, value: Option<String>) -> Option<String>;

    /// 解析性别标记（大小写、首尾空白不敏感）
    ///
    /// # 返回
    /// - Some(Gender): Α/A/Κ/K
    /// - None: 其他值或空值
    fn parse_gender(&self, value: Option<&str>) -> Option<Gender>;

    /// 解析是/否标记（大小写、首尾空白不敏感）
    ///
    /// # 返回
    /// - Some(YesNo): Ν/N/Ο/O
    /// - None: 其他值或空值
    fn parse_yes_no(&self, value: Option<&str>) -> Option<YesNo>;
}

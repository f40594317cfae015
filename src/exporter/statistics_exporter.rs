// ==========================================
// 一年级班级名册统计 - 统计表导出器
// ==========================================
// 职责: 汇总表 → xlsx 字节流
// 策略: 先用带格式写入器；任何失败都改用无格式写入器；
//       仅回退写入器的失败会返回给调用方 (ExportFailed)
// ==========================================

use crate::config::ExportConfig;
use crate::domain::summary::StatisticsTable;
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::summary_writer_trait::SummaryWriter;
use crate::exporter::xlsx_writer::{PlainXlsxWriter, StyledXlsxWriter};
use std::io::Cursor;
use std::path::Path;

pub struct StatisticsExporter {
    primary: Box<dyn SummaryWriter>,
    fallback: Box<dyn SummaryWriter>,
}

impl StatisticsExporter {
    /// 标准导出器（带格式 → 无格式）
    pub fn new(config: ExportConfig) -> Self {
        let fallback = PlainXlsxWriter::new(config.sheet_name.clone());
        Self {
            primary: Box::new(StyledXlsxWriter::new(config)),
            fallback: Box::new(fallback),
        }
    }

    /// 自定义写入器组合
    pub fn with_writers(primary: Box<dyn SummaryWriter>, fallback: Box<dyn SummaryWriter>) -> Self {
        Self { primary, fallback }
    }

    /// 导出汇总表
    ///
    /// # 返回
    /// - Ok(Cursor): 位置为 0，可直接读取/传输
    /// - Err(ExportError::ExportFailed): 两个写入器均失败
    pub fn export(&self, table: &StatisticsTable) -> ExportResult<Cursor<Vec<u8>>> {
        let bytes = match self.primary.write(table) {
            Ok(bytes) => bytes,
            Err(primary_err) => {
                tracing::warn!(
                    writer = self.primary.name(),
                    error = %primary_err,
                    "主写入器失败，改用回退写入器"
                );
                self.fallback
                    .write(table)
                    .map_err(|fallback_err| ExportError::ExportFailed {
                        primary: primary_err.to_string(),
                        fallback: fallback_err.to_string(),
                    })?
            }
        };

        tracing::info!(classrooms = table.len(), bytes = bytes.len(), "统计表导出完成");
        Ok(Cursor::new(bytes))
    }

    /// 导出并写入文件
    ///
    /// # 返回
    /// - Ok(usize): 写入字节数
    pub fn export_to_file(&self, table: &StatisticsTable, path: &Path) -> ExportResult<usize> {
        let bytes = self.export(table)?.into_inner();
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), "统计表已保存");
        Ok(bytes.len())
    }
}

impl Default for StatisticsExporter {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

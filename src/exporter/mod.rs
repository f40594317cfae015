// ==========================================
// 一年级班级名册统计 - 导出层
// ==========================================
// 职责: 汇总表 → 单工作表 xlsx 字节流
// ==========================================

pub mod error;
pub mod statistics_exporter;
pub mod summary_writer_trait;
pub mod xlsx_writer;

pub use error::{ExportError, ExportResult};
pub use statistics_exporter::StatisticsExporter;
pub use summary_writer_trait::SummaryWriter;
pub use xlsx_writer::{PlainXlsxWriter, StyledXlsxWriter};

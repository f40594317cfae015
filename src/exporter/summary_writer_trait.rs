// ==========================================
// 一年级班级名册统计 - 汇总表写入 Trait
// ==========================================
// 实现者: StyledXlsxWriter（主）, PlainXlsxWriter（回退）
// ==========================================

use crate::domain::summary::StatisticsTable;
use crate::exporter::error::ExportResult;

pub trait SummaryWriter: Send + Sync {
    /// 写入器名称（用于日志）
    fn name(&self) -> &'static str;

    /// 将汇总表写为完整的 xlsx 文件字节
    ///
    /// # 布局
    /// - 第 0 行: ΤΜΗΜΑ + 7 个计数列
    /// - 之后每个班级一行，顺序与 table.rows 一致
    fn write(&self, table: &StatisticsTable) -> ExportResult<Vec<u8>>;
}

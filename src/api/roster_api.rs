// ==========================================
// 名册统计API
// ==========================================
// 职责: 封装 校验 → 汇总 → 导出 管道，供外壳（CLI 等）调用
// 说明: 每次调用相互独立，不持有跨调用的可变状态
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ExportConfig;
use crate::domain::columns::REQUIRED_COLUMNS;
use crate::domain::report::ValidationReport;
use crate::domain::student::RosterTable;
use crate::domain::summary::{RosterOverview, StatisticsTable};
use crate::engine::{ClassroomAggregator, RosterValidator};
use crate::exporter::StatisticsExporter;
use crate::importer::{ExcelParser, FieldMapperImpl, FileParser, UniversalFileParser};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;

/// 完整管道结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// 名册概览（学生数 / 班级数）
    pub overview: RosterOverview,
    /// 按班级汇总的统计表
    pub statistics: StatisticsTable,
    /// 导出的 xlsx 文件内容
    #[serde(skip)]
    pub workbook: Vec<u8>,
}

/// 名册统计API
pub struct RosterStatsApi {
    validator: RosterValidator,
    aggregator: ClassroomAggregator,
    mapper: FieldMapperImpl,
    exporter: StatisticsExporter,
}

impl RosterStatsApi {
    /// 创建新的RosterStatsApi实例
    pub fn new(config: ExportConfig) -> Self {
        Self {
            validator: RosterValidator::new(),
            aggregator: ClassroomAggregator::new(),
            mapper: FieldMapperImpl,
            exporter: StatisticsExporter::new(config),
        }
    }

    /// 必需列名（用于提示用户）
    pub fn required_columns() -> &'static [&'static str] {
        &REQUIRED_COLUMNS
    }

    /// 从内存读取 Excel 名册
    pub fn load_roster_bytes(&self, data: &[u8]) -> ApiResult<RosterTable> {
        Ok(ExcelParser.parse_bytes(data)?)
    }

    /// 从磁盘读取名册（Excel 或 CSV）
    pub fn load_roster_file(&self, file_path: &Path) -> ApiResult<RosterTable> {
        Ok(UniversalFileParser.parse(file_path)?)
    }

    /// 校验名册结构与取值
    pub fn validate(&self, table: &RosterTable) -> ValidationReport {
        self.validator.validate(table)
    }

    /// 名册概览
    pub fn overview(&self, table: &RosterTable) -> RosterOverview {
        self.aggregator.overview(&self.mapper.map_table(table))
    }

    /// 生成统计表
    ///
    /// # 返回
    /// - Ok(StatisticsTable): 名册通过校验
    /// - Err(ApiError::ValidationFailed): 名册未通过校验（携带全部缺陷）
    pub fn generate_statistics(&self, table: &RosterTable) -> ApiResult<StatisticsTable> {
        let report = self.validator.validate(table);
        if !report.is_valid() {
            return Err(ApiError::ValidationFailed {
                defects: report.into_defects(),
            });
        }

        let records = self.mapper.map_table(table);
        Ok(self.aggregator.aggregate(&records))
    }

    /// 导出统计表
    pub fn export_statistics(&self, statistics: &StatisticsTable) -> ApiResult<Cursor<Vec<u8>>> {
        Ok(self.exporter.export(statistics)?)
    }

    /// 导出统计表到文件
    pub fn export_statistics_to_file(
        &self,
        statistics: &StatisticsTable,
        output_path: &Path,
    ) -> ApiResult<usize> {
        Ok(self.exporter.export_to_file(statistics, output_path)?)
    }

    /// 完整管道: 读取 → 校验 → 汇总 → 导出
    pub fn process_table(&self, table: &RosterTable) -> ApiResult<ProcessOutcome> {
        let statistics = self.generate_statistics(table)?;
        let overview = self.overview(table);
        let workbook = self.export_statistics(&statistics)?.into_inner();

        Ok(ProcessOutcome {
            overview,
            statistics,
            workbook,
        })
    }

    /// 完整管道（Excel 字节输入）
    pub fn process_bytes(&self, data: &[u8]) -> ApiResult<ProcessOutcome> {
        let table = self.load_roster_bytes(data)?;
        self.process_table(&table)
    }

    /// 完整管道（文件输入）
    pub fn process_file(&self, file_path: &Path) -> ApiResult<ProcessOutcome> {
        let table = self.load_roster_file(file_path)?;
        self.process_table(&table)
    }
}

impl Default for RosterStatsApi {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

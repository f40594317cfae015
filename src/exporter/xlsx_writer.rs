// ==========================================
// 一年级班级名册统计 - xlsx 写入器
// ==========================================
// StyledXlsxWriter: 表头加粗/换行/顶端对齐/底色/细边框 + 统一列宽
// PlainXlsxWriter: 同样的数据与列顺序，不带格式
// ==========================================

use crate::config::ExportConfig;
use crate::domain::summary::StatisticsTable;
use crate::exporter::error::ExportResult;
use crate::exporter::summary_writer_trait::SummaryWriter;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

/// 写入数据行（第 1 行起）
fn write_data_rows(worksheet: &mut Worksheet, table: &StatisticsTable) -> ExportResult<()> {
    for (idx, summary) in table.rows.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_string(row, 0, summary.classroom.as_str())?;
        for (col, count) in summary.counts().iter().enumerate() {
            worksheet.write_number(row, (col + 1) as u16, *count)?;
        }
    }
    Ok(())
}

// ==========================================
// StyledXlsxWriter - 带格式写入器
// ==========================================
pub struct StyledXlsxWriter {
    config: ExportConfig,
}

impl StyledXlsxWriter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    fn header_format(&self) -> ExportResult<Format> {
        let rgb = self.config.header_bg_rgb()?;
        Ok(Format::new()
            .set_bold()
            .set_text_wrap()
            .set_align(FormatAlign::Top)
            .set_background_color(Color::RGB(rgb))
            .set_border(FormatBorder::Thin))
    }
}

impl SummaryWriter for StyledXlsxWriter {
    fn name(&self) -> &'static str {
        "styled"
    }

    fn write(&self, table: &StatisticsTable) -> ExportResult<Vec<u8>> {
        let header_format = self.header_format()?;
        let labels = StatisticsTable::header_labels();

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.config.sheet_name.as_str())?;

        // 表头（包括班级列）统一格式
        for (col, label) in labels.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *label, &header_format)?;
        }

        write_data_rows(worksheet, table)?;

        // 统一列宽（包括班级列）
        for col in 0..labels.len() {
            worksheet.set_column_width(col as u16, self.config.column_width)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

// ==========================================
// PlainXlsxWriter - 无格式回退写入器
// ==========================================
pub struct PlainXlsxWriter {
    sheet_name: String,
}

impl PlainXlsxWriter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }
}

impl SummaryWriter for PlainXlsxWriter {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn write(&self, table: &StatisticsTable) -> ExportResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet_name.as_str())?;

        for (col, label) in StatisticsTable::header_labels().iter().enumerate() {
            worksheet.write_string(0, col as u16, *label)?;
        }

        write_data_rows(worksheet, table)?;

        Ok(workbook.save_to_buffer()?)
    }
}

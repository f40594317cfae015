// ==========================================
// 一年级班级名册统计 - 文件解析器实现
// ==========================================
// 职责: 阶段 0 - 文件读取与解析
// 支持: Excel (.xlsx/.xlsm/.xls/.ods) / CSV (.csv)
// 范围: 仅读取第一个工作表，不合并多表
// ==========================================

use crate::domain::student::RosterTable;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::roster_importer_trait::FileParser;
use calamine::{open_workbook_auto_from_rs, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

/// 表头 + 数据行 → RosterTable
///
/// 单元格保留原文（不 TRIM）；只跳过所有单元格都为空的行
fn build_table<I>(headers: Vec<String>, data_rows: I) -> RosterTable
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut records = Vec::new();
    for data_row in data_rows {
        let mut row_map = HashMap::new();

        for (col_idx, value) in data_row.into_iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                if header.is_empty() {
                    continue;
                }
                row_map.insert(header.clone(), value);
            }
        }

        // 跳过完全空的行（纯空白单元格不算空）
        if row_map.values().all(|v| v.is_empty()) {
            continue;
        }

        records.push(row_map);
    }

    RosterTable::new(headers, records)
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["csv"]
    }

    fn parse_bytes(&self, data: &[u8]) -> ImportResult<RosterTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(data);

        // 读取表头（去除 UTF-8 BOM）
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::MissingHeaderRow);
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|v| v.to_string()).collect::<Vec<_>>());
        }

        let table = build_table(headers, rows);
        tracing::debug!(rows = table.len(), "CSV 解析完成");
        Ok(table)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["xlsx", "xlsm", "xls", "ods"]
    }

    fn parse_bytes(&self, data: &[u8]) -> ImportResult<RosterTable> {
        // 格式自动识别（xlsx / xls / ods）
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data.to_vec()))?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(ImportError::EmptyWorkbook)?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // 提取表头（第一行）
        let mut rows = range.rows();
        let header_row = rows.next().ok_or(ImportError::MissingHeaderRow)?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let data_rows = rows.map(|row| row.iter().map(|cell| cell.to_string()).collect());

        let table = build_table(headers, data_rows);
        tracing::debug!(sheet = %sheet_name, rows = table.len(), "Excel 解析完成");
        Ok(table)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RosterTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let parsers: [&dyn FileParser; 2] = [&ExcelParser, &CsvParser];
        match parsers
            .iter()
            .find(|parser| parser.extensions().contains(&ext.as_str()))
        {
            Some(parser) => parser.parse_file(path),
            None => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

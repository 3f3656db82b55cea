// ==========================================
// Excel 导入暂存引擎 - 工作簿读取器实现
// ==========================================
// 支持: Excel (.xlsx), 经 calamine 解码
// 读取: 首个工作表的缓存值、公式文本、合并区域
// ==========================================

use crate::domain::{Cell, MergedRegion, Sheet};
use crate::importer::error::{ImportError, ImporterResult};
use crate::importer::importer_trait::WorkbookReader;
use calamine::{open_workbook_from_rs, Data, Dimensions, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Cursor;

// ==========================================
// Xlsx 读取器
// ==========================================
pub struct XlsxWorkbookReader;

impl WorkbookReader for XlsxWorkbookReader {
    fn read_first_sheet(&self, bytes: &[u8]) -> ImporterResult<Sheet> {
        // 打开 Excel 字节流
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
            .map_err(|e: calamine::XlsxError| ImportError::UnreadableWorkbook(e.to_string()))?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .into_iter()
            .next()
            .ok_or_else(|| ImportError::UnreadableWorkbook("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;
        let formulas = workbook.worksheet_formula(&sheet_name)?;

        // 只解析首个工作表的合并区域, 其他工作表的合并信息不影响上传
        let merge_cells = workbook
            .worksheet_merge_cells(&sheet_name)
            .transpose()?
            .unwrap_or_default();

        let mut sheet = Sheet::new();

        // 缓存值（绝对坐标 = 区域起点 + 相对坐标）
        if let Some((start_row, start_col)) = range.start() {
            for (r, c, data) in range.used_cells() {
                let cell = data_to_cell(data);
                if cell.is_empty() {
                    continue;
                }
                sheet.set_cell(start_row + r as u32, start_col + c as u32, cell);
            }
        }

        // 公式覆盖缓存值: 保留公式源文本
        if let Some((start_row, start_col)) = formulas.start() {
            for (r, c, expr) in formulas.used_cells() {
                if expr.is_empty() {
                    continue;
                }
                sheet.set_cell(
                    start_row + r as u32,
                    start_col + c as u32,
                    Cell::Formula(expr.clone()),
                );
            }
        }

        sheet.merged_regions = merge_cells.iter().map(dimensions_to_region).collect();

        tracing::debug!(
            sheet = %sheet_name,
            rows = sheet.rows.len(),
            merged_regions = sheet.merged_regions.len(),
            "首个工作表读取完成"
        );

        Ok(sheet)
    }
}

/// calamine 单元格 → 领域单元格
///
/// 错误值与空值统一为 Empty
pub fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::String(value) => Cell::Text(value.clone()),
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Bool(value) => Cell::Boolean(*value),
        Data::DateTime(value) => match value.as_datetime() {
            Some(ts) => Cell::DateTime(ts),
            None => Cell::Number(value.as_f64()),
        },
        Data::DateTimeIso(value) => parse_iso_datetime(value)
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::Text(value.clone())),
        Data::DurationIso(value) => Cell::Text(value.clone()),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    value.parse::<NaiveDateTime>().ok().or_else(|| {
        value
            .parse::<NaiveDate>()
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

fn dimensions_to_region(dim: &Dimensions) -> MergedRegion {
    MergedRegion::new(dim.start.0, dim.end.0, dim.start.1, dim.end.1)
}

// ==========================================
// Excel 导入暂存引擎 - 导入结果组装
// ==========================================
// 流程:
//   0. 空上传检查（解码前）
//   1. 读取首个工作表
//   2. 双行表头解析（表头首行 = 工作表首个存在的行）
//   3. 数据行提取（从表头首行 + 2 开始）
//   4. 组装 ImportResult
// 红线: 无部分成功模式, 要么完整结果要么错误
// ==========================================

use crate::domain::{ImportResult, Sheet};
use crate::importer::error::{ImportError, ImporterResult};
use crate::importer::header_resolver::resolve_headers;
use crate::importer::importer_trait::WorkbookReader;
use crate::importer::row_extractor::extract_rows;

/// 表头固定两行
pub const HEADER_ROW_COUNT: u32 = 2;

// ==========================================
// SheetImporter - 工作簿导入器
// ==========================================
pub struct SheetImporter<R: WorkbookReader> {
    reader: R,
}

impl<R: WorkbookReader> SheetImporter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// 导入一个上传文件
    ///
    /// # 参数
    /// - file_name: 原始文件名
    /// - bytes: 工作簿字节
    ///
    /// # 返回
    /// - Ok(ImportResult): 完整的规范化结果
    /// - Err(EmptyUpload): 字节为空（不尝试解码）
    /// - Err(UnreadableWorkbook): 解码失败
    pub fn import(&self, file_name: &str, bytes: &[u8]) -> ImporterResult<ImportResult> {
        if bytes.is_empty() {
            return Err(ImportError::EmptyUpload);
        }

        let sheet = self.reader.read_first_sheet(bytes)?;
        Ok(assemble(file_name, &sheet))
    }
}

/// 由已解码的工作表组装结果
pub fn assemble(file_name: &str, sheet: &Sheet) -> ImportResult {
    // 空工作表: 0 列 0 行
    let Some(header_row0) = sheet.first_row_index() else {
        return ImportResult::new(file_name, Vec::new(), Vec::new());
    };
    let header_row1 = header_row0 + 1;

    let headers = resolve_headers(sheet, header_row0, header_row1);
    let rows = extract_rows(sheet, headers.len(), header_row0 + HEADER_ROW_COUNT);

    ImportResult::new(file_name, headers, rows)
}

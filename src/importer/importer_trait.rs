// ==========================================
// Excel 导入暂存引擎 - 导入 Trait
// ==========================================
// 职责: 定义工作簿读取接口（不包含实现）
// 红线: 只读取首个工作表
// ==========================================

use crate::domain::Sheet;
use crate::importer::error::ImporterResult;

// ==========================================
// WorkbookReader Trait
// ==========================================
// 用途: 字节流 → 首个工作表 + 合并区域
// 实现者: XlsxWorkbookReader
pub trait WorkbookReader: Send + Sync {
    /// 解码工作簿并返回首个工作表
    ///
    /// # 参数
    /// - bytes: 完整的工作簿字节（整体载入内存）
    ///
    /// # 返回
    /// - Ok(Sheet): 首个工作表（行、单元格、合并区域）
    /// - Err(ImportError::UnreadableWorkbook): 字节损坏、容器格式不符、无工作表
    fn read_first_sheet(&self, bytes: &[u8]) -> ImporterResult<Sheet>;
}

// ==========================================
// Excel 导入暂存引擎 - 导入层
// ==========================================
// 职责: 工作簿字节 → 规范化表格（表头 + 字符串行）
// 支持: Excel (.xlsx), 仅首个工作表
// ==========================================

// 模块声明
pub mod cell_coercion;
pub mod error;
pub mod header_resolver;
pub mod importer_trait;
pub mod merged_region;
pub mod row_extractor;
pub mod sheet_importer;
pub mod workbook_reader;

// 重导出核心类型
pub use cell_coercion::{coerce, coerce_opt};
pub use error::{ImportError, ImporterResult};
pub use header_resolver::{combine_labels, resolve_headers};
pub use merged_region::MergedRegionIndex;
pub use row_extractor::extract_rows;
pub use sheet_importer::{assemble, SheetImporter};
pub use workbook_reader::XlsxWorkbookReader;

// 重导出 Trait 接口
pub use importer_trait::WorkbookReader;

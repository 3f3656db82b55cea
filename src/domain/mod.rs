// ==========================================
// Excel 导入暂存引擎 - 领域层
// ==========================================
// 职责: 工作表模型、导入结果、暂存键
// ==========================================

pub mod sheet;
pub mod staging;

// 重导出核心类型
pub use sheet::{Cell, MergedRegion, Row, Sheet};
pub use staging::{ImportResult, StagingKey};

// ==========================================
// Excel 导入暂存引擎 - 应用层
// ==========================================
// 职责: 组装读取器、导入器、暂存存储与API
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;

// ==========================================
// Excel 导入暂存引擎 - API 层
// ==========================================
// 职责: 上传、查看、清除、保存暂存结果
// ==========================================

pub mod error;
pub mod import_api;

// 重导出
pub use error::ApiError;
pub use import_api::{ImportApi, SaveResponse, StagedView, UploadResponse, UploadedFile};

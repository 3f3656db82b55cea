// ==========================================
// Excel 导入暂存引擎 - 核心库
// ==========================================
// 职责: 首个工作表（双行合并表头）→ 规范化表格 → 暂存
// 技术栈: Rust + calamine
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 工作表与导入结果
pub mod domain;

// 导入层 - 读取、表头解析、行提取
pub mod importer;

// 数据仓储层 - 暂存存储
pub mod repository;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 上传/查看/清除/保存
pub mod api;

// 应用层 - 状态组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{Cell, ImportResult, MergedRegion, Row, Sheet, StagingKey};
pub use importer::{ImportError, SheetImporter, WorkbookReader, XlsxWorkbookReader};
pub use repository::{InMemoryStagingStore, StagingStore};
pub use api::{ApiError, ImportApi, StagedView, UploadedFile};
pub use app::AppState;
pub use config::ImportConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "sheet-stage";

// ==========================================
// Excel 导入暂存引擎 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::ImportApi;
use crate::config::ImportConfig;
use crate::importer::{SheetImporter, XlsxWorkbookReader};
use crate::repository::{InMemoryStagingStore, StagingStore};

/// 应用状态
///
/// 包含导入API与暂存存储, 由宿主（Web 服务/CLI）持有
pub struct AppState {
    /// 配置
    pub config: ImportConfig,

    /// 暂存存储（按会话标识分槽）
    pub staging_store: Arc<dyn StagingStore>,

    /// 导入API
    pub import_api: Arc<ImportApi<XlsxWorkbookReader>>,
}

impl AppState {
    /// 创建新的AppState实例（进程内暂存）
    pub fn new(config: ImportConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryStagingStore::new()))
    }

    /// 使用调用方提供的暂存存储
    pub fn with_store(config: ImportConfig, staging_store: Arc<dyn StagingStore>) -> Self {
        tracing::info!(
            max_upload_bytes = config.max_upload_bytes,
            locale = %config.locale,
            "初始化AppState"
        );

        let importer = SheetImporter::new(XlsxWorkbookReader);
        let import_api = Arc::new(ImportApi::new(
            importer,
            staging_store.clone(),
            config.clone(),
        ));

        Self {
            config,
            staging_store,
            import_api,
        }
    }
}

// ==========================================
// Excel 导入暂存引擎 - 导入API
// ==========================================
// 职责: 上传 → 解析 → 整体替换暂存; 查看 / 清除 / 保存
// 红线: 结果完整计算后才写入暂存; 失败不改动已暂存结果
// ==========================================

use crate::api::error::ApiError;
use crate::config::ImportConfig;
use crate::domain::{ImportResult, StagingKey};
use crate::i18n::t_with_args_in;
use crate::importer::{SheetImporter, WorkbookReader};
use crate::repository::StagingStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// 上传的文件
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// 原始文件名
    pub file_name: String,
    /// 文件字节
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// 上传响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// 文件名
    pub file_name: String,
    /// 表头列数
    pub column_count: usize,
    /// 保留的数据行数
    pub row_count: usize,
    /// 解析耗时（毫秒）
    pub elapsed_ms: i64,
}

/// 暂存视图（页面模型）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedView {
    /// 已上传文件名（未暂存时为 None）
    pub uploaded_file_name: Option<String>,
    /// 表头
    pub headers: Vec<String>,
    /// 数据行
    pub rows: Vec<Vec<String>>,
    /// 行数
    pub row_count: usize,
}

impl From<ImportResult> for StagedView {
    fn from(result: ImportResult) -> Self {
        Self {
            uploaded_file_name: Some(result.file_name),
            headers: result.headers,
            rows: result.rows,
            row_count: result.row_count,
        }
    }
}

/// 保存响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    /// 提交的行数
    pub row_count: usize,
    /// 提示消息（如 "Saved 3 rows"）
    pub message: String,
}

/// 导入API
pub struct ImportApi<R: WorkbookReader> {
    importer: SheetImporter<R>,
    store: Arc<dyn StagingStore>,
    config: ImportConfig,
}

impl<R: WorkbookReader> ImportApi<R> {
    /// 创建新的ImportApi实例
    pub fn new(importer: SheetImporter<R>, store: Arc<dyn StagingStore>, config: ImportConfig) -> Self {
        Self {
            importer,
            store,
            config,
        }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// 上传并暂存工作簿
    ///
    /// # 参数
    /// - key: 暂存槽位（会话标识）
    /// - file: 上传文件（None 表示未选择文件）
    ///
    /// # 返回
    /// - Ok(UploadResponse): 已整体替换暂存结果
    /// - Err(EmptyUpload / UploadTooLarge): 解码前拒绝
    /// - Err(UnreadableWorkbook): 解码失败
    ///
    /// # 说明
    /// 解码在当前任务内同步完成; 上传大小由 max_upload_bytes 限制
    pub async fn upload(
        &self,
        key: &StagingKey,
        file: Option<UploadedFile>,
    ) -> Result<UploadResponse, ApiError> {
        let file = match file {
            Some(file) if !file.bytes.is_empty() => file,
            _ => {
                tracing::warn!(key = %key, "上传被拒绝: 未提供文件或文件为空");
                return Err(ApiError::EmptyUpload);
            }
        };

        let limit = self.config.max_upload_bytes;
        if file.bytes.len() > limit {
            tracing::warn!(
                key = %key,
                file_name = %file.file_name,
                size = file.bytes.len(),
                limit,
                "上传被拒绝: 文件过大"
            );
            return Err(ApiError::UploadTooLarge {
                size: file.bytes.len(),
                limit,
            });
        }

        let started = Instant::now();
        let result = self
            .importer
            .import(&file.file_name, &file.bytes)
            .map_err(|e| {
                tracing::warn!(key = %key, file_name = %file.file_name, error = %e, "上传解析失败");
                ApiError::from(e)
            })?;

        let response = UploadResponse {
            file_name: result.file_name.clone(),
            column_count: result.column_count(),
            row_count: result.row_count,
            elapsed_ms: started.elapsed().as_millis() as i64,
        };

        self.store.set(key, result).await?;

        tracing::info!(
            key = %key,
            file_name = %response.file_name,
            columns = response.column_count,
            rows = response.row_count,
            elapsed_ms = response.elapsed_ms,
            "工作簿已暂存"
        );

        Ok(response)
    }

    /// 查看暂存结果（未暂存时返回空视图）
    pub async fn view(&self, key: &StagingKey) -> Result<StagedView, ApiError> {
        let staged = self.store.get(key).await?;
        Ok(staged.map(StagedView::from).unwrap_or_default())
    }

    /// 清除暂存结果
    ///
    /// # 返回
    /// - Ok(true): 清除了已有结果
    /// - Ok(false): 本来没有暂存结果
    pub async fn clear(&self, key: &StagingKey) -> Result<bool, ApiError> {
        let cleared = self.store.clear(key).await?;
        tracing::info!(key = %key, cleared, "暂存结果已清除");
        Ok(cleared)
    }

    /// 保存暂存结果
    ///
    /// # 说明
    /// - 持久化目标由外部协作方负责, 这里只给出行数与提示消息
    /// - 暂存结果保持不变
    pub async fn save(&self, key: &StagingKey) -> Result<SaveResponse, ApiError> {
        let row_count = self
            .store
            .get(key)
            .await?
            .map(|staged| staged.row_count)
            .unwrap_or(0);

        let message = t_with_args_in(
            &self.config.locale,
            "import.saved_rows",
            &[("count", &row_count.to_string())],
        );

        tracing::info!(key = %key, row_count, "暂存结果已提交");
        Ok(SaveResponse { row_count, message })
    }

    /// 错误 → 当前配置语言下的用户消息
    pub fn user_message(&self, err: &ApiError) -> String {
        err.user_message(&self.config.locale)
    }
}

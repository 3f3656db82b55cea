// ==========================================
// Excel 导入暂存引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换导入/仓储错误为单条用户消息
// 红线: 任何错误都不改动已暂存的结果
// ==========================================

use crate::i18n::t_with_args_in;
use crate::importer::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 上传错误
    // ==========================================
    #[error("未提供文件或文件为空")]
    EmptyUpload,

    #[error("上传文件过大: {size} 字节（上限 {limit} 字节）")]
    UploadTooLarge { size: usize, limit: usize },

    #[error("工作簿无法读取: {0}")]
    UnreadableWorkbook(String),

    // ==========================================
    // 暂存错误
    // ==========================================
    #[error("暂存存储错误: {0}")]
    StagingError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 稳定的错误代码（返回给前端）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::EmptyUpload => "EMPTY_UPLOAD",
            ApiError::UploadTooLarge { .. } => "UPLOAD_TOO_LARGE",
            ApiError::UnreadableWorkbook(_) => "UNREADABLE_WORKBOOK",
            ApiError::StagingError(_) => "STAGING_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }

    /// 面向用户的单条消息
    ///
    /// # 参数
    /// - locale: 语言代码
    pub fn user_message(&self, locale: &str) -> String {
        match self {
            ApiError::EmptyUpload => t_with_args_in(locale, "import.empty_upload", &[]),
            ApiError::UploadTooLarge { size, limit } => t_with_args_in(
                locale,
                "import.upload_too_large",
                &[("size", &size.to_string()), ("limit", &limit.to_string())],
            ),
            ApiError::UnreadableWorkbook(msg) => {
                t_with_args_in(locale, "import.upload_failed", &[("message", msg)])
            }
            ApiError::StagingError(msg) | ApiError::InternalError(msg) => {
                t_with_args_in(locale, "common.internal_error", &[("message", msg)])
            }
            ApiError::Other(err) => t_with_args_in(
                locale,
                "common.internal_error",
                &[("message", &err.to_string())],
            ),
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::EmptyUpload => ApiError::EmptyUpload,
            ImportError::UnreadableWorkbook(msg) => ApiError::UnreadableWorkbook(msg),
            ImportError::Other(e) => ApiError::Other(e),
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::StoreUnavailable(msg) => ApiError::StagingError(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(e) => ApiError::Other(e),
        }
    }
}

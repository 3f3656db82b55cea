// ==========================================
// Excel 导入暂存引擎 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 行/单元格缺失不是错误, 在本地按空串恢复
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 上传相关错误 =====
    #[error("未提供文件或文件为空")]
    EmptyUpload,

    // ===== 解码相关错误 =====
    #[error("工作簿无法读取: {0}")]
    UnreadableWorkbook(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::UnreadableWorkbook(err.to_string())
    }
}

/// Result 类型别名
pub type ImporterResult<T> = Result<T, ImportError>;

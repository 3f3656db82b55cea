// ==========================================
// Excel 导入暂存引擎 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 进程内实现不会失败, 外部暂存实现（会话存储等）通过这些变体上报
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 存储错误 =====
    #[error("暂存存储不可用: {0}")]
    StoreUnavailable(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;

// ==========================================
// Excel 导入暂存引擎 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 暂存槽位的读取、替换、清除
// ==========================================

pub mod error;
pub mod staging_repo;
pub mod staging_repo_impl;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use staging_repo::StagingStore;
pub use staging_repo_impl::InMemoryStagingStore;

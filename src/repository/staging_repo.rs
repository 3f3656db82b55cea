// ==========================================
// Excel 导入暂存引擎 - 暂存 Repository Trait
// ==========================================
// 职责: 定义暂存槽位访问接口（不包含业务逻辑）
// 红线: set 为整体替换（旧换新）, clear 为整体移除, 不做合并
// ==========================================

use crate::domain::{ImportResult, StagingKey};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// StagingStore Trait
// ==========================================
// 用途: 按会话/请求标识暂存最近一次成功导入的结果
// 实现者: InMemoryStagingStore（进程内）, 或调用方提供的会话存储
#[async_trait]
pub trait StagingStore: Send + Sync {
    /// 读取暂存结果
    ///
    /// # 返回
    /// - Ok(Some(ImportResult)): 当前暂存结果
    /// - Ok(None): 未暂存或已清除
    async fn get(&self, key: &StagingKey) -> RepositoryResult<Option<ImportResult>>;

    /// 以新结果整体替换槽位
    ///
    /// # 说明
    /// - 并发写同一槽位时, 最后完成者生效
    async fn set(&self, key: &StagingKey, result: ImportResult) -> RepositoryResult<()>;

    /// 清除槽位
    ///
    /// # 返回
    /// - Ok(true): 清除了已有结果
    /// - Ok(false): 槽位本来为空
    async fn clear(&self, key: &StagingKey) -> RepositoryResult<bool>;
}

// ==========================================
// Excel 导入暂存引擎 - 进程内暂存实现
// ==========================================
// 存储: HashMap<StagingKey, ImportResult>, tokio RwLock 保护
// 并发: 单次 set/clear 在写锁内完成, 读者不会看到半个结果
// ==========================================

use crate::domain::{ImportResult, StagingKey};
use crate::repository::error::RepositoryResult;
use crate::repository::staging_repo::StagingStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// 进程内暂存存储
#[derive(Default)]
pub struct InMemoryStagingStore {
    slots: RwLock<HashMap<StagingKey, ImportResult>>,
}

impl InMemoryStagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前已暂存的槽位数
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

#[async_trait]
impl StagingStore for InMemoryStagingStore {
    async fn get(&self, key: &StagingKey) -> RepositoryResult<Option<ImportResult>> {
        let slots = self.slots.read().await;
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &StagingKey, result: ImportResult) -> RepositoryResult<()> {
        let mut slots = self.slots.write().await;
        if let Some(previous) = slots.insert(key.clone(), result) {
            tracing::debug!(
                key = %key,
                previous_file = %previous.file_name,
                previous_rows = previous.row_count,
                "暂存结果已被替换"
            );
        }
        Ok(())
    }

    async fn clear(&self, key: &StagingKey) -> RepositoryResult<bool> {
        let mut slots = self.slots.write().await;
        Ok(slots.remove(key).is_some())
    }
}

// ==========================================
// Excel 导入暂存引擎 - 导入结果与暂存标识
// ==========================================
// 职责: 定义一次成功导入的规范化结果及暂存槽位键
// 生命周期: 每次成功上传整体替换, 显式清除或会话结束时销毁
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==========================================
// ImportResult - 导入结果
// ==========================================
// 红线: rows 中每一行长度 == headers.len()
// 红线: row_count == rows.len()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
}

impl ImportResult {
    /// 由表头与数据行构造, row_count 自动取 rows.len()
    pub fn new(file_name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let row_count = rows.len();
        Self {
            file_name: file_name.into(),
            headers,
            rows,
            row_count,
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

// ==========================================
// StagingKey - 暂存槽位键
// ==========================================
// 由调用方提供（会话/请求标识）, 不使用隐式全局状态
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StagingKey(String);

impl StagingKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 生成新的会话标识（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StagingKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StagingKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for StagingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

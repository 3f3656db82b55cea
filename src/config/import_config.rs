// ==========================================
// Excel 导入暂存引擎 - 导入配置
// ==========================================
// 职责: 配置加载与默认值
// 来源优先级: 环境变量 > 配置文件 > 默认值
// 配置文件: <系统配置目录>/sheet-stage/config.json
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// 配置键（环境变量）
// ==========================================
pub mod env_keys {
    /// 上传字节上限
    pub const MAX_UPLOAD_BYTES: &str = "SHEET_STAGE_MAX_UPLOAD_BYTES";
    /// 用户消息语言
    pub const LOCALE: &str = "SHEET_STAGE_LOCALE";
    /// 默认日志过滤（RUST_LOG 未设置时生效）
    pub const LOG_FILTER: &str = "SHEET_STAGE_LOG";
}

/// 默认上传上限: 20 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ValueError {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// ImportConfig - 导入配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// 单次上传字节上限（核心不做限制, 由调用方边界检查）
    pub max_upload_bytes: usize,
    /// 用户消息语言（"en" 或 "zh-CN"）
    pub locale: String,
    /// 默认日志过滤器
    pub log_filter: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            locale: "en".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl ImportConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sheet-stage").join("config.json"))
    }

    /// 加载配置
    ///
    /// # 逻辑
    /// 1. 默认配置文件存在 → 读取; 否则使用默认值
    /// 2. 应用环境变量覆写
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// 从指定文件读取（未出现的字段取默认值）
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 应用覆写
    ///
    /// # 参数
    /// - lookup: 键 → 值（生产环境为 std::env::var）
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_keys::MAX_UPLOAD_BYTES) {
            self.max_upload_bytes =
                value
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| ConfigError::ValueError {
                        key: env_keys::MAX_UPLOAD_BYTES.to_string(),
                        value: value.clone(),
                        message: e.to_string(),
                    })?;
        }

        if let Some(value) = lookup(env_keys::LOCALE).filter(|v| !v.trim().is_empty()) {
            self.locale = value.trim().to_string();
        }

        if let Some(value) = lookup(env_keys::LOG_FILTER).filter(|v| !v.trim().is_empty()) {
            self.log_filter = value.trim().to_string();
        }

        Ok(self)
    }
}

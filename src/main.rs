// ==========================================
// Excel 导入暂存引擎 - 命令行入口
// ==========================================
// 用法:
//   sheet-stage <file.xlsx>
// 解析首个工作表并暂存, 以 JSON 输出暂存视图
// ==========================================

use anyhow::{bail, Context};
use sheet_stage::api::UploadedFile;
use sheet_stage::config::ImportConfig;
use sheet_stage::domain::StagingKey;
use sheet_stage::{logging, AppState};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ImportConfig::load()?;
    logging::init(&config.log_filter);

    let Some(path) = std::env::args().nth(1) else {
        bail!("用法: sheet-stage <file.xlsx>");
    };

    tracing::info!("sheet-stage 版本: {}", sheet_stage::VERSION);

    let bytes = std::fs::read(&path).with_context(|| format!("无法读取文件: {}", path))?;
    let file_name = Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.clone());

    let state = AppState::new(config);
    let key = StagingKey::generate();

    if let Err(e) = state
        .import_api
        .upload(&key, Some(UploadedFile::new(file_name, bytes)))
        .await
    {
        bail!("{}", state.import_api.user_message(&e));
    }

    let view = state.import_api.view(&key).await?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

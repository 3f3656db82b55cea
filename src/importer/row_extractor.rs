// ==========================================
// Excel 导入暂存引擎 - 数据行提取
// ==========================================
// 职责: 表头区块之后逐行字符串化, 丢弃整行空白
// 红线: 输出每行恰好 header_count 个单元格（缺失补空串）
// ==========================================

use crate::domain::Sheet;
use crate::importer::cell_coercion::{coerce_opt, is_blank};

/// 提取数据行
///
/// # 参数
/// - sheet: 工作表
/// - header_count: 表头列数（每行输出宽度）
/// - data_start_row: 首个数据行号（= 表头首行 + 2）
///
/// # 逻辑
/// 1. 行号从 data_start_row 到最后一行（含）
/// 2. 行对象不存在 → 跳过（不输出空行）
/// 3. 每行构造 header_count 个字符串
/// 4. 全部空白 → 丢弃; 否则按原顺序保留
pub fn extract_rows(sheet: &Sheet, header_count: usize, data_start_row: u32) -> Vec<Vec<String>> {
    let last_row = match sheet.last_row_index() {
        Some(last) if last >= data_start_row => last,
        _ => return Vec::new(),
    };

    let mut rows = Vec::new();
    for (row_idx, row) in sheet.rows.range(data_start_row..=last_row) {
        let line: Vec<String> = (0..header_count as u32)
            .map(|col| coerce_opt(row.cell(col)))
            .collect();

        // 跳过完全空白的行
        if line.iter().all(|value| is_blank(value)) {
            tracing::debug!(row = row_idx, "跳过空白数据行");
            continue;
        }

        rows.push(line);
    }

    rows
}

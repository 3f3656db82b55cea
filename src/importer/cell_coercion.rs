// ==========================================
// Excel 导入暂存引擎 - 单元格字符串化
// ==========================================
// 职责: 将带类型的单元格映射为规范字符串（全函数, 永不失败）
// 规则:
//   Text     -> 原文
//   Number   -> 十进制表示（整数值保留一位小数, 无千分位）
//   Boolean  -> "true" / "false"
//   DateTime -> yyyy-MM-ddTHH:mm:ss
//   Formula  -> 公式源文本（不求值）
//   Empty/缺失 -> ""
// ==========================================

use crate::domain::Cell;

/// 日期时间输出格式
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 单元格 -> 字符串
pub fn coerce(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Number(value) => format_number(*value),
        Cell::Boolean(value) => value.to_string(),
        Cell::DateTime(ts) => ts.format(DATETIME_FORMAT).to_string(),
        Cell::Formula(expr) => expr.clone(),
        Cell::Empty => String::new(),
    }
}

/// 可缺失单元格 -> 字符串（缺失视为空串）
pub fn coerce_opt(cell: Option<&Cell>) -> String {
    cell.map(coerce).unwrap_or_default()
}

/// 数值格式化
///
/// - 整数值: `1500.0`
/// - 其他有限值: 最短往返十进制（不使用科学计数法）
/// - NaN / 无穷: `NaN` / `Infinity` / `-Infinity`
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// 去掉首尾的空格与控制字符（码点 <= U+0020）
///
/// 不去除 NBSP (U+00A0) 等 Unicode 空白, 与 Excel 导出中常见的占位字符保持区分
pub fn trim_ascii_controls(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// 空白判定: 空串或仅含空格/控制字符
pub fn is_blank(value: &str) -> bool {
    trim_ascii_controls(value).is_empty()
}

// ==========================================
// Excel 导入暂存引擎 - 双行表头解析
// ==========================================
// 职责: 将两行表头（分组行 + 字段行）合并为每列一个标签
// 规则:
//   top/sub 均非空 → "top - sub"
//   仅 sub 非空     → sub
//   其他           → top（可能为空串）
// 不做去重与清洗
// ==========================================

use crate::domain::Sheet;
use crate::importer::cell_coercion::{is_blank, trim_ascii_controls};
use crate::importer::merged_region::MergedRegionIndex;

/// 分组与字段之间的连接符
pub const HEADER_SEPARATOR: &str = " - ";

/// 合并一列的两级表头
pub fn combine_labels(top: &str, sub: &str) -> String {
    let top = trim_ascii_controls(top);
    let sub = trim_ascii_controls(sub);

    if !is_blank(top) && !is_blank(sub) {
        format!("{}{}{}", top, HEADER_SEPARATOR, sub)
    } else if !is_blank(sub) {
        sub.to_string()
    } else {
        top.to_string()
    }
}

/// 表头列数 = max(两行最后一个非空单元格列号, 与表头行相交的合并区域末列) + 1
///
/// Excel 会为合并区域的非锚点位置写入带样式的空白单元格, calamine 读取时丢弃它们,
/// 这里按合并区域的末列补回这部分宽度。
///
/// 两行均不存在（或均无内容）且无相交合并区域时为 0
pub fn header_column_count(sheet: &Sheet, header_row0: u32, header_row1: u32) -> usize {
    let populated = [header_row0, header_row1]
        .into_iter()
        .filter_map(|idx| sheet.row(idx))
        .filter_map(|row| row.last_populated_col());

    let merged = sheet
        .merged_regions
        .iter()
        .filter(|region| region.first_row <= header_row1 && region.last_row >= header_row0)
        .map(|region| region.last_col);

    populated
        .chain(merged)
        .max()
        .map(|last| last as usize + 1)
        .unwrap_or(0)
}

/// 解析两行表头
///
/// # 参数
/// - sheet: 工作表
/// - header_row0: 分组行（如 Customer / Address）
/// - header_row1: 字段行（如 cif / name / city）
///
/// # 返回
/// - 每列一个标签, 顺序与列号一致
pub fn resolve_headers(sheet: &Sheet, header_row0: u32, header_row1: u32) -> Vec<String> {
    let column_count = header_column_count(sheet, header_row0, header_row1);
    let index = MergedRegionIndex::new(sheet);

    (0..column_count as u32)
        .map(|col| {
            let top = index.resolve(header_row0, col);
            let sub = index.resolve(header_row1, col);
            combine_labels(&top, &sub)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, MergedRegion};

    #[test]
    fn test_combine_labels() {
        assert_eq!(combine_labels("Customer", "cif"), "Customer - cif");
        assert_eq!(combine_labels("", "cif"), "cif");
        assert_eq!(combine_labels("Customer", ""), "Customer");
        assert_eq!(combine_labels("", ""), "");
    }

    #[test]
    fn test_combine_labels_trims_both_parts() {
        assert_eq!(combine_labels("  Customer ", " cif  "), "Customer - cif");
        assert_eq!(combine_labels("   ", " cif"), "cif");
        assert_eq!(combine_labels(" Customer ", "  "), "Customer");
    }

    #[test]
    fn test_combine_labels_keeps_non_breaking_space() {
        assert_eq!(combine_labels("Customer", "\u{00A0}"), "Customer - \u{00A0}");
        assert_eq!(combine_labels("\tCustomer\n", "cif"), "Customer - cif");
    }

    #[test]
    fn test_merged_group_fills_every_column() {
        let sheet = Sheet::from_rows(vec![
            vec![Cell::text("Customer"), Cell::Empty, Cell::Empty],
            vec![],
        ])
        .with_merged_region(MergedRegion::new(0, 0, 0, 2));

        // 合并区域末列决定宽度, 即使第 0 行只有锚点一个实际单元格
        assert_eq!(header_column_count(&sheet, 0, 1), 3);
        assert_eq!(
            resolve_headers(&sheet, 0, 1),
            vec!["Customer", "Customer", "Customer"]
        );
    }

    #[test]
    fn test_merged_group_wider_than_sub_header_row() {
        let mut sheet = Sheet::from_rows(vec![
            vec![Cell::text("Customer")],
            vec![Cell::text("cif"), Cell::text("name")],
        ])
        .with_merged_region(MergedRegion::new(0, 0, 0, 2));
        sheet.set_cell(2, 2, Cell::text("x"));

        assert_eq!(
            resolve_headers(&sheet, 0, 1),
            vec!["Customer - cif", "Customer - name", "Customer"]
        );
    }

    #[test]
    fn test_merged_region_outside_header_rows_does_not_widen() {
        let sheet = Sheet::from_rows(vec![
            vec![Cell::text("cif")],
            vec![Cell::text("c")],
            vec![Cell::text("note")],
        ])
        .with_merged_region(MergedRegion::new(2, 2, 0, 4));

        assert_eq!(header_column_count(&sheet, 0, 1), 1);
    }

    #[test]
    fn test_blank_columns_yield_empty_labels() {
        let sheet = Sheet::from_rows(vec![
            vec![Cell::text("A"), Cell::Empty, Cell::text("C")],
            vec![Cell::text("a"), Cell::Empty, Cell::Empty],
        ]);
        assert_eq!(resolve_headers(&sheet, 0, 1), vec!["A - a", "", "C"]);
    }

    #[test]
    fn test_column_count_uses_wider_row() {
        let sheet = Sheet::from_rows(vec![
            vec![Cell::text("Customer")],
            vec![Cell::text("cif"), Cell::text("name"), Cell::text("tel"), Cell::Empty],
        ]);
        assert_eq!(header_column_count(&sheet, 0, 1), 3);
        assert_eq!(
            resolve_headers(&sheet, 0, 1),
            vec!["Customer - cif", "name", "tel"]
        );
    }

    #[test]
    fn test_missing_header_rows_produce_no_columns() {
        let mut sheet = Sheet::new();
        sheet.set_cell(5, 0, Cell::text("data"));
        assert!(resolve_headers(&sheet, 0, 1).is_empty());
    }

    #[test]
    fn test_only_second_header_row_present() {
        let mut sheet = Sheet::new();
        sheet.set_cell(1, 0, Cell::text("cif"));
        sheet.set_cell(1, 1, Cell::text("name"));
        assert_eq!(resolve_headers(&sheet, 0, 1), vec!["cif", "name"]);
    }

    #[test]
    fn test_non_text_header_cells_are_coerced() {
        let sheet = Sheet::from_rows(vec![
            vec![Cell::Number(2024.0), Cell::Boolean(true)],
            vec![Cell::text("Q1"), Cell::Empty],
        ]);
        assert_eq!(resolve_headers(&sheet, 0, 1), vec!["2024.0 - Q1", "true"]);
    }

    #[test]
    fn test_region_spanning_both_header_rows_repeats_anchor() {
        let sheet = Sheet::from_rows(vec![
            vec![Cell::text("No."), Cell::text("Customer")],
            vec![Cell::Empty, Cell::text("cif")],
        ])
        .with_merged_region(MergedRegion::new(0, 1, 0, 0));
        assert_eq!(
            resolve_headers(&sheet, 0, 1),
            vec!["No. - No.", "Customer - cif"]
        );
    }
}

// ==========================================
// Excel 导入暂存引擎 - 合并区域索引
// ==========================================
// 职责: 给定 (row, col), 找到覆盖它的合并区域并取锚点值
// 复杂度: 每次查找对区域列表线性扫描
//         表头区块的区域数量很小; 大规模区域不在支持范围内
// ==========================================

use crate::domain::{MergedRegion, Sheet};
use crate::importer::cell_coercion::{coerce_opt, is_blank};

/// 合并区域索引（借用工作表, 不复制区域）
pub struct MergedRegionIndex<'a> {
    sheet: &'a Sheet,
}

impl<'a> MergedRegionIndex<'a> {
    pub fn new(sheet: &'a Sheet) -> Self {
        Self { sheet }
    }

    /// 覆盖 (row, col) 的第一个区域（按区域列表顺序）
    pub fn find(&self, row: u32, col: u32) -> Option<&'a MergedRegion> {
        self.sheet
            .merged_regions
            .iter()
            .find(|region| region.contains(row, col))
    }

    /// 读取 (row, col) 的显示值
    ///
    /// # 逻辑
    /// 1. 直接单元格非空白 → 返回其字符串值
    /// 2. 否则取覆盖区域锚点 (first_row, first_col) 的值（不是查询点本身）
    /// 3. 无覆盖区域 → 空串
    ///
    /// # 说明
    /// 同一区域纵跨两行表头时, 两行在该列得到相同的锚点值
    pub fn resolve(&self, row: u32, col: u32) -> String {
        let direct = coerce_opt(self.sheet.cell(row, col));
        if !is_blank(&direct) {
            return direct;
        }

        match self.find(row, col) {
            Some(region) => {
                let (anchor_row, anchor_col) = region.anchor();
                coerce_opt(self.sheet.cell(anchor_row, anchor_col))
            }
            None => String::new(),
        }
    }
}

/// 便捷函数: resolve(sheet, row, col)
pub fn resolve(sheet: &Sheet, row: u32, col: u32) -> String {
    MergedRegionIndex::new(sheet).resolve(row, col)
}

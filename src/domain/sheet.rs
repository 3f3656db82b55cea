// ==========================================
// Excel 导入暂存引擎 - 工作表领域模型
// ==========================================
// 职责: 描述解码后的首个工作表（行/单元格/合并区域）
// 用途: 读取器写入, 表头解析与数据行提取只读
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Cell - 单元格值（带标签的和类型）
// ==========================================
// 红线: 仅此六种变体, 由 cell_coercion::coerce 穷尽匹配
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Text(String),
    Number(f64),
    Boolean(bool),
    DateTime(NaiveDateTime), // 日期格式的数值单元格
    Formula(String),         // 公式源文本（不求值）
    #[default]
    Empty,
}

impl Cell {
    /// 构造文本单元格
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// 构造公式单元格
    pub fn formula(expr: impl Into<String>) -> Self {
        Cell::Formula(expr.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Boolean(value)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(value: NaiveDateTime) -> Self {
        Cell::DateTime(value)
    }
}

// ==========================================
// MergedRegion - 合并区域
// ==========================================
// 锚点: (first_row, first_col) 处的单元格
// 约定: 区域之间互不重叠, 边界为闭区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRegion {
    pub first_row: u32,
    pub last_row: u32,
    pub first_col: u32,
    pub last_col: u32,
}

impl MergedRegion {
    pub fn new(first_row: u32, last_row: u32, first_col: u32, last_col: u32) -> Self {
        Self {
            first_row,
            last_row,
            first_col,
            last_col,
        }
    }

    /// (row, col) 是否落在区域内（含边界）
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.first_row && row <= self.last_row && col >= self.first_col && col <= self.last_col
    }

    /// 锚点坐标 (row, col)
    pub fn anchor(&self) -> (u32, u32) {
        (self.first_row, self.first_col)
    }
}

// ==========================================
// Row - 一行单元格
// ==========================================
// 说明: 长度可短于最宽行, 缺失部分视为 Empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cell(&self, col: u32) -> Option<&Cell> {
        self.cells.get(col as usize)
    }

    /// 最后一个非 Empty 单元格的列号
    pub fn last_populated_col(&self) -> Option<u32> {
        self.cells
            .iter()
            .rposition(|cell| !cell.is_empty())
            .map(|idx| idx as u32)
    }

    fn set(&mut self, col: u32, cell: Cell) {
        let idx = col as usize;
        if self.cells.len() <= idx {
            self.cells.resize(idx + 1, Cell::Empty);
        }
        self.cells[idx] = cell;
    }
}

// ==========================================
// Sheet - 工作表
// ==========================================
// 行号/列号从 0 开始, 行可稀疏（行对象可能不存在）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub rows: BTreeMap<u32, Row>,
    pub merged_regions: Vec<MergedRegion>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从连续行构造（第 0 行起）
    ///
    /// # 示例
    /// ```
    /// use sheet_stage::domain::{Cell, Sheet};
    /// let sheet = Sheet::from_rows(vec![vec![Cell::text("cif"), Cell::Number(1.0)]]);
    /// assert_eq!(sheet.first_row_index(), Some(0));
    /// ```
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, cells)| (idx as u32, Row::new(cells)))
            .collect();
        Self {
            rows,
            merged_regions: Vec::new(),
        }
    }

    /// 追加合并区域（链式）
    pub fn with_merged_region(mut self, region: MergedRegion) -> Self {
        self.merged_regions.push(region);
        self
    }

    /// 写入单个单元格, 行不存在时自动创建
    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        self.rows.entry(row).or_default().set(col, cell);
    }

    pub fn row(&self, row: u32) -> Option<&Row> {
        self.rows.get(&row)
    }

    /// 读取单元格; 行或单元格缺失时返回 None
    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.row(row).and_then(|r| r.cell(col))
    }

    pub fn first_row_index(&self) -> Option<u32> {
        self.rows.keys().next().copied()
    }

    pub fn last_row_index(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

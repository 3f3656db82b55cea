// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 用 zip 直接拼装最小 .xlsx 工作簿（内联字符串/数值/布尔/日期/公式/合并单元格）
// ==========================================

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::error::Error;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// 日期样式索引（styles.xml 中 numFmtId=14）
const DATE_STYLE: u32 = 1;

// ==========================================
// 工作表构建器
// ==========================================

#[derive(Default, Clone)]
pub struct SheetBuilder {
    cells: BTreeMap<u32, BTreeMap<u32, String>>,
    merges: Vec<String>,
}

impl SheetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内联字符串
    pub fn text(mut self, row: u32, col: u32, value: &str) -> Self {
        let xml = format!(
            r#"<c r="{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
            cell_ref(row, col),
            escape(value)
        );
        self.put(row, col, xml);
        self
    }

    /// 一行内联字符串（从第 0 列起, 空串跳过）
    pub fn text_row(mut self, row: u32, values: &[&str]) -> Self {
        for (col, value) in values.iter().enumerate() {
            if !value.is_empty() {
                self = self.text(row, col as u32, value);
            }
        }
        self
    }

    pub fn number(mut self, row: u32, col: u32, value: f64) -> Self {
        let xml = format!(r#"<c r="{}"><v>{}</v></c>"#, cell_ref(row, col), value);
        self.put(row, col, xml);
        self
    }

    pub fn boolean(mut self, row: u32, col: u32, value: bool) -> Self {
        let xml = format!(
            r#"<c r="{}" t="b"><v>{}</v></c>"#,
            cell_ref(row, col),
            if value { 1 } else { 0 }
        );
        self.put(row, col, xml);
        self
    }

    /// 日期单元格（Excel 序列号 + 日期样式）
    pub fn date_serial(mut self, row: u32, col: u32, serial: f64) -> Self {
        let xml = format!(
            r#"<c r="{}" s="{}"><v>{}</v></c>"#,
            cell_ref(row, col),
            DATE_STYLE,
            serial
        );
        self.put(row, col, xml);
        self
    }

    /// 公式单元格（带缓存值）
    pub fn formula(mut self, row: u32, col: u32, expr: &str, cached: f64) -> Self {
        let xml = format!(
            r#"<c r="{}"><f>{}</f><v>{}</v></c>"#,
            cell_ref(row, col),
            escape(expr),
            cached
        );
        self.put(row, col, xml);
        self
    }

    /// 带样式的空白单元格（Excel 为合并区域非锚点位置写入的占位单元格）
    pub fn styled_blank(mut self, row: u32, col: u32) -> Self {
        let xml = format!(r#"<c r="{}" s="0"/>"#, cell_ref(row, col));
        self.put(row, col, xml);
        self
    }

    /// 错误值单元格
    pub fn error(mut self, row: u32, col: u32, value: &str) -> Self {
        let xml = format!(r#"<c r="{}" t="e"><v>{}</v></c>"#, cell_ref(row, col), escape(value));
        self.put(row, col, xml);
        self
    }

    /// 合并区域, 如 "A1:B1"
    pub fn merge(mut self, range: &str) -> Self {
        self.merges.push(range.to_string());
        self
    }

    fn put(&mut self, row: u32, col: u32, xml: String) {
        self.cells.entry(row).or_default().insert(col, xml);
    }

    fn to_xml(&self) -> String {
        let mut xml = format!(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{}"><sheetData>"#, MAIN_NS);
        for (row, cells) in &self.cells {
            xml.push_str(&format!(r#"<row r="{}">"#, row + 1));
            for cell in cells.values() {
                xml.push_str(cell);
            }
            xml.push_str("</row>");
        }
        xml.push_str("</sheetData>");
        if !self.merges.is_empty() {
            xml.push_str(&format!(r#"<mergeCells count="{}">"#, self.merges.len()));
            for range in &self.merges {
                xml.push_str(&format!(r#"<mergeCell ref="{}"/>"#, range));
            }
            xml.push_str("</mergeCells>");
        }
        xml.push_str("</worksheet>");
        xml
    }
}

// ==========================================
// 工作簿构建
// ==========================================

/// 构建包含若干工作表的 .xlsx 字节（第一个为首个工作表）
pub fn build_workbook(sheets: &[SheetBuilder]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    let mut content_types = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
    );
    for idx in 1..=sheets.len() {
        content_types.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            idx
        ));
    }
    content_types.push_str("</Types>");
    write_entry(&mut writer, options, "[Content_Types].xml", &content_types)?;

    write_entry(
        &mut writer,
        options,
        "_rels/.rels",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{}"><Relationship Id="rId1" Type="{}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#,
            PKG_REL_NS, REL_NS
        ),
    )?;

    let mut workbook = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="{}" xmlns:r="{}"><sheets>"#,
        MAIN_NS, REL_NS
    );
    let mut workbook_rels = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{}">"#,
        PKG_REL_NS
    );
    for idx in 1..=sheets.len() {
        workbook.push_str(&format!(
            r#"<sheet name="Sheet{}" sheetId="{}" r:id="rId{}"/>"#,
            idx, idx, idx
        ));
        workbook_rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{}/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            idx, REL_NS, idx
        ));
    }
    workbook.push_str("</sheets></workbook>");
    workbook_rels.push_str(&format!(
        r#"<Relationship Id="rId{}" Type="{}/styles" Target="styles.xml"/></Relationships>"#,
        sheets.len() + 1,
        REL_NS
    ));
    write_entry(&mut writer, options, "xl/workbook.xml", &workbook)?;
    write_entry(&mut writer, options, "xl/_rels/workbook.xml.rels", &workbook_rels)?;

    write_entry(
        &mut writer,
        options,
        "xl/styles.xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><styleSheet xmlns="{}"><cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="14" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/></cellXfs></styleSheet>"#,
            MAIN_NS
        ),
    )?;

    for (idx, sheet) in sheets.iter().enumerate() {
        let name = format!("xl/worksheets/sheet{}.xml", idx + 1);
        write_entry(&mut writer, options, &name, &sheet.to_xml())?;
    }

    Ok(writer.finish()?.into_inner())
}

/// 构建单工作表 .xlsx 字节
pub fn build_single_sheet(sheet: SheetBuilder) -> Result<Vec<u8>, Box<dyn Error>> {
    build_workbook(&[sheet])
}

/// 示例工作簿: Customer/Address 两组表头 + 一行数据 + 一行空白
pub fn customer_address_workbook() -> Vec<u8> {
    let sheet = SheetBuilder::new()
        .text_row(0, &["Customer", "", "Address", ""])
        .text_row(1, &["cif", "name", "city", "zip"])
        .text_row(2, &["001", "John", "BKK", "10110"])
        .text(3, 0, "")
        .text(3, 3, "")
        .merge("A1:B1")
        .merge("C1:D1");
    build_single_sheet(sheet).expect("构建示例工作簿失败")
}

fn write_entry(
    writer: &mut ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    name: &str,
    content: &str,
) -> Result<(), Box<dyn Error>> {
    writer.start_file(name, options)?;
    writer.write_all(content.as_bytes())?;
    Ok(())
}

/// (0, 0) -> "A1", (2, 27) -> "AB3"
pub fn cell_ref(row: u32, col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect::<String>() + &(row + 1).to_string()
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

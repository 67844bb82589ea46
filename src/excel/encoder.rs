//! `.xlsx` encoder for the in-memory workbook

use std::collections::HashMap;
use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Formula, Workbook as XlsxWorkbook};
use tracing::debug;

use crate::document::{CellStyle, CellValue, Sheet, Workbook};
use crate::error::EstimateResult;

const AMOUNT_FORMAT: &str = "#,##0";
const HIGHLIGHT_COLOR: u32 = 0xFCE4D6;
const SECTION_COLOR: u32 = 0xD9D9D9;
const HEADER_COLOR: u32 = 0xF2F2F2;

/// Renders a [`Workbook`] with `rust_xlsxwriter`.
#[derive(Debug, Clone)]
pub struct XlsxEncoder {
    formats: HashMap<CellStyle, Format>,
    plain: Format,
}

impl Default for XlsxEncoder {
    fn default() -> Self {
        Self::new(12.0)
    }
}

impl XlsxEncoder {
    pub fn new(font_size_pt: f64) -> Self {
        let body = Format::new()
            .set_font_size(font_size_pt)
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap();
        let center = body.clone().set_align(FormatAlign::Center);
        let number = body
            .clone()
            .set_align(FormatAlign::Right)
            .set_num_format(AMOUNT_FORMAT);
        let highlight = body.clone().set_background_color(HIGHLIGHT_COLOR);
        let section = body.clone().set_background_color(SECTION_COLOR);

        let formats = HashMap::from([
            (
                CellStyle::Title,
                Format::new()
                    .set_bold()
                    .set_font_size(font_size_pt + 8.0)
                    .set_align(FormatAlign::Center)
                    .set_align(FormatAlign::VerticalCenter),
            ),
            (
                CellStyle::Header,
                center.clone().set_bold().set_background_color(HEADER_COLOR),
            ),
            (CellStyle::Body, body.clone()),
            (CellStyle::Center, center.clone()),
            (CellStyle::Number, number.clone()),
            (CellStyle::Highlight, highlight.clone()),
            (
                CellStyle::HighlightNumber,
                number.clone().set_background_color(HIGHLIGHT_COLOR),
            ),
            (CellStyle::Section, section.clone()),
            (
                CellStyle::SectionCenter,
                section.set_align(FormatAlign::Center),
            ),
            (
                CellStyle::Note,
                Format::new()
                    .set_font_size(font_size_pt)
                    .set_align(FormatAlign::Top)
                    .set_text_wrap(),
            ),
        ]);

        Self {
            formats,
            plain: Format::new().set_font_size(font_size_pt),
        }
    }

    fn format(&self, style: Option<CellStyle>) -> &Format {
        style
            .and_then(|s| self.formats.get(&s))
            .unwrap_or(&self.plain)
    }

    /// Encode to `.xlsx` bytes.
    pub fn encode(&self, workbook: &Workbook) -> EstimateResult<Vec<u8>> {
        let mut xlsx = self.build(workbook)?;
        Ok(xlsx.save_to_buffer()?)
    }

    /// Encode and write to `path`.
    pub fn save(&self, workbook: &Workbook, path: &Path) -> EstimateResult<()> {
        let mut xlsx = self.build(workbook)?;
        xlsx.save(path)?;
        Ok(())
    }

    fn build(&self, workbook: &Workbook) -> EstimateResult<XlsxWorkbook> {
        let mut xlsx = XlsxWorkbook::new();
        for sheet in workbook.sheets() {
            self.write_sheet(&mut xlsx, sheet)?;
        }
        Ok(xlsx)
    }

    fn write_sheet(&self, xlsx: &mut XlsxWorkbook, sheet: &Sheet) -> EstimateResult<()> {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(sheet.name())?;

        for (&col, &width) in sheet.column_widths() {
            worksheet.set_column_width(col, width)?;
        }
        for (&row, &height) in sheet.row_heights() {
            worksheet.set_row_height(row, height)?;
        }

        // Merges first: the cell writes below then fill the top-left cell.
        for m in sheet.merges() {
            let format = self.format(sheet.style_at(m.first_row, m.first_col));
            worksheet.merge_range(m.first_row, m.first_col, m.last_row, m.last_col, "", format)?;
        }

        for (&(row, col), cell) in sheet.cells() {
            let format = self.format(cell.style);
            match &cell.value {
                Some(CellValue::Text(text)) => {
                    worksheet.write_string_with_format(row, col, text, format)?;
                }
                Some(CellValue::Number(n)) => {
                    worksheet.write_number_with_format(row, col, *n, format)?;
                }
                Some(CellValue::Formula(f)) => {
                    worksheet.write_formula_with_format(row, col, Formula::new(f), format)?;
                }
                None => {
                    worksheet.write_blank(row, col, format)?;
                }
            }
        }

        debug!(
            sheet = sheet.name(),
            rows = sheet.rows_used(),
            merges = sheet.merges().len(),
            "encoded worksheet"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SheetWriter;

    fn small_workbook() -> Workbook {
        let mut wb = Workbook::new();
        let idx = wb.add_sheet("估價單").unwrap();
        let sheet = wb.sheet_at_mut(idx).unwrap();
        sheet.write_text(0, 0, "title", CellStyle::Title).unwrap();
        sheet.merge(0, 0, 0, 7).unwrap();
        sheet.write_number(1, 2, 2.0, CellStyle::Center).unwrap();
        sheet.apply_style(1, 4, CellStyle::Number).unwrap();
        sheet.write_formula(1, 5, "C2*E2", CellStyle::Number).unwrap();
        sheet.set_row_height(0, 30.0).unwrap();
        sheet.set_column_width(1, 61.25).unwrap();
        wb
    }

    #[test]
    fn test_encode_produces_zip_container() {
        let bytes = XlsxEncoder::default().encode(&small_workbook()).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        XlsxEncoder::new(11.0)
            .save(&small_workbook(), &path)
            .unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 100);
    }

    #[test]
    fn test_every_style_has_a_format() {
        let encoder = XlsxEncoder::default();
        for style in [
            CellStyle::Title,
            CellStyle::Header,
            CellStyle::Body,
            CellStyle::Center,
            CellStyle::Number,
            CellStyle::Highlight,
            CellStyle::HighlightNumber,
            CellStyle::Section,
            CellStyle::SectionCenter,
            CellStyle::Note,
        ] {
            assert!(encoder.formats.contains_key(&style), "{:?}", style);
        }
    }
}

//! Auxiliary note sheets
//!
//! Each note sheet carries the same heading block followed by one of two
//! fixed clause sets. Clause rows are sized to fit their wrapped text.

use tracing::debug;

use super::clauses::{INTERIOR_CLAUSES, STRUCTURAL_CLAUSES};
use super::height::estimate_row_height;
use crate::document::{CellStyle, ColNum, RowNum, SheetWriter};
use crate::error::EstimateResult;

const TITLE: &str = "工　程　估　價　單";
const SIGNATURE_LINE: &str =
    "日　　期：____________　計　　算：____________　核　　算：____________";
const NOTES_CAPTION: &str = "備註：";

/// Heading block starts on the third row.
const FIRST_ROW: RowNum = 2;
const LAST_COL: ColNum = 6;
const COLUMN_WIDTHS: [f64; 7] = [5.0, 80.0, 10.0, 10.0, 10.0, 10.0, 15.0];
const TITLE_HEIGHT_PT: f64 = 30.0;
const INFO_HEIGHT_PT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteSheetKind {
    /// Structure and exterior finishing.
    Structural,
    /// Interior finishing.
    Interior,
}

impl NoteSheetKind {
    pub const ALL: [NoteSheetKind; 2] = [NoteSheetKind::Structural, NoteSheetKind::Interior];

    pub fn sheet_name(self) -> &'static str {
        match self {
            NoteSheetKind::Structural => "結構體及外牆裝修 備註",
            NoteSheetKind::Interior => "裝修 備註",
        }
    }

    pub fn clauses(self) -> &'static [&'static str] {
        match self {
            NoteSheetKind::Structural => &STRUCTURAL_CLAUSES,
            NoteSheetKind::Interior => &INTERIOR_CLAUSES,
        }
    }
}

/// Writes the heading block and numbered clauses onto a note sheet.
#[derive(Debug, Clone)]
pub struct NoteSheetComposer {
    font_size_pt: f64,
}

impl NoteSheetComposer {
    pub fn new(font_size_pt: f64) -> Self {
        Self { font_size_pt }
    }

    /// Width in characters of the merged clause text area (B:G).
    pub fn clause_width_chars() -> f64 {
        COLUMN_WIDTHS[1..].iter().sum()
    }

    /// Row of the first clause (0-based).
    pub fn first_clause_row() -> RowNum {
        FIRST_ROW + 5
    }

    /// Compose `kind` onto `sheet`; returns the number of clause rows written.
    pub fn compose(
        &self,
        sheet: &mut dyn SheetWriter,
        kind: NoteSheetKind,
        project_name: &str,
    ) -> EstimateResult<usize> {
        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            sheet.set_column_width(col as ColNum, *width)?;
        }

        let mut row = FIRST_ROW;

        sheet.write_text(row, 0, TITLE, CellStyle::Title)?;
        sheet.merge(row, 0, row, LAST_COL)?;
        sheet.set_row_height(row, TITLE_HEIGHT_PT)?;
        row += 1;

        let project_line = format!("工程名稱：{}", project_name);
        for text in [project_line.as_str(), SIGNATURE_LINE] {
            sheet.write_text(row, 0, text, CellStyle::Body)?;
            sheet.merge(row, 0, row, LAST_COL)?;
            sheet.set_row_height(row, INFO_HEIGHT_PT)?;
            row += 1;
        }

        row += 1;

        sheet.write_text(row, 0, NOTES_CAPTION, CellStyle::Body)?;
        sheet.merge(row, 0, row, LAST_COL)?;
        row += 1;

        let width = Self::clause_width_chars();
        let clauses = kind.clauses();
        for (i, clause) in clauses.iter().enumerate() {
            sheet.write_text(row, 0, &format!("{}.", i + 1), CellStyle::Note)?;
            sheet.write_text(row, 1, clause, CellStyle::Note)?;
            sheet.merge(row, 1, row, LAST_COL)?;
            sheet.set_row_height(row, estimate_row_height(clause, width, self.font_size_pt))?;
            row += 1;
        }

        debug!(
            sheet = kind.sheet_name(),
            clauses = clauses.len(),
            "composed note sheet"
        );
        Ok(clauses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Sheet, Workbook};

    fn composed(kind: NoteSheetKind) -> (Workbook, usize) {
        let mut wb = Workbook::new();
        let idx = wb.add_sheet(kind.sheet_name()).unwrap();
        let sheet: &mut Sheet = wb.sheet_at_mut(idx).unwrap();
        let count = NoteSheetComposer::new(12.0)
            .compose(sheet, kind, "Test")
            .unwrap();
        (wb, count)
    }

    #[test]
    fn test_heading_block_layout() {
        let (wb, _) = composed(NoteSheetKind::Structural);
        let sheet = wb.sheet("結構體及外牆裝修 備註").unwrap();

        assert_eq!(sheet.text_at(2, 0), Some(TITLE));
        assert_eq!(sheet.row_height(2), Some(30.0));
        assert_eq!(sheet.text_at(3, 0), Some("工程名稱：Test"));
        assert_eq!(sheet.text_at(4, 0), Some(SIGNATURE_LINE));
        assert!(sheet.cell(5, 0).is_none(), "blank spacer row");
        assert_eq!(sheet.text_at(6, 0), Some("備註："));
        assert_eq!(sheet.column_width(1), Some(80.0));
    }

    #[test]
    fn test_clauses_are_numbered_and_merged() {
        let (wb, count) = composed(NoteSheetKind::Interior);
        let sheet = wb.sheet("裝修 備註").unwrap();
        let first = NoteSheetComposer::first_clause_row();

        assert_eq!(count, INTERIOR_CLAUSES.len());
        assert_eq!(sheet.text_at(first, 0), Some("1."));
        assert_eq!(sheet.text_at(first, 1), Some(INTERIOR_CLAUSES[0]));
        let last = first + count as RowNum - 1;
        assert_eq!(sheet.text_at(last, 0), Some(format!("{}.", count).as_str()));
        assert_eq!(sheet.style_at(last, 1), Some(CellStyle::Note));
        assert!(sheet
            .merges()
            .iter()
            .any(|m| m.first_row == last && m.first_col == 1 && m.last_col == 6));
        assert_eq!(sheet.rows_used(), last + 1);
    }

    #[test]
    fn test_clause_heights_follow_text_length() {
        let (wb, _) = composed(NoteSheetKind::Structural);
        let sheet = wb.sheet("結構體及外牆裝修 備註").unwrap();
        let first = NoteSheetComposer::first_clause_row();

        assert_eq!(NoteSheetComposer::clause_width_chars(), 135.0);
        for (i, clause) in STRUCTURAL_CLAUSES.iter().enumerate() {
            let row = first + i as RowNum;
            assert_eq!(
                sheet.row_height(row),
                Some(estimate_row_height(clause, 135.0, 12.0))
            );
        }
        // the long opening clause wraps; short ones take one line
        assert!(sheet.row_height(first).unwrap() > 29.0);
        assert_eq!(sheet.row_height(first + 11), Some(29.0));
    }

    #[test]
    fn test_kinds_use_distinct_sheets_and_clauses() {
        assert_ne!(
            NoteSheetKind::Structural.sheet_name(),
            NoteSheetKind::Interior.sheet_name()
        );
        assert_eq!(NoteSheetKind::Structural.clauses().len(), 54);
        assert_eq!(NoteSheetKind::Interior.clauses().len(), 65);
    }
}

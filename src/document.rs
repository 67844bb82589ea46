//! In-memory workbook and the cell-writing contract the layout engine uses
//!
//! The engine only talks to [`SheetWriter`]. [`Sheet`] is the in-crate
//! implementation: a sparse cell grid plus merges, row heights and column
//! widths. An encoder (see `crate::excel`) turns the finished [`Workbook`]
//! into a file.

use std::collections::BTreeMap;

use crate::error::{EstimateError, EstimateResult};

/// 0-based row index, as the encoder addresses rows.
pub type RowNum = u32;
/// 0-based column index.
pub type ColNum = u16;

pub const MAX_ROWS: RowNum = 1_048_576;
pub const MAX_COLS: ColNum = 16_384;
const MAX_SHEET_NAME_CHARS: usize = 31;

/// Named cell styles. The encoder decides what each one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    Title,
    Header,
    Body,
    Center,
    Number,
    Highlight,
    HighlightNumber,
    Section,
    SectionCenter,
    Note,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    /// Formula text without the leading '='.
    Formula(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub value: Option<CellValue>,
    pub style: Option<CellStyle>,
}

/// Inclusive rectangular range, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRange {
    pub first_row: RowNum,
    pub first_col: ColNum,
    pub last_row: RowNum,
    pub last_col: ColNum,
}

impl MergeRange {
    fn overlaps(&self, other: &MergeRange) -> bool {
        self.first_row <= other.last_row
            && other.first_row <= self.last_row
            && self.first_col <= other.last_col
            && other.first_col <= self.last_col
    }
}

/// The cell-writing collaborator.
///
/// Rows and columns are 0-based here; formula text uses 1-based A1 addresses.
pub trait SheetWriter {
    fn set_text(&mut self, row: RowNum, col: ColNum, text: &str) -> EstimateResult<()>;

    fn set_number(&mut self, row: RowNum, col: ColNum, value: f64) -> EstimateResult<()>;

    fn set_formula(&mut self, row: RowNum, col: ColNum, formula: &str) -> EstimateResult<()>;

    fn apply_style(&mut self, row: RowNum, col: ColNum, style: CellStyle) -> EstimateResult<()>;

    fn merge(
        &mut self,
        first_row: RowNum,
        first_col: ColNum,
        last_row: RowNum,
        last_col: ColNum,
    ) -> EstimateResult<()>;

    fn set_row_height(&mut self, row: RowNum, height_pt: f64) -> EstimateResult<()>;

    fn set_column_width(&mut self, col: ColNum, width_chars: f64) -> EstimateResult<()>;

    fn write_text(
        &mut self,
        row: RowNum,
        col: ColNum,
        text: &str,
        style: CellStyle,
    ) -> EstimateResult<()> {
        self.set_text(row, col, text)?;
        self.apply_style(row, col, style)
    }

    fn write_number(
        &mut self,
        row: RowNum,
        col: ColNum,
        value: f64,
        style: CellStyle,
    ) -> EstimateResult<()> {
        self.set_number(row, col, value)?;
        self.apply_style(row, col, style)
    }

    fn write_formula(
        &mut self,
        row: RowNum,
        col: ColNum,
        formula: &str,
        style: CellStyle,
    ) -> EstimateResult<()> {
        self.set_formula(row, col, formula)?;
        self.apply_style(row, col, style)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<(RowNum, ColNum), Cell>,
    merges: Vec<MergeRange>,
    row_heights: BTreeMap<RowNum, f64>,
    column_widths: BTreeMap<ColNum, f64>,
}

impl Sheet {
    fn new(name: String) -> Self {
        Self {
            name,
            cells: BTreeMap::new(),
            merges: Vec::new(),
            row_heights: BTreeMap::new(),
            column_widths: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cell(&self, row: RowNum, col: ColNum) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    pub fn cells(&self) -> impl Iterator<Item = (&(RowNum, ColNum), &Cell)> {
        self.cells.iter()
    }

    pub fn text_at(&self, row: RowNum, col: ColNum) -> Option<&str> {
        match self.cell(row, col)?.value.as_ref()? {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn number_at(&self, row: RowNum, col: ColNum) -> Option<f64> {
        match self.cell(row, col)?.value.as_ref()? {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn formula_at(&self, row: RowNum, col: ColNum) -> Option<&str> {
        match self.cell(row, col)?.value.as_ref()? {
            CellValue::Formula(f) => Some(f.as_str()),
            _ => None,
        }
    }

    pub fn style_at(&self, row: RowNum, col: ColNum) -> Option<CellStyle> {
        self.cell(row, col)?.style
    }

    pub fn merges(&self) -> &[MergeRange] {
        &self.merges
    }

    pub fn row_height(&self, row: RowNum) -> Option<f64> {
        self.row_heights.get(&row).copied()
    }

    pub fn row_heights(&self) -> impl Iterator<Item = (&RowNum, &f64)> {
        self.row_heights.iter()
    }

    pub fn column_widths(&self) -> impl Iterator<Item = (&ColNum, &f64)> {
        self.column_widths.iter()
    }

    pub fn column_width(&self, col: ColNum) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    /// One past the last row holding a cell, or 0 for an empty sheet.
    pub fn rows_used(&self) -> RowNum {
        self.cells
            .keys()
            .map(|(row, _)| row + 1)
            .max()
            .unwrap_or(0)
    }

    fn check_bounds(&self, row: RowNum, col: ColNum) -> EstimateResult<()> {
        if row >= MAX_ROWS || col >= MAX_COLS {
            return Err(EstimateError::Write(format!(
                "cell ({}, {}) is outside sheet '{}'",
                row, col, self.name
            )));
        }
        Ok(())
    }

    fn cell_mut(&mut self, row: RowNum, col: ColNum) -> EstimateResult<&mut Cell> {
        self.check_bounds(row, col)?;
        Ok(self.cells.entry((row, col)).or_default())
    }
}

impl SheetWriter for Sheet {
    fn set_text(&mut self, row: RowNum, col: ColNum, text: &str) -> EstimateResult<()> {
        self.cell_mut(row, col)?.value = Some(CellValue::Text(text.to_string()));
        Ok(())
    }

    fn set_number(&mut self, row: RowNum, col: ColNum, value: f64) -> EstimateResult<()> {
        if !value.is_finite() {
            return Err(EstimateError::Write(format!(
                "non-finite number at ({}, {}) in sheet '{}'",
                row, col, self.name
            )));
        }
        self.cell_mut(row, col)?.value = Some(CellValue::Number(value));
        Ok(())
    }

    fn set_formula(&mut self, row: RowNum, col: ColNum, formula: &str) -> EstimateResult<()> {
        let body = formula.trim().trim_start_matches('=');
        if body.is_empty() {
            return Err(EstimateError::Write(format!(
                "empty formula at ({}, {}) in sheet '{}'",
                row, col, self.name
            )));
        }
        self.cell_mut(row, col)?.value = Some(CellValue::Formula(body.to_string()));
        Ok(())
    }

    fn apply_style(&mut self, row: RowNum, col: ColNum, style: CellStyle) -> EstimateResult<()> {
        self.cell_mut(row, col)?.style = Some(style);
        Ok(())
    }

    fn merge(
        &mut self,
        first_row: RowNum,
        first_col: ColNum,
        last_row: RowNum,
        last_col: ColNum,
    ) -> EstimateResult<()> {
        self.check_bounds(last_row, last_col)?;
        if first_row > last_row || first_col > last_col {
            return Err(EstimateError::Write(format!(
                "inverted merge range ({}, {})..({}, {})",
                first_row, first_col, last_row, last_col
            )));
        }
        if first_row == last_row && first_col == last_col {
            return Err(EstimateError::Write(format!(
                "merge range ({}, {}) covers a single cell",
                first_row, first_col
            )));
        }

        let range = MergeRange {
            first_row,
            first_col,
            last_row,
            last_col,
        };
        if let Some(existing) = self.merges.iter().find(|m| m.overlaps(&range)) {
            return Err(EstimateError::Write(format!(
                "merge {:?} overlaps existing merge {:?} in sheet '{}'",
                range, existing, self.name
            )));
        }
        self.merges.push(range);
        Ok(())
    }

    fn set_row_height(&mut self, row: RowNum, height_pt: f64) -> EstimateResult<()> {
        self.check_bounds(row, 0)?;
        self.row_heights.insert(row, height_pt);
        Ok(())
    }

    fn set_column_width(&mut self, col: ColNum, width_chars: f64) -> EstimateResult<()> {
        self.check_bounds(0, col)?;
        self.column_widths.insert(col, width_chars);
        Ok(())
    }
}

/// An ordered set of uniquely named sheets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet and return its index.
    pub fn add_sheet(&mut self, name: &str) -> EstimateResult<usize> {
        let len = name.chars().count();
        if len == 0 || len > MAX_SHEET_NAME_CHARS {
            return Err(EstimateError::Write(format!(
                "sheet name '{}' must be 1-{} characters",
                name, MAX_SHEET_NAME_CHARS
            )));
        }
        if self.sheet(name).is_some() {
            return Err(EstimateError::Write(format!(
                "duplicate sheet name '{}'",
                name
            )));
        }
        self.sheets.push(Sheet::new(name.to_string()));
        Ok(self.sheets.len() - 1)
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_at(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    pub fn sheet_at_mut(&mut self, index: usize) -> EstimateResult<&mut Sheet> {
        self.sheets
            .get_mut(index)
            .ok_or_else(|| EstimateError::Write(format!("no sheet at index {}", index)))
    }
}

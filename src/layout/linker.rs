//! Row arithmetic and formula text for the summary and detail blocks
//!
//! Every function here works on 1-based spreadsheet rows, the way formula
//! text addresses them. Nothing touches cells.

use std::collections::BTreeMap;

use crate::error::{EstimateError, EstimateResult};

/// Column holding amounts in both blocks.
pub const AMOUNT_COLUMN: char = 'F';
/// Column holding quantities (and the surcharge/tax percentages).
pub const QUANTITY_COLUMN: char = 'C';
/// Column holding unit prices.
pub const UNIT_PRICE_COLUMN: char = 'E';

/// Fixed-offset row map of the summary block.
///
/// The five aggregate rows follow the last category row in this order:
/// subtotal, other fee, running total, tax, grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLayout {
    pub first_data_row: u32,
    pub category_count: u32,
}

impl SummaryLayout {
    pub fn new(first_data_row: u32, category_count: u32) -> Self {
        Self {
            first_data_row,
            category_count,
        }
    }

    /// Summary row of the category with sequence index `index`.
    pub fn category_row(&self, index: u32) -> u32 {
        self.first_data_row + index
    }

    pub fn last_data_row(&self) -> u32 {
        self.first_data_row + self.category_count - 1
    }

    pub fn subtotal_row(&self) -> u32 {
        self.last_data_row() + 1
    }

    pub fn other_fee_row(&self) -> u32 {
        self.subtotal_row() + 1
    }

    pub fn running_total_row(&self) -> u32 {
        self.other_fee_row() + 1
    }

    pub fn tax_row(&self) -> u32 {
        self.running_total_row() + 1
    }

    pub fn grand_total_row(&self) -> u32 {
        self.tax_row() + 1
    }

    /// The words-form total sits right after `note_count` note rows.
    pub fn amount_in_words_row(&self, note_count: u32) -> u32 {
        self.grand_total_row() + note_count + 1
    }

    pub fn subtotal_formula(&self) -> String {
        sum_range(self.first_data_row, self.last_data_row())
    }

    pub fn other_fee_formula(&self) -> String {
        format!(
            "{a}{}*{q}{}/100",
            self.subtotal_row(),
            self.other_fee_row(),
            a = AMOUNT_COLUMN,
            q = QUANTITY_COLUMN
        )
    }

    pub fn running_total_formula(&self) -> String {
        format!(
            "{a}{}+{a}{}",
            self.subtotal_row(),
            self.other_fee_row(),
            a = AMOUNT_COLUMN
        )
    }

    pub fn tax_formula(&self) -> String {
        format!(
            "{a}{}*{q}{}/100",
            self.running_total_row(),
            self.tax_row(),
            a = AMOUNT_COLUMN,
            q = QUANTITY_COLUMN
        )
    }

    pub fn grand_total_formula(&self) -> String {
        format!(
            "{a}{}+{a}{}",
            self.running_total_row(),
            self.tax_row(),
            a = AMOUNT_COLUMN
        )
    }

    /// Grouped-digits rendering of the grand total.
    pub fn amount_as_text_formula(&self) -> String {
        format!(
            "TEXT({}{},\"#,##0\")",
            AMOUNT_COLUMN,
            self.grand_total_row()
        )
    }
}

/// `C{row}*E{row}`
pub fn line_amount(row: u32) -> String {
    format!("{}{row}*{}{row}", QUANTITY_COLUMN, UNIT_PRICE_COLUMN)
}

/// Detail subtotal over the item rows `[start, end]`.
pub fn detail_subtotal(start: u32, end: u32) -> String {
    sum_range(start, end)
}

/// Direct reference from a summary row to a detail subtotal.
pub fn summary_reference(detail_subtotal_row: u32) -> String {
    format!("{}{}", AMOUNT_COLUMN, detail_subtotal_row)
}

fn sum_range(start: u32, end: u32) -> String {
    format!("SUM({a}{}:{a}{})", start, end, a = AMOUNT_COLUMN)
}

/// Category sequence index → 1-based detail subtotal row, for one export.
///
/// Entries are written once during the detail pass and taken once during
/// backfill, so a second write or a second read is an error.
#[derive(Debug, Default)]
pub struct RowReferenceMap {
    rows: BTreeMap<usize, u32>,
}

impl RowReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category_index: usize, subtotal_row: u32) -> EstimateResult<()> {
        if let Some(existing) = self.rows.get(&category_index) {
            return Err(EstimateError::Write(format!(
                "category {} already has a subtotal at row {}",
                category_index, existing
            )));
        }
        self.rows.insert(category_index, subtotal_row);
        Ok(())
    }

    pub fn take(&mut self, category_index: usize) -> EstimateResult<u32> {
        self.rows.remove(&category_index).ok_or_else(|| {
            EstimateError::Write(format!(
                "no detail subtotal recorded for category {}",
                category_index
            ))
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.rows.iter().map(|(&k, &v)| (k, v))
    }

    /// Fail if any entry was never consumed.
    pub fn ensure_consumed(&self) -> EstimateResult<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let leftover: Vec<String> = self.rows.keys().map(|k| k.to_string()).collect();
        Err(EstimateError::Write(format!(
            "detail subtotals never linked for categories {}",
            leftover.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aggregate_rows_follow_last_data_row() {
        for k in [1u32, 2, 7, 40] {
            let layout = SummaryLayout::new(4, k);
            let last = layout.last_data_row();
            assert_eq!(last, 4 + k - 1);
            assert_eq!(layout.subtotal_row(), last + 1);
            assert_eq!(layout.other_fee_row(), last + 2);
            assert_eq!(layout.running_total_row(), last + 3);
            assert_eq!(layout.tax_row(), last + 4);
            assert_eq!(layout.grand_total_row(), last + 5);
        }
    }

    #[test]
    fn test_single_category_boundary() {
        let layout = SummaryLayout::new(4, 1);
        assert_eq!(layout.category_row(0), 4);
        assert_eq!(layout.subtotal_formula(), "SUM(F4:F4)");
        assert_eq!(layout.other_fee_formula(), "F5*C6/100");
        assert_eq!(layout.running_total_formula(), "F5+F6");
        assert_eq!(layout.tax_formula(), "F7*C8/100");
        assert_eq!(layout.grand_total_formula(), "F7+F8");
        assert_eq!(layout.amount_as_text_formula(), "TEXT(F9,\"#,##0\")");
    }

    #[test]
    fn test_words_row_after_notes() {
        let layout = SummaryLayout::new(4, 2);
        assert_eq!(layout.grand_total_row(), 10);
        assert_eq!(layout.amount_in_words_row(21), 32);
    }

    #[test]
    fn test_line_and_detail_formulas() {
        assert_eq!(line_amount(12), "C12*E12");
        assert_eq!(detail_subtotal(12, 13), "SUM(F12:F13)");
        assert_eq!(detail_subtotal(20, 20), "SUM(F20:F20)");
        assert_eq!(summary_reference(14), "F14");
    }

    #[test]
    fn test_reference_map_each_entry_once() {
        let mut map = RowReferenceMap::new();
        map.insert(0, 14).unwrap();
        map.insert(1, 18).unwrap();
        assert!(map.insert(1, 19).is_err());
        assert_eq!(map.len(), 2);

        assert_eq!(map.take(1).unwrap(), 18);
        assert!(map.take(1).is_err(), "second take must fail");
        assert!(map.ensure_consumed().is_err());

        assert_eq!(map.take(0).unwrap(), 14);
        assert!(map.is_empty());
        assert!(map.ensure_consumed().is_ok());
    }
}

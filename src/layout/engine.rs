//! Report layout engine
//!
//! Builds the estimate workbook in strictly ordered stages:
//!
//! 1. summary skeleton (placeholders where amounts go)
//! 2. detail block, recording each category's subtotal row
//! 3. summary backfill, linking every category row to its detail subtotal
//! 4. evaluation, and the grand total rendered in words
//! 5. the two note sheets
//!
//! The summary block is written before the detail block exists, so stage 3
//! relies on the [`RowReferenceMap`] filled in stage 2. Both the map and the
//! row cursor live only for one call to [`ReportLayoutEngine::export`].

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info, warn};

use super::clauses::SUMMARY_NOTES;
use super::height::estimate_row_height;
use super::linker::{self, RowReferenceMap, SummaryLayout};
use super::notes::{NoteSheetComposer, NoteSheetKind};
use crate::config::EstimateConfig;
use crate::document::{CellStyle, ColNum, RowNum, Sheet, SheetWriter, Workbook};
use crate::error::{EstimateError, EstimateResult};
use crate::formula::FormulaEvaluator;
use crate::numeral::{legal_amount, ordinal};
use crate::types::{EstimationRequest, MiddleCategory};

const TITLE: &str = "秀傳醫療體系工程採購報價單";
const DATE_CAPTION: &str = "製表日期：　　年　　月　　日";
const COLUMN_HEADERS: [&str; 8] = [
    "項次", "工程項目", "數量", "單位", "單價", "複價", "備註", "圖號",
];
const COLUMN_WIDTHS: [f64; 8] = [7.5, 61.25, 7.5, 7.75, 22.0, 23.13, 28.25, 14.63];
const OTHER_FEE_DESCRIPTION: &str = "1.現場清潔及安全防護,文書資料整理\n\
2.勞工安全衛生管理費\n\
3.工程營造綜合保險\n\
4.工程品管及包商利潤費";
const SIGNATURE_ROWS: RowNum = 5;

const LAST_COL: ColNum = 7;
const AMOUNT_COL: ColNum = 5;
const WORDS_COL: ColNum = 1;
const TITLE_HEIGHT_PT: f64 = 30.0;
const INFO_HEIGHT_PT: f64 = 20.0;

/// Where an export currently is. Stages only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExportStage {
    WritingSummarySkeleton,
    WritingDetailBlock,
    BackfillingSummaryFormulas,
    EvaluatingAndConvertingTotal,
    WritingNotes,
    Done,
}

impl ExportStage {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportStage::WritingSummarySkeleton => "writing summary skeleton",
            ExportStage::WritingDetailBlock => "writing detail block",
            ExportStage::BackfillingSummaryFormulas => "backfilling summary formulas",
            ExportStage::EvaluatingAndConvertingTotal => "evaluating total",
            ExportStage::WritingNotes => "writing notes",
            ExportStage::Done => "done",
        }
    }
}

impl std::fmt::Display for ExportStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one export.
#[derive(Debug)]
pub struct ExportOutcome {
    pub workbook: Workbook,
    pub summary: SummaryLayout,
    /// 1-based detail subtotal row of each middle category, in order.
    pub detail_subtotal_rows: Vec<u32>,
    /// `None` when the total could not be evaluated.
    pub amount_in_words: Option<String>,
}

impl ExportOutcome {
    /// 1-based row holding the words-form total.
    pub fn amount_in_words_row(&self) -> u32 {
        self.summary.amount_in_words_row(SUMMARY_NOTES.len() as u32)
    }
}

/// Next unused row of the sheet being written.
#[derive(Debug, Default)]
struct RowCursor {
    next: RowNum,
}

impl RowCursor {
    /// Claim the next row and return it (0-based).
    fn take(&mut self) -> RowNum {
        let row = self.next;
        self.next += 1;
        row
    }

    fn skip(&mut self, rows: RowNum) {
        self.next += rows;
    }
}

/// 1-based spreadsheet row of a 0-based row index.
fn excel_row(row: RowNum) -> u32 {
    row + 1
}

/// 0-based row index of a 1-based spreadsheet row.
fn row_index(excel_row: u32) -> RowNum {
    excel_row - 1
}

/// Lays out one estimation request as a workbook.
///
/// The engine holds configuration only; every export starts from empty
/// per-call state, so one engine may be reused for any number of requests.
#[derive(Debug, Clone, Default)]
pub struct ReportLayoutEngine {
    config: EstimateConfig,
}

impl ReportLayoutEngine {
    pub fn new(config: EstimateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimateConfig {
        &self.config
    }

    /// Build the complete workbook for `request`.
    ///
    /// Invalid requests fail before anything is written. A failed evaluation
    /// only drops the words-form total; any write failure aborts the export.
    pub fn export(
        &self,
        request: &EstimationRequest,
        evaluator: &mut dyn FormulaEvaluator,
    ) -> EstimateResult<ExportOutcome> {
        let category_count = request.validate()?;
        let summary_name = self.config.summary_sheet_name.as_str();

        let mut workbook = Workbook::new();
        let summary_idx = workbook.add_sheet(summary_name)?;
        let mut note_sheets = Vec::with_capacity(NoteSheetKind::ALL.len());
        for kind in NoteSheetKind::ALL {
            note_sheets.push((kind, workbook.add_sheet(kind.sheet_name())?));
        }

        let mut cursor = RowCursor::default();
        let mut references = RowReferenceMap::new();

        let mut stage = ExportStage::WritingSummarySkeleton;
        debug!(%stage, project = %request.project_name, categories = category_count);
        let summary = {
            let sheet = workbook.sheet_at_mut(summary_idx)?;
            let layout = self.write_summary_skeleton(sheet, request, &mut cursor)?;
            // one blank row between the blocks
            cursor.skip(1);
            layout
        };

        stage = ExportStage::WritingDetailBlock;
        debug!(%stage, first_row = excel_row(cursor.next));
        {
            let sheet = workbook.sheet_at_mut(summary_idx)?;
            self.write_detail_block(sheet, request, &mut cursor, &mut references)?;
        }
        if references.len() != category_count {
            return Err(EstimateError::Write(format!(
                "recorded {} detail subtotals for {} categories",
                references.len(),
                category_count
            )));
        }
        let detail_subtotal_rows: Vec<u32> = references.rows().map(|(_, row)| row).collect();

        stage = ExportStage::BackfillingSummaryFormulas;
        debug!(%stage);
        {
            let sheet = workbook.sheet_at_mut(summary_idx)?;
            backfill_summary(sheet, &summary, &mut references)?;
        }

        stage = ExportStage::EvaluatingAndConvertingTotal;
        debug!(%stage, grand_total_row = summary.grand_total_row());
        let words_row = summary.amount_in_words_row(SUMMARY_NOTES.len() as u32);
        let amount_in_words = match total_in_words(&workbook, evaluator, summary_name, &summary) {
            Ok(words) => {
                let sheet = workbook.sheet_at_mut(summary_idx)?;
                sheet.set_text(row_index(words_row), WORDS_COL, &words)?;
                Some(words)
            }
            Err(e) => {
                warn!(error = %e, "grand total unavailable, leaving amount in words blank");
                None
            }
        };

        stage = ExportStage::WritingNotes;
        debug!(%stage);
        let composer = NoteSheetComposer::new(self.config.font_size_pt);
        for (kind, idx) in note_sheets {
            let sheet = workbook.sheet_at_mut(idx)?;
            composer.compose(sheet, kind, &request.project_name)?;
        }

        stage = ExportStage::Done;
        info!(
            %stage,
            project = %request.project_name,
            categories = category_count,
            items = request.line_item_count(),
            grand_total_row = summary.grand_total_row(),
            "estimate laid out"
        );

        Ok(ExportOutcome {
            workbook,
            summary,
            detail_subtotal_rows,
            amount_in_words,
        })
    }

    fn write_summary_skeleton(
        &self,
        sheet: &mut Sheet,
        request: &EstimationRequest,
        cursor: &mut RowCursor,
    ) -> EstimateResult<SummaryLayout> {
        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            sheet.set_column_width(col as ColNum, *width)?;
        }

        let row = cursor.take();
        sheet.write_text(row, 0, TITLE, CellStyle::Title)?;
        sheet.merge(row, 0, row, LAST_COL)?;
        sheet.set_row_height(row, TITLE_HEIGHT_PT)?;

        let row = cursor.take();
        sheet.write_text(
            row,
            0,
            &format!("工程名稱：{}", request.project_name),
            CellStyle::Body,
        )?;
        sheet.merge(row, 0, row, 1)?;
        sheet.write_text(row, 6, DATE_CAPTION, CellStyle::Body)?;
        sheet.merge(row, 6, row, LAST_COL)?;
        sheet.set_row_height(row, INFO_HEIGHT_PT)?;

        write_header_row(sheet, cursor.take())?;

        let category_count = request.middle_category_count() as u32;
        let layout = SummaryLayout::new(excel_row(cursor.next), category_count);

        for (index, middle) in request.middle_categories() {
            let row = cursor.take();
            sheet.write_text(row, 0, &ordinal(index as i64 + 1), CellStyle::Center)?;
            sheet.write_text(row, 1, &middle.name, CellStyle::Body)?;
            sheet.write_number(row, 2, 1.0, CellStyle::Center)?;
            sheet.write_text(row, 3, "式", CellStyle::Center)?;
            sheet.write_text(row, 4, "-", CellStyle::Number)?;
            sheet.write_text(row, AMOUNT_COL, "-", CellStyle::Number)?;
            sheet.apply_style(row, 6, CellStyle::Body)?;
            sheet.apply_style(row, 7, CellStyle::Body)?;
        }

        let k = i64::from(category_count);
        write_aggregate_row(
            sheet,
            cursor.take(),
            &format!("小計（一～{}項）", ordinal(k)),
            Some("-"),
        )?;

        let row = cursor.take();
        sheet.write_text(row, 0, &ordinal(k + 1), CellStyle::Center)?;
        sheet.write_text(row, 1, OTHER_FEE_DESCRIPTION, CellStyle::Body)?;
        sheet.write_number(row, 2, self.config.other_fee_percent, CellStyle::Center)?;
        sheet.write_text(row, 3, "%", CellStyle::Center)?;
        sheet.write_text(row, 4, "-", CellStyle::Body)?;
        sheet.write_text(row, AMOUNT_COL, "-", CellStyle::Number)?;
        sheet.apply_style(row, 6, CellStyle::Body)?;
        sheet.apply_style(row, 7, CellStyle::Body)?;
        sheet.set_row_height(
            row,
            estimate_row_height(
                OTHER_FEE_DESCRIPTION,
                COLUMN_WIDTHS[1],
                self.config.font_size_pt,
            ),
        )?;

        write_aggregate_row(
            sheet,
            cursor.take(),
            &format!("合計（一～{}項）", ordinal(k + 1)),
            Some("-"),
        )?;

        let row = cursor.take();
        sheet.apply_style(row, 0, CellStyle::Body)?;
        sheet.write_text(row, 1, "營業稅", CellStyle::Body)?;
        sheet.write_number(row, 2, self.config.tax_percent, CellStyle::Center)?;
        sheet.write_text(row, 3, "%", CellStyle::Center)?;
        sheet.write_text(row, 4, "-", CellStyle::Body)?;
        sheet.write_text(row, AMOUNT_COL, "-", CellStyle::Number)?;
        sheet.apply_style(row, 6, CellStyle::Body)?;
        sheet.apply_style(row, 7, CellStyle::Body)?;

        let row = cursor.take();
        write_aggregate_row(sheet, row, "總價", None)?;
        debug_assert_eq!(excel_row(row), layout.grand_total_row());

        let notes_width: f64 = COLUMN_WIDTHS[1..].iter().sum();
        for (i, note) in SUMMARY_NOTES.iter().enumerate() {
            let row = cursor.take();
            let caption = if i == 0 {
                "附註1.".to_string()
            } else {
                format!("{}.", i + 1)
            };
            sheet.write_text(row, 0, &caption, CellStyle::Body)?;
            sheet.write_text(row, 1, note, CellStyle::Body)?;
            sheet.merge(row, 1, row, LAST_COL)?;
            sheet.set_row_height(
                row,
                estimate_row_height(note, notes_width, self.config.font_size_pt),
            )?;
        }

        let row = cursor.take();
        debug_assert_eq!(
            excel_row(row),
            layout.amount_in_words_row(SUMMARY_NOTES.len() as u32)
        );
        sheet.write_text(row, 0, "總價", CellStyle::Body)?;
        sheet.apply_style(row, WORDS_COL, CellStyle::Body)?;
        sheet.write_text(row, 2, "新台幣", CellStyle::Body)?;
        sheet.write_text(row, 3, "NT$:", CellStyle::Body)?;
        sheet.write_formula(row, 4, &layout.amount_as_text_formula(), CellStyle::Number)?;
        sheet.merge(row, 4, row, LAST_COL)?;

        let row = cursor.take();
        sheet.write_text(row, 0, "廠商", CellStyle::Body)?;
        sheet.merge(row, 0, row, 2)?;
        sheet.write_text(row, 3, "用印", CellStyle::Body)?;
        sheet.merge(row, 3, row, LAST_COL)?;

        let first = cursor.next;
        for _ in 0..SIGNATURE_ROWS {
            let row = cursor.take();
            for col in 0..=LAST_COL {
                sheet.apply_style(row, col, CellStyle::Body)?;
            }
        }
        let last = first + SIGNATURE_ROWS - 1;
        sheet.merge(first, 0, last, 2)?;
        sheet.merge(first, 3, last, LAST_COL)?;

        Ok(layout)
    }

    fn write_detail_block(
        &self,
        sheet: &mut Sheet,
        request: &EstimationRequest,
        cursor: &mut RowCursor,
        references: &mut RowReferenceMap,
    ) -> EstimateResult<()> {
        write_header_row(sheet, cursor.take())?;

        for (index, middle) in request.middle_categories() {
            let subtotal_row = write_detail_category(sheet, index, middle, cursor)?;
            references.insert(index, subtotal_row)?;
        }
        Ok(())
    }
}

fn write_header_row(sheet: &mut Sheet, row: RowNum) -> EstimateResult<()> {
    for (col, header) in COLUMN_HEADERS.iter().enumerate() {
        sheet.write_text(row, col as ColNum, header, CellStyle::Header)?;
    }
    Ok(())
}

/// Highlighted caption row. The amount is backfilled later.
fn write_aggregate_row(
    sheet: &mut Sheet,
    row: RowNum,
    caption: &str,
    placeholder: Option<&str>,
) -> EstimateResult<()> {
    sheet.apply_style(row, 0, CellStyle::Body)?;
    sheet.write_text(row, 1, caption, CellStyle::Highlight)?;
    for col in 2..AMOUNT_COL {
        sheet.apply_style(row, col, CellStyle::Highlight)?;
    }
    match placeholder {
        Some(text) => sheet.write_text(row, AMOUNT_COL, text, CellStyle::HighlightNumber)?,
        None => sheet.apply_style(row, AMOUNT_COL, CellStyle::HighlightNumber)?,
    }
    sheet.apply_style(row, 6, CellStyle::Highlight)?;
    sheet.apply_style(row, 7, CellStyle::Body)?;
    Ok(())
}

/// Section header, item rows, subtotal and spacer for one category.
/// Returns the 1-based subtotal row.
fn write_detail_category(
    sheet: &mut Sheet,
    index: usize,
    middle: &MiddleCategory,
    cursor: &mut RowCursor,
) -> EstimateResult<u32> {
    let row = cursor.take();
    sheet.write_text(row, 0, &ordinal(index as i64 + 1), CellStyle::SectionCenter)?;
    sheet.write_text(row, 1, &middle.name, CellStyle::Section)?;
    for col in 2..=LAST_COL {
        sheet.apply_style(row, col, CellStyle::Body)?;
    }

    let start = excel_row(cursor.next);
    for (n, item) in middle.items.iter().enumerate() {
        let row = cursor.take();
        let quantity = item.quantity().to_f64().unwrap_or(0.0);
        sheet.write_number(row, 0, (n + 1) as f64, CellStyle::Center)?;
        sheet.write_text(row, 1, &item.name, CellStyle::Body)?;
        sheet.write_number(row, 2, quantity, CellStyle::Center)?;
        sheet.write_text(row, 3, &item.unit, CellStyle::Center)?;
        // unit price is left for the vendor to fill in
        sheet.apply_style(row, 4, CellStyle::Number)?;
        sheet.write_formula(
            row,
            AMOUNT_COL,
            &linker::line_amount(excel_row(row)),
            CellStyle::Number,
        )?;
        sheet.write_text(row, 6, &item.note, CellStyle::Body)?;
        sheet.apply_style(row, 7, CellStyle::Body)?;
    }
    let end = excel_row(cursor.next - 1);

    let row = cursor.take();
    for col in 0..=LAST_COL {
        sheet.apply_style(row, col, CellStyle::Highlight)?;
    }
    sheet.set_text(row, 1, "小計")?;
    sheet.write_formula(
        row,
        AMOUNT_COL,
        &linker::detail_subtotal(start, end),
        CellStyle::HighlightNumber,
    )?;

    let spacer = cursor.take();
    for col in 0..=LAST_COL {
        sheet.apply_style(spacer, col, CellStyle::Body)?;
    }

    Ok(excel_row(row))
}

/// Link each summary row to its detail subtotal, then write the aggregate chain.
fn backfill_summary(
    sheet: &mut Sheet,
    layout: &SummaryLayout,
    references: &mut RowReferenceMap,
) -> EstimateResult<()> {
    for index in 0..layout.category_count {
        let detail_row = references.take(index as usize)?;
        sheet.write_formula(
            row_index(layout.category_row(index)),
            AMOUNT_COL,
            &linker::summary_reference(detail_row),
            CellStyle::Number,
        )?;
    }
    references.ensure_consumed()?;

    let chain = [
        (layout.subtotal_row(), layout.subtotal_formula(), CellStyle::HighlightNumber),
        (layout.other_fee_row(), layout.other_fee_formula(), CellStyle::Number),
        (
            layout.running_total_row(),
            layout.running_total_formula(),
            CellStyle::HighlightNumber,
        ),
        (layout.tax_row(), layout.tax_formula(), CellStyle::Number),
        (
            layout.grand_total_row(),
            layout.grand_total_formula(),
            CellStyle::HighlightNumber,
        ),
    ];
    for (row, formula, style) in chain {
        sheet.write_formula(row_index(row), AMOUNT_COL, &formula, style)?;
    }
    Ok(())
}

fn total_in_words(
    workbook: &Workbook,
    evaluator: &mut dyn FormulaEvaluator,
    sheet_name: &str,
    layout: &SummaryLayout,
) -> EstimateResult<String> {
    evaluator.evaluate_all(workbook)?;
    let total = evaluator.numeric_value(
        sheet_name,
        row_index(layout.grand_total_row()),
        AMOUNT_COL,
    )?;
    let amount = Decimal::from_f64(total).ok_or_else(|| {
        EstimateError::Eval(format!("grand total {} is not a representable amount", total))
    })?;
    // cents first, so evaluator float noise below a whole amount does not lose a yuan
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Ok(legal_amount(amount))
}

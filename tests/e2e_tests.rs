//! End-to-end export tests: request in, workbook (and .xlsx bytes) out.

use std::io::Cursor;
use std::path::PathBuf;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use estimate_forge::document::{CellStyle, Sheet};
use estimate_forge::excel::XlsxEncoder;
use estimate_forge::formula::WorkbookEvaluator;
use estimate_forge::layout::{ExportOutcome, ReportLayoutEngine, SummaryLayout};
use estimate_forge::types::{EstimationRequest, FlatExportRequest, LineItem, MajorCategory, MiddleCategory};
use pretty_assertions::assert_eq;

const SUMMARY: &str = "估價單";

fn test_data_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("test-data");
    path.push(filename);
    path
}

fn load_request(filename: &str) -> EstimationRequest {
    let json = std::fs::read_to_string(test_data_path(filename)).unwrap();
    serde_json::from_str(&json).unwrap()
}

fn export(request: &EstimationRequest) -> ExportOutcome {
    ReportLayoutEngine::default()
        .export(request, &mut WorkbookEvaluator::new())
        .unwrap()
}

fn summary_sheet(outcome: &ExportOutcome) -> &Sheet {
    outcome.workbook.sheet(SUMMARY).unwrap()
}

fn rows_with_text(sheet: &Sheet, col: u16, text: &str) -> Vec<u32> {
    (0..sheet.rows_used())
        .filter(|row| sheet.text_at(*row, col) == Some(text))
        .collect()
}

// ========== Scenario: "Test" with Concrete (2 items) and Steel (1 item) ==========

#[test]
fn e2e_two_categories_summary_and_detail() {
    let outcome = export(&load_request("request.json"));
    let sheet = summary_sheet(&outcome);

    // Summary: 2 category rows, then 5 aggregate rows
    assert_eq!(outcome.summary, SummaryLayout::new(4, 2));
    assert_eq!(sheet.text_at(3, 1), Some("Concrete"));
    assert_eq!(sheet.text_at(4, 1), Some("Steel"));
    assert_eq!(sheet.text_at(5, 1), Some("小計（一～二項）"));
    assert_eq!(sheet.text_at(7, 1), Some("合計（一～三項）"));
    assert_eq!(sheet.text_at(8, 1), Some("營業稅"));
    assert_eq!(sheet.text_at(9, 1), Some("總價"));

    // Detail: 2 section headers, 3 items, 2 subtotals, 2 spacers after the header row
    let header_rows = rows_with_text(sheet, 0, "項次");
    assert_eq!(header_rows, vec![2, 39]);
    let detail_start = header_rows[1] + 1;

    let sections: Vec<u32> = (detail_start..sheet.rows_used())
        .filter(|row| sheet.style_at(*row, 1) == Some(CellStyle::Section))
        .collect();
    assert_eq!(sections, vec![40, 45]);

    let items: Vec<u32> = (detail_start..sheet.rows_used())
        .filter(|row| {
            sheet
                .formula_at(*row, 5)
                .is_some_and(|f| f.starts_with('C'))
        })
        .collect();
    assert_eq!(items, vec![41, 42, 46]);

    assert_eq!(rows_with_text(sheet, 1, "小計"), vec![43, 47]);
    assert_eq!(sheet.rows_used(), 49);

    // Summary amounts are links, not literals
    assert_eq!(outcome.detail_subtotal_rows, vec![44, 48]);
    assert_eq!(sheet.formula_at(3, 5), Some("F44"));
    assert_eq!(sheet.formula_at(4, 5), Some("F48"));
    assert_eq!(sheet.number_at(3, 5), None);
    assert_eq!(sheet.formula_at(43, 5), Some("SUM(F42:F43)"));
    assert_eq!(sheet.formula_at(47, 5), Some("SUM(F47:F47)"));
}

#[test]
fn e2e_workbook_has_three_sheets() {
    let outcome = export(&load_request("request.json"));
    let names: Vec<&str> = outcome.workbook.sheets().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec![SUMMARY, "結構體及外牆裝修 備註", "裝修 備註"]);

    for name in &names[1..] {
        let notes = outcome.workbook.sheet(name).unwrap();
        assert_eq!(notes.text_at(2, 0), Some("工　程　估　價　單"));
        assert!(notes.text_at(3, 0).unwrap().contains("Test"));
    }
}

#[test]
fn e2e_export_is_idempotent() {
    let request = load_request("request.json");
    let first = export(&request);
    let second = export(&request);

    assert_eq!(first.workbook, second.workbook);
    assert_eq!(first.detail_subtotal_rows, second.detail_subtotal_rows);
    assert_eq!(first.amount_in_words, second.amount_in_words);
}

#[test]
fn e2e_flat_request_matches_hierarchical() {
    let json = std::fs::read_to_string(test_data_path("flat.json")).unwrap();
    let flat: FlatExportRequest = serde_json::from_str(&json).unwrap();
    let grouped = flat.into_hierarchy().unwrap();

    let from_flat = export(&grouped);
    let from_tree = export(&load_request("request.json"));

    assert_eq!(from_flat.summary, from_tree.summary);
    assert_eq!(
        from_flat.detail_subtotal_rows,
        from_tree.detail_subtotal_rows
    );
}

// ========== Boundaries ==========

#[test]
fn e2e_single_category_single_item() {
    let request = EstimationRequest::new(
        "Tiny",
        vec![MajorCategory::new(
            "Only",
            vec![MiddleCategory::new(
                "Paint",
                vec![LineItem::new("Wall paint", "m2", "12")],
            )],
        )],
    );
    let outcome = export(&request);
    let sheet = summary_sheet(&outcome);

    assert_eq!(sheet.formula_at(4, 5), Some("SUM(F4:F4)"));
    assert_eq!(sheet.text_at(4, 1), Some("小計（一～一項）"));
    assert_eq!(sheet.text_at(5, 0), Some("二"));
    assert_eq!(outcome.summary.grand_total_row(), 9);
    assert_eq!(outcome.amount_in_words_row(), 31);

    assert_eq!(outcome.detail_subtotal_rows, vec![42]);
    assert_eq!(sheet.formula_at(3, 5), Some("F42"));
    assert_eq!(sheet.formula_at(40, 5), Some("C41*E41"));
    assert_eq!(sheet.formula_at(41, 5), Some("SUM(F41:F41)"));
}

#[test]
fn e2e_unparsable_quantity_becomes_zero() {
    let request = EstimationRequest::new(
        "Test",
        vec![MajorCategory::new(
            "A",
            vec![MiddleCategory::new(
                "B",
                vec![LineItem::new("Mystery", "式", "about ten")],
            )],
        )],
    );
    let outcome = export(&request);
    let sheet = summary_sheet(&outcome);

    assert_eq!(sheet.text_at(40, 1), Some("Mystery"));
    assert_eq!(sheet.number_at(40, 2), Some(0.0));
    assert_eq!(outcome.amount_in_words.as_deref(), Some("零元整"));
}

// ========== Encoded file ==========

#[test]
fn e2e_xlsx_reads_back() {
    let outcome = export(&load_request("request.json"));
    let bytes = XlsxEncoder::default().encode(&outcome.workbook).unwrap();

    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec![
            SUMMARY.to_string(),
            "結構體及外牆裝修 備註".to_string(),
            "裝修 備註".to_string()
        ]
    );

    let values = workbook.worksheet_range(SUMMARY).unwrap();
    assert_eq!(
        values.get_value((1, 0)),
        Some(&Data::String("工程名稱：Test".to_string()))
    );
    assert_eq!(
        values.get_value((3, 1)),
        Some(&Data::String("Concrete".to_string()))
    );
    assert_eq!(values.get_value((6, 2)), Some(&Data::Float(6.65)));
    assert_eq!(
        values.get_value((31, 1)),
        Some(&Data::String("零元整".to_string()))
    );

    let formulas = workbook.worksheet_formula(SUMMARY).unwrap();
    assert_eq!(formulas.get_value((3, 5)), Some(&"F44".to_string()));
    assert_eq!(formulas.get_value((4, 5)), Some(&"F48".to_string()));
    assert_eq!(formulas.get_value((9, 5)), Some(&"F8+F9".to_string()));
    assert_eq!(
        formulas.get_value((31, 4)),
        Some(&"TEXT(F10,\"#,##0\")".to_string())
    );
}

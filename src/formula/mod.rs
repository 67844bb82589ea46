//! A1 formula support for the generated workbook
//!
//! Arithmetic goes through `xlformula_engine`; cells are evaluated in
//! dependency order so each one sees the results it refers to.

pub mod evaluator;

pub use evaluator::{column_letter, format_number, FormulaEvaluator, Value, WorkbookEvaluator};

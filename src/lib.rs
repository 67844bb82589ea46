//! Estimate Forge - cost-estimate workbook generator
//!
//! Turns a categorized list of priced line items into a three-sheet
//! estimate workbook: a summary block whose category amounts are live
//! formula links into a per-category detail block, followed by the
//! surcharge, tax and grand-total chain, plus two boilerplate note sheets.
//!
//! # Features
//!
//! - Summary/detail cross-references as Excel formulas (`=F57`, `=SUM(F40:F55)`)
//! - Grand total spelled out in formal Chinese currency numerals
//! - Row heights estimated for wrapped text
//! - `.xlsx` output through `rust_xlsxwriter`
//!
//! # Example
//!
//! ```no_run
//! use estimate_forge::excel::XlsxEncoder;
//! use estimate_forge::formula::WorkbookEvaluator;
//! use estimate_forge::layout::ReportLayoutEngine;
//! use estimate_forge::types::EstimationRequest;
//! use std::path::Path;
//!
//! let json = std::fs::read_to_string("request.json")?;
//! let request: EstimationRequest = serde_json::from_str(&json)?;
//!
//! let engine = ReportLayoutEngine::default();
//! let outcome = engine.export(&request, &mut WorkbookEvaluator::new())?;
//! println!("Total: {:?}", outcome.amount_in_words);
//!
//! XlsxEncoder::default().save(&outcome.workbook, Path::new("estimate.xlsx"))?;
//! # Ok::<(), estimate_forge::error::EstimateError>(())
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod excel;
pub mod formula;
pub mod layout;
pub mod numeral;
pub mod types;

// Re-export commonly used types
pub use config::EstimateConfig;
pub use error::{EstimateError, EstimateResult};
pub use layout::{ExportOutcome, ReportLayoutEngine};
pub use types::{EstimationRequest, FlatExportRequest, LineItem, MajorCategory, MiddleCategory};

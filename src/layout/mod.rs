//! Estimate workbook layout
//!
//! - `engine`: staged export of a request into a workbook
//! - `linker`: row arithmetic and formula text
//! - `height`: wrapped-text row heights
//! - `notes`: the auxiliary note sheets

pub mod clauses;
pub mod engine;
pub mod height;
pub mod linker;
pub mod notes;

pub use engine::{ExportOutcome, ExportStage, ReportLayoutEngine};
pub use height::estimate_row_height;
pub use linker::{RowReferenceMap, SummaryLayout};
pub use notes::{NoteSheetComposer, NoteSheetKind};

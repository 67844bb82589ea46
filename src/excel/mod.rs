//! Excel output
//!
//! Turns the in-memory workbook into an `.xlsx` file or byte buffer.

mod encoder;

pub use encoder::XlsxEncoder;

//! Export configuration
//!
//! The surcharge and tax percentages used to be literal constants. They are
//! configuration now, defaulting to the values every estimate has used so far.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, EstimateResult};
use crate::layout::NoteSheetKind;

pub const DEFAULT_OTHER_FEE_PERCENT: f64 = 6.65;
pub const DEFAULT_TAX_PERCENT: f64 = 5.0;
pub const DEFAULT_FONT_SIZE_PT: f64 = 12.0;
pub const DEFAULT_SUMMARY_SHEET_NAME: &str = "估價單";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Site cleaning, safety, insurance and contractor margin, in percent.
    pub other_fee_percent: f64,
    /// Business tax, in percent.
    pub tax_percent: f64,
    /// Body font size used for row-height estimation.
    pub font_size_pt: f64,
    pub summary_sheet_name: String,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            other_fee_percent: DEFAULT_OTHER_FEE_PERCENT,
            tax_percent: DEFAULT_TAX_PERCENT,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            summary_sheet_name: DEFAULT_SUMMARY_SHEET_NAME.to_string(),
        }
    }
}

impl EstimateConfig {
    /// Load from a YAML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> EstimateResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> EstimateResult<Self> {
        let config: EstimateConfig = if content.trim().is_empty() {
            EstimateConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EstimateResult<()> {
        if !self.other_fee_percent.is_finite() || self.other_fee_percent < 0.0 {
            return Err(EstimateError::Config(format!(
                "other_fee_percent must be a non-negative number, got {}",
                self.other_fee_percent
            )));
        }
        if !self.tax_percent.is_finite() || self.tax_percent < 0.0 {
            return Err(EstimateError::Config(format!(
                "tax_percent must be a non-negative number, got {}",
                self.tax_percent
            )));
        }
        if !self.font_size_pt.is_finite() || self.font_size_pt <= 0.0 {
            return Err(EstimateError::Config(format!(
                "font_size_pt must be positive, got {}",
                self.font_size_pt
            )));
        }
        let name_len = self.summary_sheet_name.chars().count();
        if name_len == 0 || name_len > 31 {
            return Err(EstimateError::Config(format!(
                "summary_sheet_name must be 1-31 characters, got '{}'",
                self.summary_sheet_name
            )));
        }
        // workbook sheet names are unique, case-insensitively
        let summary = self.summary_sheet_name.to_lowercase();
        if let Some(kind) = NoteSheetKind::ALL
            .into_iter()
            .find(|kind| kind.sheet_name().to_lowercase() == summary)
        {
            return Err(EstimateError::Config(format!(
                "summary_sheet_name '{}' collides with the note sheet '{}'",
                self.summary_sheet_name,
                kind.sheet_name()
            )));
        }
        Ok(())
    }
}

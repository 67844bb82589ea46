use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::error::{EstimateError, EstimateResult};

//==============================================================================
// Hierarchical request (major → middle → line item)
//==============================================================================

/// A single priced line of the estimate.
///
/// Numeric fields are kept exactly as received. The typed accessors parse them
/// on demand and fall back to zero when the text is not a number, so a bad
/// quantity never aborts an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default, alias = "vendor")]
    pub vender: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub spec: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default = "zero_text", deserialize_with = "text_or_number")]
    pub quantity: String,
    #[serde(default = "zero_text", deserialize_with = "text_or_number")]
    pub unit_price: String,
    #[serde(default = "zero_text", deserialize_with = "text_or_number")]
    pub contract_unit_price: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub note: String,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            id: 0,
            code: String::new(),
            vender: String::new(),
            name: name.into(),
            spec: String::new(),
            unit: unit.into(),
            quantity: quantity.into(),
            unit_price: zero_text(),
            contract_unit_price: zero_text(),
            note: String::new(),
        }
    }

    pub fn with_unit_price(mut self, price: impl Into<String>) -> Self {
        self.unit_price = price.into();
        self
    }

    pub fn with_contract_unit_price(mut self, price: impl Into<String>) -> Self {
        self.contract_unit_price = price.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn quantity(&self) -> Decimal {
        parse_decimal_or_zero(&self.quantity)
    }

    pub fn unit_price(&self) -> Decimal {
        parse_decimal_or_zero(&self.unit_price)
    }

    pub fn contract_unit_price(&self) -> Decimal {
        parse_decimal_or_zero(&self.contract_unit_price)
    }

    /// quantity × unit price
    pub fn total(&self) -> Decimal {
        self.quantity() * self.unit_price()
    }

    /// quantity × contract unit price
    pub fn contract_total(&self) -> Decimal {
        self.quantity() * self.contract_unit_price()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiddleCategory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl MiddleCategory {
    pub fn new(name: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Top-level grouping. Its own name is carried but never rendered as a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorCategory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub middle_items: Vec<MiddleCategory>,
}

impl MajorCategory {
    pub fn new(name: impl Into<String>, middle_items: Vec<MiddleCategory>) -> Self {
        Self {
            name: name.into(),
            middle_items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationRequest {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub major_items: Vec<MajorCategory>,
}

impl EstimationRequest {
    pub fn new(project_name: impl Into<String>, major_items: Vec<MajorCategory>) -> Self {
        Self {
            project_name: project_name.into(),
            major_items,
        }
    }

    /// Check the structural invariants and return the middle-category count.
    pub fn validate(&self) -> EstimateResult<usize> {
        if self.project_name.trim().is_empty() {
            return Err(EstimateError::InvalidRequest(
                "project name is empty".to_string(),
            ));
        }
        if self.major_items.is_empty() {
            return Err(EstimateError::InvalidRequest(
                "request has no major categories".to_string(),
            ));
        }

        let mut count = 0;
        for major in &self.major_items {
            if major.middle_items.is_empty() {
                return Err(EstimateError::InvalidRequest(format!(
                    "major category '{}' has no middle categories",
                    major.name
                )));
            }
            for middle in &major.middle_items {
                if middle.items.is_empty() {
                    return Err(EstimateError::InvalidRequest(format!(
                        "middle category '{}' has no line items",
                        middle.name
                    )));
                }
                count += 1;
            }
        }

        Ok(count)
    }

    /// Middle categories in traversal order, paired with their sequence index.
    pub fn middle_categories(&self) -> impl Iterator<Item = (usize, &MiddleCategory)> + '_ {
        self.major_items
            .iter()
            .flat_map(|major| major.middle_items.iter())
            .enumerate()
    }

    pub fn middle_category_count(&self) -> usize {
        self.major_items.iter().map(|m| m.middle_items.len()).sum()
    }

    pub fn line_item_count(&self) -> usize {
        self.middle_categories().map(|(_, m)| m.items.len()).sum()
    }
}

//==============================================================================
// Flat request (one row per item, category names inline)
//==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatLineItem {
    #[serde(flatten)]
    pub item: LineItem,
    #[serde(default)]
    pub major_category: Option<String>,
    #[serde(default)]
    pub middle_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatExportRequest {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub items: Vec<FlatLineItem>,
}

impl FlatExportRequest {
    /// Group flat rows by major then middle category name.
    ///
    /// Groups appear in the order their first row appears; rows keep their
    /// relative order inside a group. A missing name groups under "".
    pub fn into_hierarchy(self) -> EstimateResult<EstimationRequest> {
        if self.project_name.trim().is_empty() {
            return Err(EstimateError::InvalidRequest(
                "project name is empty".to_string(),
            ));
        }
        if self.items.is_empty() {
            return Err(EstimateError::InvalidRequest(
                "request has no line items".to_string(),
            ));
        }

        let mut majors: Vec<MajorCategory> = Vec::new();
        for flat in self.items {
            let major_name = flat.major_category.unwrap_or_default();
            let middle_name = flat.middle_category.unwrap_or_default();

            let major_pos = match majors.iter().position(|m| m.name == major_name) {
                Some(pos) => pos,
                None => {
                    majors.push(MajorCategory::new(major_name, Vec::new()));
                    majors.len() - 1
                }
            };
            let middles = &mut majors[major_pos].middle_items;
            let middle_pos = match middles.iter().position(|m| m.name == middle_name) {
                Some(pos) => pos,
                None => {
                    middles.push(MiddleCategory::new(middle_name, Vec::new()));
                    middles.len() - 1
                }
            };
            middles[middle_pos].items.push(flat.item);
        }

        Ok(EstimationRequest::new(self.project_name, majors))
    }
}

//==============================================================================
// Helpers
//==============================================================================

fn zero_text() -> String {
    "0".to_string()
}

/// Parse a decimal, tolerating surrounding whitespace and thousands separators.
/// Anything unparsable is zero, exponent notation included.
pub fn parse_decimal_or_zero(text: &str) -> Decimal {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Accept `"12.5"`, `12.5` or `null` for fields the wire format declares as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}

//! Workbook formula evaluator
//!
//! Orders the formula cells of each sheet by their references (petgraph) and
//! computes each one with `xlformula_engine`, resolving A1 names against the
//! cells evaluated so far. The engine knows neither ranges nor `TEXT`, so
//! `F4:F9` is expanded into an argument list and `TEXT(value, "pattern")` is
//! formatted here after the engine computes `value`.

use std::collections::HashMap;
use std::sync::LazyLock;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use regex::Regex;
use tracing::debug;
use xlformula_engine::{calculate, parse_formula, types, NoCustomFunction};

use crate::document::{CellValue, ColNum, RowNum, Sheet, Workbook, MAX_COLS};
use crate::error::{EstimateError, EstimateResult};

/// The engine computes in single precision; integers beyond this lose digits.
pub const EXACT_INTEGER_LIMIT: f64 = 16_777_216.0;

static CELL_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?([A-Za-z]{1,3})\$?([0-9]+)$").expect("valid regex"));

static RANGE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?([A-Za-z]{1,3})\$?([0-9]+):\$?([A-Za-z]{1,3})\$?([0-9]+)")
        .expect("valid regex")
});

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_$][A-Za-z0-9_$.]*").expect("valid regex"));

static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*""#).expect("valid regex"));

static TEXT_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^\s*TEXT\((.+),\s*"([^"]*)"\)\s*$"#).expect("valid regex")
});

/// The formula-evaluation collaborator.
pub trait FormulaEvaluator {
    /// Evaluate every formula in the workbook.
    fn evaluate_all(&mut self, workbook: &Workbook) -> EstimateResult<()>;

    /// Numeric result of a cell after [`FormulaEvaluator::evaluate_all`].
    fn numeric_value(&self, sheet: &str, row: RowNum, col: ColNum) -> EstimateResult<f64>;
}

/// Value type produced by evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Blank,
}

impl Value {
    /// Arithmetic coercion. Blank, "" and the "-" placeholder count as zero;
    /// numeric text counts as its number; other text is a #VALUE! error.
    pub fn as_number(&self) -> Result<f64, EstimateError> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Blank => Ok(0.0),
            Value::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() || trimmed == "-" {
                    return Ok(0.0);
                }
                trimmed.parse::<f64>().map_err(|_| {
                    EstimateError::Eval(format!("#VALUE! text '{}' used as a number", s))
                })
            }
        }
    }
}

type CellKey = (RowNum, ColNum);

/// In-process evaluator over the in-memory workbook.
#[derive(Debug, Default)]
pub struct WorkbookEvaluator {
    sheets: HashMap<String, HashMap<CellKey, Value>>,
}

impl WorkbookEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluated value of any cell (formula result or literal).
    pub fn value(&self, sheet: &str, row: RowNum, col: ColNum) -> Option<&Value> {
        self.sheets.get(sheet).and_then(|cells| cells.get(&(row, col)))
    }

    fn evaluate_sheet(&mut self, sheet: &Sheet) -> EstimateResult<()> {
        let mut values: HashMap<CellKey, Value> = HashMap::new();
        let mut formulas: Vec<(CellKey, CellFormula)> = Vec::new();

        for (&key, cell) in sheet.cells() {
            match &cell.value {
                Some(CellValue::Formula(text)) => {
                    let formula = CellFormula::parse(text).map_err(|e| {
                        EstimateError::Parse(format!(
                            "{}!{}: '{}': {}",
                            sheet.name(),
                            a1(key),
                            text,
                            e
                        ))
                    })?;
                    formulas.push((key, formula));
                }
                Some(CellValue::Number(n)) => {
                    values.insert(key, Value::Number(*n));
                }
                Some(CellValue::Text(s)) => {
                    values.insert(key, Value::Text(s.clone()));
                }
                None => {}
            }
        }

        let order = dependency_order(&formulas).map_err(|cycle_at| {
            EstimateError::Eval(format!(
                "circular reference in sheet '{}' at {}",
                sheet.name(),
                a1(cycle_at)
            ))
        })?;

        for idx in order {
            let (key, formula) = &formulas[idx];
            let value = formula.evaluate(&values).map_err(|e| {
                EstimateError::Eval(format!("{}!{}: {}", sheet.name(), a1(*key), e))
            })?;
            values.insert(*key, value);
        }

        debug!(
            sheet = sheet.name(),
            formulas = formulas.len(),
            "evaluated sheet formulas"
        );

        self.sheets.insert(sheet.name().to_string(), values);
        Ok(())
    }
}

impl FormulaEvaluator for WorkbookEvaluator {
    fn evaluate_all(&mut self, workbook: &Workbook) -> EstimateResult<()> {
        self.sheets.clear();
        for sheet in workbook.sheets() {
            self.evaluate_sheet(sheet)?;
        }
        Ok(())
    }

    fn numeric_value(&self, sheet: &str, row: RowNum, col: ColNum) -> EstimateResult<f64> {
        if !self.sheets.contains_key(sheet) {
            return Err(EstimateError::Eval(format!(
                "sheet '{}' has not been evaluated",
                sheet
            )));
        }
        match self.value(sheet, row, col) {
            Some(value) => value.as_number(),
            None => Err(EstimateError::Eval(format!(
                "cell {}!{} is missing",
                sheet,
                a1((row, col))
            ))),
        }
    }
}

/// One formula cell: the arithmetic the engine computes, plus the `TEXT`
/// pattern applied to its result when the cell is wrapped in `TEXT`.
#[derive(Debug, Clone, PartialEq)]
struct CellFormula {
    expression: String,
    text_pattern: Option<String>,
    references: Vec<CellKey>,
}

impl CellFormula {
    fn parse(body: &str) -> Result<Self, String> {
        let body = body.trim().trim_start_matches('=');
        let (expression, text_pattern) = match TEXT_CALL.captures(body) {
            Some(caps) => (caps[1].to_string(), Some(caps[2].to_string())),
            None => (body.to_string(), None),
        };
        if expression.trim().is_empty() {
            return Err("empty expression".to_string());
        }
        let references = scan_references(&expression)?;
        Ok(Self {
            expression,
            text_pattern,
            references,
        })
    }

    fn evaluate(&self, values: &HashMap<CellKey, Value>) -> Result<Value, String> {
        let expanded = expand_ranges(&self.expression, values)?;
        let result = calculate_expression(&expanded, values)?;
        match &self.text_pattern {
            Some(pattern) => {
                let number = result.as_number().map_err(|e| e.to_string())?;
                Ok(Value::Text(format_number(number, pattern)))
            }
            None => Ok(result),
        }
    }
}

/// Run one expression through the engine.
fn calculate_expression(
    expression: &str,
    values: &HashMap<CellKey, Value>,
) -> Result<Value, String> {
    let formula = format!("={}", expression.trim().replace('$', ""));
    let resolver = |name: String| -> types::Value { resolve(&name, values) };

    let parsed = parse_formula::parse_string_to_formula(&formula, None::<NoCustomFunction>);
    match calculate::calculate_formula(parsed, Some(&resolver)) {
        types::Value::Number(n) => {
            let n = f64::from(n);
            if !n.is_finite() || n.abs() > EXACT_INTEGER_LIMIT {
                return Err(format!(
                    "result {} is outside the exactly representable range",
                    n
                ));
            }
            Ok(Value::Number(n))
        }
        types::Value::Text(s) => Ok(Value::Text(s)),
        types::Value::Error(e) => Err(format!("'{}' returned error: {:?}", expression, e)),
        other => Err(format!(
            "'{}' returned unexpected type: {:?}",
            expression, other
        )),
    }
}

/// Resolver handed to the engine: A1 name → evaluated cell.
fn resolve(name: &str, values: &HashMap<CellKey, Value>) -> types::Value {
    let Some(key) = CELL_REF
        .captures(name)
        .and_then(|caps| cell_key(&caps[1], &caps[2]).ok())
    else {
        return types::Value::Error(types::Error::Value);
    };
    match values.get(&key).map(Value::as_number) {
        None => types::Value::Number(0.0),
        Some(Ok(n)) => types::Value::Number(n as f32),
        Some(Err(_)) => types::Value::Error(types::Error::Value),
    }
}

/// Cells read by `expression`: every cell of each range and every A1 name.
/// Names that are neither functions nor cells are rejected.
fn scan_references(expression: &str) -> Result<Vec<CellKey>, String> {
    let stripped = STRING_LITERAL.replace_all(expression, "\"\"");
    let mut references = Vec::new();
    let mut rest = String::with_capacity(stripped.len());
    let mut last = 0;

    for caps in RANGE_REF.captures_iter(&stripped) {
        let Some(whole) = caps.get(0) else { continue };
        let start = cell_key(&caps[1], &caps[2])?;
        let end = cell_key(&caps[3], &caps[4])?;
        references.extend(range_cells(start, end));
        rest.push_str(&stripped[last..whole.start()]);
        rest.push(' ');
        last = whole.end();
    }
    rest.push_str(&stripped[last..]);

    for m in NAME.find_iter(&rest) {
        // exponent of a number literal such as 1e3
        let before = rest[..m.start()].chars().next_back();
        if before.is_some_and(|c| c.is_ascii_digit() || c == '.') {
            continue;
        }
        // function name
        if rest[m.end()..].trim_start().starts_with('(') {
            continue;
        }
        match CELL_REF.captures(m.as_str()) {
            Some(caps) => references.push(cell_key(&caps[1], &caps[2])?),
            None => return Err(format!("unknown name '{}'", m.as_str())),
        }
    }

    Ok(references)
}

/// Replace each range with the numeric cells it covers (`F4,F5,F6`).
/// Text and blank cells are skipped, as spreadsheet SUM skips them.
fn expand_ranges(expression: &str, values: &HashMap<CellKey, Value>) -> Result<String, String> {
    let mut out = String::with_capacity(expression.len());
    let mut last = 0;

    for caps in RANGE_REF.captures_iter(expression) {
        let Some(whole) = caps.get(0) else { continue };
        let start = cell_key(&caps[1], &caps[2])?;
        let end = cell_key(&caps[3], &caps[4])?;

        let names: Vec<String> = range_cells(start, end)
            .filter(|key| matches!(values.get(key), Some(Value::Number(_))))
            .map(a1)
            .collect();

        out.push_str(&expression[last..whole.start()]);
        if names.is_empty() {
            out.push('0');
        } else {
            out.push_str(&names.join(","));
        }
        last = whole.end();
    }
    out.push_str(&expression[last..]);
    Ok(out)
}

fn range_cells(start: CellKey, end: CellKey) -> impl Iterator<Item = CellKey> {
    let rows = start.0.min(end.0)..=start.0.max(end.0);
    let cols = start.1.min(end.1)..=start.1.max(end.1);
    rows.flat_map(move |row| cols.clone().map(move |col| (row, col)))
}

/// 0-based key of an A1 reference split into letters and digits.
fn cell_key(letters: &str, digits: &str) -> Result<CellKey, String> {
    let mut col: u32 = 0;
    for b in letters.bytes() {
        col = col * 26 + u32::from(b.to_ascii_uppercase() - b'A') + 1;
    }
    let row: u32 = digits
        .parse()
        .map_err(|_| format!("row out of range in {}{}", letters, digits))?;
    if row == 0 || col == 0 || col > u32::from(MAX_COLS) {
        return Err(format!("invalid cell reference {}{}", letters, digits));
    }
    let col = ColNum::try_from(col - 1)
        .map_err(|_| format!("column out of range in {}{}", letters, digits))?;
    Ok((row - 1, col))
}

/// Topological order of formula indices. Err carries a cell on a cycle.
fn dependency_order(formulas: &[(CellKey, CellFormula)]) -> Result<Vec<usize>, CellKey> {
    let mut graph: DiGraph<usize, ()> = DiGraph::new();
    let mut node_of: HashMap<CellKey, NodeIndex> = HashMap::new();

    for (idx, (key, _)) in formulas.iter().enumerate() {
        node_of.insert(*key, graph.add_node(idx));
    }

    for (key, formula) in formulas {
        let target = node_of[key];
        for reference in &formula.references {
            if let Some(&dep) = node_of.get(reference) {
                graph.add_edge(dep, target, ());
            }
        }
    }

    toposort(&graph, None)
        .map(|order| order.into_iter().map(|n| graph[n]).collect())
        .map_err(|cycle| formulas[graph[cycle.node_id()]].0)
}

/// Render `value` with a numeric pattern such as `#,##0` or `0.00`.
pub fn format_number(value: f64, pattern: &str) -> String {
    let grouping = pattern.contains(',');
    let decimals = pattern
        .split_once('.')
        .map(|(_, frac)| frac.chars().filter(|c| *c == '0' || *c == '#').count())
        .unwrap_or(0);

    // half away from zero, as spreadsheets round
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value.abs() * factor).round() / factor;
    let formatted = format!("{:.*}", decimals, rounded);

    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };

    let int_part = if grouping {
        group_thousands(&int_part)
    } else {
        int_part
    };

    let sign = if value < 0.0 && rounded != 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, int_part, f),
        None => format!("{}{}", sign, int_part),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A1 text for a 0-based cell key.
fn a1((row, col): CellKey) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// Convert a 0-based column index to Excel letters (0 → A, 26 → AA).
pub fn column_letter(col: ColNum) -> String {
    let mut result = String::new();
    let mut n = u32::from(col) + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        result.insert(0, char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    result
}

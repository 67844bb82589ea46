use crate::config::EstimateConfig;
use crate::error::EstimateResult;
use crate::excel::XlsxEncoder;
use crate::formula::WorkbookEvaluator;
use crate::layout::{ExportOutcome, ReportLayoutEngine};
use crate::types::{EstimationRequest, FlatExportRequest};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a request file. Flat files list items with their category names.
pub fn load_request(path: &Path, flat: bool) -> EstimateResult<EstimationRequest> {
    let content = fs::read_to_string(path)?;
    if flat {
        let request: FlatExportRequest = serde_json::from_str(&content)?;
        request.into_hierarchy()
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

/// Configuration from `path`, or the defaults.
pub fn load_config(path: Option<&Path>) -> EstimateResult<EstimateConfig> {
    match path {
        Some(p) => EstimateConfig::load(p),
        None => Ok(EstimateConfig::default()),
    }
}

fn run_engine(
    request: &EstimationRequest,
    config: EstimateConfig,
) -> EstimateResult<ExportOutcome> {
    let engine = ReportLayoutEngine::new(config);
    let mut evaluator = WorkbookEvaluator::new();
    engine.export(request, &mut evaluator)
}

/// Execute the export command
pub fn export(
    input: PathBuf,
    output: PathBuf,
    flat: bool,
    config: Option<PathBuf>,
    verbose: bool,
) -> EstimateResult<()> {
    println!("{}", "📐 Estimate - Excel Export".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        println!("{}", "📖 Reading request...".cyan());
    }
    let request = load_request(&input, flat)?;
    let config = load_config(config.as_deref())?;

    if verbose {
        println!(
            "   Project: {}, {} categories, {} items\n",
            request.project_name.bright_blue().bold(),
            request.middle_category_count(),
            request.line_item_count()
        );
        println!("{}", "🧮 Laying out workbook...".cyan());
    }

    let font_size = config.font_size_pt;
    let outcome = run_engine(&request, config)?;

    if verbose {
        println!("{}", "📊 Writing Excel file...".cyan());
    }
    XlsxEncoder::new(font_size).save(&outcome.workbook, &output)?;

    println!("{}", "✅ Export Complete!".bold().green());
    println!("   Excel file: {}", output.display());
    println!(
        "   Sheets: {}",
        outcome
            .workbook
            .sheets()
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    match &outcome.amount_in_words {
        Some(words) => println!("   Total in words: {}\n", words.bold()),
        None => println!(
            "{}",
            "   ⚠️  Total could not be evaluated; words cell left blank\n".yellow()
        ),
    }

    Ok(())
}

/// Execute the validate command
pub fn validate(input: PathBuf, flat: bool) -> EstimateResult<()> {
    println!("{}", "✅ Validating request".bold().green());
    println!("   File: {}\n", input.display());

    let request = load_request(&input, flat)?;
    match request.validate() {
        Ok(categories) => {
            println!("   Project: {}", request.project_name.bright_blue().bold());
            println!(
                "   Found {} major categories, {} middle categories, {} items",
                request.major_items.len(),
                categories,
                request.line_item_count()
            );
            println!("\n{}", "✅ Request is valid!".bold().green());
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ Validation failed: {}", e).bold().red());
            Err(e)
        }
    }
}

/// Execute the layout command: print the row map without writing a file
pub fn layout(input: PathBuf, flat: bool, config: Option<PathBuf>) -> EstimateResult<()> {
    println!("{}", "🗺️  Estimate - Row Layout".bold().green());
    println!("   File: {}\n", input.display());

    let request = load_request(&input, flat)?;
    let config = load_config(config.as_deref())?;
    let outcome = run_engine(&request, config)?;
    let summary = &outcome.summary;

    println!("{}", "📋 Summary block:".bold().cyan());
    for ((index, middle), detail_row) in request
        .middle_categories()
        .zip(&outcome.detail_subtotal_rows)
    {
        println!(
            "   {:<24} row {:>4} → F{}",
            middle.name.bright_blue(),
            summary.category_row(index as u32),
            detail_row
        );
    }
    println!("   {:<24} row {:>4}", "subtotal", summary.subtotal_row());
    println!("   {:<24} row {:>4}", "other fee", summary.other_fee_row());
    println!("   {:<24} row {:>4}", "running total", summary.running_total_row());
    println!("   {:<24} row {:>4}", "tax", summary.tax_row());
    println!("   {:<24} row {:>4}", "grand total", summary.grand_total_row());
    println!(
        "   {:<24} row {:>4}\n",
        "amount in words",
        outcome.amount_in_words_row()
    );

    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

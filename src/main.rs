use clap::{Parser, Subcommand};
use estimate_forge::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "estimate")]
#[command(about = "Generate cost-estimate workbooks from a categorized item list.")]
#[command(long_about = "Estimate - cost-estimate workbook generator

Builds a three-sheet .xlsx estimate: a summary block linked by formulas to a
per-category detail block, plus two boilerplate note sheets.

COMMANDS:
  export    - Request JSON to Excel (.xlsx)
  validate  - Check a request without writing anything
  layout    - Print the computed row map

EXAMPLES:
  estimate export request.json estimate.xlsx
  estimate export items.json estimate.xlsx --flat --config estimate.yaml
  estimate layout request.json")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Export a request to an Excel workbook.

The request is either hierarchical (projectName → majorItems → middleItems →
items) or, with --flat, a single item list where each item names its
majorCategory and middleCategory.

CONFIGURATION (YAML, all keys optional):
  other_fee_percent: 6.65
  tax_percent: 5
  font_size_pt: 12
  summary_sheet_name: 估價單")]
    /// Export a request to an Excel workbook
    Export {
        /// Request JSON file
        input: PathBuf,

        /// Output .xlsx path
        output: PathBuf,

        /// Input is a flat item list
        #[arg(long)]
        flat: bool,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show progress and debug logs
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a request without exporting
    Validate {
        /// Request JSON file
        input: PathBuf,

        /// Input is a flat item list
        #[arg(long)]
        flat: bool,
    },

    /// Print summary and detail row numbers for a request
    Layout {
        /// Request JSON file
        input: PathBuf,

        /// Input is a flat item list
        #[arg(long)]
        flat: bool,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "estimate_forge=debug"
    } else {
        "estimate_forge=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            flat,
            config,
            verbose,
        } => {
            init_logging(verbose);
            cli::export(input, output, flat, config, verbose)?;
        }

        Commands::Validate { input, flat } => {
            init_logging(false);
            cli::validate(input, flat)?;
        }

        Commands::Layout {
            input,
            flat,
            config,
        } => {
            init_logging(false);
            cli::layout(input, flat, config)?;
        }
    }

    Ok(())
}

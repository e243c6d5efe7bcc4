use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::analysis::constants::DEFAULT_MARGIN;
use crate::i18n::Language;
use crate::interface::parse_margin;

/// BreakEven — break-even points, suggested prices and cost/revenue charts.
#[derive(Parser, Debug)]
#[command(name = "break_even_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path of the SVG chart to write.
    #[arg(long, global = true, default_value = "break_even.svg")]
    pub chart: PathBuf,

    /// Skip chart rendering.
    #[arg(long, global = true)]
    pub no_chart: bool,

    /// Overwrite an existing chart without asking.
    #[arg(long, global = true)]
    pub force: bool,

    /// Which language blocks to print.
    #[arg(long, global = true, value_enum, default_value_t = LanguageChoice::Both)]
    pub lang: LanguageChoice,

    /// Also write the full result as JSON to this path.
    #[arg(long, global = true)]
    pub json: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate the break-even point of one product interactively.
    Single {
        /// Product name used in the output.
        #[arg(long, default_value = "Product")]
        name: String,

        /// Target profit margin in percent for the suggested price.
        #[arg(long, default_value_t = DEFAULT_MARGIN, value_parser = margin_arg)]
        margin: f64,
    },

    /// Calculate several products from comma-separated lists.
    ///
    /// Lists left out on the command line are prompted for.
    Batch {
        /// Product names, e.g. "A,B".
        #[arg(long)]
        names: Option<String>,

        /// Fixed costs, e.g. "100,200".
        #[arg(long)]
        fixed: Option<String>,

        /// Variable costs per unit, e.g. "5,10".
        #[arg(long)]
        variable: Option<String>,

        /// Prices per unit, e.g. "15,20".
        #[arg(long)]
        prices: Option<String>,

        /// Target profit margin in percent (0-100), shared by every product.
        #[arg(long, value_parser = margin_arg)]
        margin: Option<f64>,
    },

    /// Calculate products listed in a CSV file (name,fixed_cost,variable_cost,price).
    Import {
        /// CSV file to read.
        file: PathBuf,

        /// Target profit margin in percent (0-100), shared by every product.
        #[arg(long, value_parser = margin_arg)]
        margin: Option<f64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Single {
            name: "Product".to_string(),
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Language blocks shown on the terminal. Results always carry both.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageChoice {
    En,
    Es,
    Both,
}

impl LanguageChoice {
    pub fn languages(&self) -> Vec<Language> {
        match self {
            LanguageChoice::En => vec![Language::English],
            LanguageChoice::Es => vec![Language::Spanish],
            LanguageChoice::Both => Language::ALL.to_vec(),
        }
    }
}

fn margin_arg(s: &str) -> Result<f64, String> {
    parse_margin(s).map_err(|e| e.to_string())
}

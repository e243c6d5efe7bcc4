use clap::Parser;
use tracing::info;

use break_even_calc::analysis;
use break_even_calc::cli::{Cli, Command};
use break_even_calc::error::Result;
use break_even_calc::files::{
    ProductRow, load_product_rows, rows_to_products, write_json_report,
};
use break_even_calc::interface::{
    BatchFlags, collect_batch_fields, collect_single_fields, display_result, display_summary,
    prompt_margin, prompt_yes_no, render_chart,
};
use break_even_calc::logging::init_cli_logger;
use break_even_calc::models::BatchResult;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let command = cli.command.take().unwrap_or_default();

    let result = match command {
        Command::Single { name, margin } => cmd_single(&name, margin)?,
        Command::Batch {
            names,
            fixed,
            variable,
            prices,
            margin,
        } => cmd_batch(
            BatchFlags {
                names,
                fixed_costs: fixed,
                variable_costs: variable,
                prices,
            },
            margin,
        )?,
        Command::Import { file, margin } => cmd_import(&file, margin)?,
    };

    present(&cli, &result)
}

/// Break-even point of one product, prompting for its three numbers.
fn cmd_single(name: &str, margin: f64) -> Result<BatchResult> {
    let (fixed, variable, price) = collect_single_fields()?;

    let row = ProductRow {
        name: name.to_string(),
        fixed_cost: fixed,
        variable_cost: variable,
        price,
    };

    Ok(match row.into_product(margin) {
        Ok(product) => analysis::run_products(&[product]),
        Err(failure) => analysis::rejected(failure),
    })
}

/// Several products from comma-separated lists sharing one margin.
fn cmd_batch(flags: BatchFlags, margin: Option<f64>) -> Result<BatchResult> {
    let fields = collect_batch_fields(flags)?;
    let margin = match margin {
        Some(margin) => margin,
        None => prompt_margin()?,
    };

    Ok(analysis::run(
        &fields.names,
        &fields.fixed_costs,
        &fields.variable_costs,
        &fields.prices,
        margin,
    ))
}

/// Products read from a CSV file.
fn cmd_import(file: &std::path::Path, margin: Option<f64>) -> Result<BatchResult> {
    let rows = load_product_rows(file)?;
    info!(rows = rows.len(), file = %file.display(), "Loaded products");

    let margin = match margin {
        Some(margin) => margin,
        None => prompt_margin()?,
    };

    Ok(match rows_to_products(rows, margin) {
        Ok(products) => analysis::run_products(&products),
        Err(failure) => analysis::rejected(failure),
    })
}

/// Print the text blocks, render the chart and write the optional JSON report.
fn present(cli: &Cli, result: &BatchResult) -> Result<()> {
    display_result(result, &cli.lang.languages());
    display_summary(result.reports());

    match &result.chart {
        Some(chart) if !cli.no_chart => {
            let overwrite = !cli.chart.exists()
                || cli.force
                || prompt_yes_no(
                    &format!("{} already exists. Overwrite?", cli.chart.display()),
                    true,
                )?;

            if overwrite {
                render_chart(chart, &cli.chart)?;
                println!("Chart written to {}", cli.chart.display());
            }
        }
        Some(_) => {}
        None => println!("No chart generated."),
    }

    if let Some(path) = &cli.json {
        write_json_report(path, result)?;
        println!("Result written to {}", path.display());
    }

    Ok(())
}

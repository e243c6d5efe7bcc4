use tracing::{debug, info, warn};

use crate::analysis::break_even::compute_break_even;
use crate::analysis::constants::FIELD_DELIMITER;
use crate::analysis::pricing::suggest_price;
use crate::analysis::series::build_chart;
use crate::i18n::{Localized, Message};
use crate::models::{BatchFailure, BatchOutcome, BatchResult, ProductInput, ProductReport};

/// Split a comma-separated field into trimmed elements.
pub fn split_field(raw: &str) -> Vec<&str> {
    raw.split(FIELD_DELIMITER).map(str::trim).collect()
}

/// Parse one cost or price. Empty, non-numeric and non-finite text fails.
pub fn parse_value(raw: &str) -> Result<f64, BatchFailure> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(BatchFailure::NumericParse)
}

/// Parse a comma-separated field of numbers.
pub fn parse_numbers(raw: &str) -> Result<Vec<f64>, BatchFailure> {
    split_field(raw).into_iter().map(parse_value).collect()
}

/// Parse and align the raw fields into product records.
///
/// Numbers are parsed before lengths are compared, so a non-numeric field is
/// reported even when the lists also differ in length.
pub fn parse_products(
    names: &str,
    fixed_costs: &str,
    variable_costs: &str,
    prices: &str,
    profit_margin_percent: f64,
) -> Result<Vec<ProductInput>, BatchFailure> {
    let names = split_field(names);
    let fixed_costs = parse_numbers(fixed_costs)?;
    let variable_costs = parse_numbers(variable_costs)?;
    let prices = parse_numbers(prices)?;

    let count = names.len();
    if fixed_costs.len() != count || variable_costs.len() != count || prices.len() != count {
        return Err(BatchFailure::LengthMismatch);
    }

    Ok(names
        .into_iter()
        .zip(fixed_costs)
        .zip(variable_costs)
        .zip(prices)
        .map(|(((name, fixed), variable), price)| {
            ProductInput::new(name, fixed, variable, price, profit_margin_percent)
        })
        .collect())
}

/// Run a batch from the raw comma-separated fields.
///
/// The same margin applies to every product. Failures come back as data with
/// the matching message in both text blocks and no chart.
pub fn run(
    names: &str,
    fixed_costs: &str,
    variable_costs: &str,
    prices: &str,
    profit_margin_percent: f64,
) -> BatchResult {
    match parse_products(names, fixed_costs, variable_costs, prices, profit_margin_percent) {
        Ok(products) => run_products(&products),
        Err(failure) => rejected(failure),
    }
}

/// Run a batch over already assembled product records.
pub fn run_products(products: &[ProductInput]) -> BatchResult {
    let reports: Vec<ProductReport> = products.iter().map(evaluate_product).collect();

    let break_even_text = Localized::join_lines(reports.iter().map(break_even_message));
    let suggestion_text = Localized::join_lines(reports.iter().map(suggestion_message));
    let chart = build_chart(&reports);

    info!(
        products = reports.len(),
        charted = chart.series.len(),
        "Batch completed"
    );

    BatchResult {
        outcome: BatchOutcome::Completed(reports),
        break_even_text,
        suggestion_text,
        chart: Some(chart),
    }
}

/// Compute break-even and suggested price for one product.
pub fn evaluate_product(product: &ProductInput) -> ProductReport {
    let break_even = compute_break_even(product.fixed_cost, product.variable_cost, product.price);
    let suggestion = suggest_price(product.variable_cost, product.profit_margin_percent);

    debug!(
        product = %product.name,
        break_even = ?break_even.quantity(),
        suggested_price = suggestion.suggested_price,
        "Evaluated product"
    );

    ProductReport {
        product: product.clone(),
        break_even,
        suggestion,
    }
}

fn break_even_message(report: &ProductReport) -> Localized {
    let name = report.product.name.as_str();
    match report.break_even.quantity() {
        Some(quantity) => Message::BreakEven { name, quantity }.localize(),
        None => Message::Unattainable { name }.localize(),
    }
}

fn suggestion_message(report: &ProductReport) -> Localized {
    Message::SuggestedPrice {
        name: &report.product.name,
        margin: report.product.profit_margin_percent,
        price: report.suggestion.suggested_price,
    }
    .localize()
}

/// Result for a batch that failed validation.
pub fn rejected(failure: BatchFailure) -> BatchResult {
    warn!(?failure, "Batch rejected");

    let message = match failure {
        BatchFailure::NumericParse => Message::InvalidNumbers,
        BatchFailure::LengthMismatch => Message::LengthMismatch,
    }
    .localize();

    BatchResult {
        outcome: BatchOutcome::Failed(failure),
        break_even_text: message.clone(),
        suggestion_text: message,
        chart: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_field_trims() {
        assert_eq!(split_field(" A , B,C "), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_numbers_rejects_text() {
        assert_eq!(parse_numbers("abc,200"), Err(BatchFailure::NumericParse));
        assert_eq!(parse_numbers("1,,2"), Err(BatchFailure::NumericParse));
        assert_eq!(parse_numbers(""), Err(BatchFailure::NumericParse));
    }

    #[test]
    fn test_parse_numbers_rejects_non_finite() {
        assert_eq!(parse_numbers("1,inf"), Err(BatchFailure::NumericParse));
        assert_eq!(parse_numbers("NaN"), Err(BatchFailure::NumericParse));
    }

    #[test]
    fn test_parse_numbers_accepts_signs_and_exponents() {
        assert_eq!(parse_numbers(" -1.5, 2e2 "), Ok(vec![-1.5, 200.0]));
    }

    #[test]
    fn test_parse_products_aligns_records() {
        let products = parse_products("A,B", "100,200", "5,10", "15,20", 20.0).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1], ProductInput::new("B", 200.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn test_parse_failure_wins_over_length_mismatch() {
        let result = parse_products("A,B", "abc", "5,10", "15,20", 20.0);
        assert_eq!(result, Err(BatchFailure::NumericParse));
    }

    #[test]
    fn test_name_count_is_checked() {
        let result = parse_products("A", "100,200", "5,10", "15,20", 20.0);
        assert_eq!(result, Err(BatchFailure::LengthMismatch));
    }

    #[test]
    fn test_failure_fills_both_blocks() {
        let result = run("A,B", "100", "5,10", "15,20", 20.0);
        assert_eq!(result.break_even_text, result.suggestion_text);
        assert!(result.chart.is_none());
        assert!(result.reports().is_empty());
    }

    #[test]
    fn test_empty_product_list() {
        let result = run_products(&[]);
        assert_eq!(result.break_even_text.en, "");
        assert_eq!(result.chart, Some(Default::default()));
    }
}

use assert_float_eq::*;

use break_even_calc::analysis::{CHART_DOMAIN_FACTOR, CHART_SAMPLES, run};
use break_even_calc::i18n::{Language, Message};
use break_even_calc::models::BatchFailure;

#[test]
fn test_two_products_in_order() {
    let result = run("A,B", "100,200", "5,10", "15,20", 20.0);

    let reports = result.reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].product.name, "A");
    assert_eq!(reports[0].break_even.quantity(), Some(10.0));
    assert_eq!(reports[1].break_even.quantity(), Some(20.0));
    assert_float_absolute_eq!(reports[0].suggestion.suggested_price, 6.0, 1e-9);
    assert_float_absolute_eq!(reports[1].suggestion.suggested_price, 12.0, 1e-9);

    assert_eq!(
        result.break_even_text.en,
        "A: The break-even point is 10.00 units.\nB: The break-even point is 20.00 units."
    );
    assert_eq!(
        result.break_even_text.es,
        "A: El punto de equilibrio es 10.00 unidades.\nB: El punto de equilibrio es 20.00 unidades."
    );

    let suggestions: Vec<&str> = result.suggestion_text.en.lines().collect();
    assert_eq!(suggestions.len(), 2);
    assert!(suggestions[0].starts_with("A: ") && suggestions[0].ends_with("6.00."));
    assert!(suggestions[1].starts_with("B: ") && suggestions[1].ends_with("12.00."));
    assert!(result.suggestion_text.es.lines().nth(1).unwrap().ends_with("12.00."));
}

#[test]
fn test_whitespace_around_values_is_ignored() {
    let result = run(" A , B ", " 100 ,200", "5, 10 ", "15 ,20", 20.0);
    assert_eq!(result.failure(), None);
    assert_eq!(result.reports()[1].product.name, "B");
}

#[test]
fn test_length_mismatch_regardless_of_margin() {
    for margin in [0.0, 20.0, 100.0] {
        let result = run("A,B", "100", "5,10", "15,20", margin);

        assert_eq!(result.failure(), Some(BatchFailure::LengthMismatch));
        assert_eq!(result.break_even_text, Message::LengthMismatch.localize());
        assert_eq!(result.suggestion_text, Message::LengthMismatch.localize());
        assert!(result.chart.is_none());
        assert!(result.reports().is_empty());
    }
}

#[test]
fn test_non_numeric_fails_whole_batch() {
    let result = run("A,B", "abc,200", "5,10", "15,20", 20.0);

    assert_eq!(result.failure(), Some(BatchFailure::NumericParse));
    assert_eq!(
        result.break_even_text.get(Language::English),
        "Please enter valid numerical values for costs and prices."
    );
    assert!(!result.break_even_text.get(Language::Spanish).is_empty());
    assert_eq!(result.suggestion_text, result.break_even_text);
    assert!(result.chart.is_none());
}

#[test]
fn test_unattainable_product_does_not_stop_batch() {
    let result = run("A,B,C", "100,50,200", "5,10,10", "15,10,20", 20.0);

    let reports = result.reports();
    assert_eq!(reports.len(), 3);
    assert!(!reports[1].break_even.is_attainable());

    let lines: Vec<&str> = result.break_even_text.en.lines().collect();
    assert!(lines[1].starts_with("B: Break-even point cannot be calculated"));
    assert!(lines[2].ends_with("20.00 units."));

    let chart = result.chart.expect("completed batch has a chart");
    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn test_chart_series_shape() {
    let result = run("A", "100", "5", "15", 20.0);
    let chart = result.chart.unwrap();
    let series = &chart.series[0];

    assert_eq!(series.quantities.len(), CHART_SAMPLES);
    assert_float_absolute_eq!(
        *series.quantities.last().unwrap(),
        CHART_DOMAIN_FACTOR * 10.0,
        1e-9
    );
    assert_eq!(series.break_even, (10.0, 150.0));

    for ((q, cost), revenue) in series
        .quantities
        .iter()
        .zip(&series.total_costs)
        .zip(&series.revenues)
    {
        assert_float_absolute_eq!(*cost, 100.0 + 5.0 * q, 1e-9);
        assert_float_absolute_eq!(*revenue, 15.0 * q, 1e-9);
    }
}

#[test]
fn test_no_qualifying_product_gives_empty_chart() {
    let result = run("A,B", "100,200", "10,20", "10,5", 20.0);

    assert_eq!(result.failure(), None);
    let chart = result.chart.expect("chart is still produced");
    assert!(chart.is_empty());
}

#[test]
fn test_overflowing_break_even_is_left_off_chart() {
    let result = run("A,B", "1e308,100", "0,5", "0.01,15", 20.0);

    assert_eq!(result.failure(), None);
    assert_eq!(result.reports()[0].break_even.quantity(), Some(f64::INFINITY));

    let chart = result.chart.expect("completed batch has a chart");
    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["B"]);
    assert!(chart.series.iter().all(|s| s.is_finite()));
}

#[test]
fn test_negative_fixed_cost_quantity_range() {
    let result = run("A", "-100", "5", "15", 20.0);
    let chart = result.chart.unwrap();

    assert_eq!(chart.max_quantity(), 0.0);
    assert_float_absolute_eq!(chart.min_quantity(), -15.0, 1e-9);
}

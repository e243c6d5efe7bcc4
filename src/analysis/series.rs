use crate::analysis::constants::{CHART_DOMAIN_FACTOR, CHART_SAMPLES};
use crate::models::{ChartData, ChartSeries, ProductInput, ProductReport};

/// `count` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Sample the cost and revenue lines of one product around its break-even
/// quantity.
pub fn build_series(product: &ProductInput, break_even_quantity: f64) -> ChartSeries {
    let quantities = linspace(
        0.0,
        CHART_DOMAIN_FACTOR * break_even_quantity,
        CHART_SAMPLES,
    );
    let total_costs = quantities.iter().map(|&q| product.total_cost_at(q)).collect();
    let revenues = quantities.iter().map(|&q| product.revenue_at(q)).collect();

    ChartSeries {
        name: product.name.clone(),
        quantities,
        total_costs,
        revenues,
        break_even: (break_even_quantity, product.total_cost_at(break_even_quantity)),
    }
}

/// Chart data for a batch.
///
/// Products without a break-even point are left out, as are products whose
/// sampled lines overflow to a non-finite value.
pub fn build_chart(reports: &[ProductReport]) -> ChartData {
    let series = reports
        .iter()
        .filter_map(|report| {
            let quantity = report.break_even.quantity()?;
            if !(CHART_DOMAIN_FACTOR * quantity).is_finite() {
                return None;
            }
            Some(build_series(&report.product, quantity)).filter(ChartSeries::is_finite)
        })
        .collect();

    ChartData { series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::evaluate_product;

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(0.0, 15.0, CHART_SAMPLES);
        assert_eq!(values.len(), CHART_SAMPLES);
        assert_eq!(values[0], 0.0);
        assert!((values[CHART_SAMPLES - 1] - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_overflowing_quantity_is_left_off() {
        let reports = [
            evaluate_product(&ProductInput::new("Huge", 1e308, 0.0, 0.01, 20.0)),
            evaluate_product(&ProductInput::new("A", 100.0, 5.0, 15.0, 20.0)),
        ];
        assert_eq!(reports[0].break_even.quantity(), Some(f64::INFINITY));

        let chart = build_chart(&reports);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "A");
    }

    #[test]
    fn test_overflowing_amounts_are_left_off() {
        let product = ProductInput::new("Big", 1e308, 0.0, 1e308, 20.0);
        let chart = build_chart(&[evaluate_product(&product)]);
        assert!(chart.is_empty());
    }

    #[test]
    fn test_negative_fixed_cost_samples_below_zero() {
        let product = ProductInput::new("A", -100.0, 5.0, 15.0, 20.0);
        let chart = build_chart(&[evaluate_product(&product)]);

        let series = &chart.series[0];
        assert_eq!(series.break_even.0, -10.0);
        assert!((series.quantities[CHART_SAMPLES - 1] + 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_series_lines_cross_at_break_even() {
        let product = ProductInput::new("A", 100.0, 5.0, 15.0, 20.0);
        let series = build_series(&product, 10.0);

        assert_eq!(series.quantities.len(), CHART_SAMPLES);
        assert_eq!(series.total_costs.len(), CHART_SAMPLES);
        assert_eq!(series.revenues.len(), CHART_SAMPLES);
        assert_eq!(series.total_costs[0], 100.0);
        assert_eq!(series.revenues[0], 0.0);
        assert_eq!(series.break_even, (10.0, 150.0));
        assert!((series.quantities[CHART_SAMPLES - 1] - 15.0).abs() < 1e-9);
    }
}

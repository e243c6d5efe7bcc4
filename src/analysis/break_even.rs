use crate::models::{BreakEvenResult, UnattainableReason};

/// Compute the break-even quantity for one product.
///
/// Returns `Unattainable` when the price does not exceed the variable cost,
/// which also covers the equal case that would otherwise divide by zero.
/// The quantity is not rounded.
pub fn compute_break_even(fixed_cost: f64, variable_cost: f64, price: f64) -> BreakEvenResult {
    if price <= variable_cost {
        return BreakEvenResult::Unattainable {
            reason: UnattainableReason::PriceNotAboveVariableCost,
        };
    }

    BreakEvenResult::Value {
        quantity: fixed_cost / (price - variable_cost),
    }
}

/// Sales revenue at the break-even point, if it exists.
pub fn break_even_revenue(fixed_cost: f64, variable_cost: f64, price: f64) -> Option<f64> {
    compute_break_even(fixed_cost, variable_cost, price)
        .quantity()
        .map(|quantity| quantity * price)
}

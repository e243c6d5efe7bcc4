use crate::models::PriceSuggestion;

/// Suggest a price as a percentage markup over variable cost.
///
/// Negative margins are accepted and give a price below variable cost.
pub fn suggest_price(variable_cost: f64, profit_margin_percent: f64) -> PriceSuggestion {
    PriceSuggestion {
        suggested_price: variable_cost * (1.0 + profit_margin_percent / 100.0),
    }
}

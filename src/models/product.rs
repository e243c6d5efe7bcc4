use serde::{Deserialize, Serialize};

/// One product of a batch, assembled from the aligned input lists.
///
/// The profit margin is shared by every product of a batch, but is carried
/// per record so each product can be priced on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,

    pub fixed_cost: f64,

    pub variable_cost: f64,

    pub price: f64,

    #[serde(default)]
    pub profit_margin_percent: f64,
}

impl ProductInput {
    pub fn new(
        name: impl Into<String>,
        fixed_cost: f64,
        variable_cost: f64,
        price: f64,
        profit_margin_percent: f64,
    ) -> Self {
        Self {
            name: name.into(),
            fixed_cost,
            variable_cost,
            price,
            profit_margin_percent,
        }
    }

    /// Contribution per unit sold: price minus variable cost.
    #[inline]
    pub fn contribution_margin(&self) -> f64 {
        self.price - self.variable_cost
    }

    /// Total cost of producing `quantity` units.
    #[inline]
    pub fn total_cost_at(&self, quantity: f64) -> f64 {
        self.fixed_cost + self.variable_cost * quantity
    }

    /// Revenue from selling `quantity` units.
    #[inline]
    pub fn revenue_at(&self, quantity: f64) -> f64 {
        self.price * quantity
    }
}

use serde::{Deserialize, Serialize};

use crate::i18n::Localized;
use crate::models::ProductInput;

/// Why a break-even quantity does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnattainableReason {
    /// Every unit sold loses money or breaks even on its own.
    PriceNotAboveVariableCost,
}

/// Outcome of a break-even calculation.
///
/// `Value` is only produced when the price exceeds the variable cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreakEvenResult {
    Value { quantity: f64 },
    Unattainable { reason: UnattainableReason },
}

impl BreakEvenResult {
    /// Break-even quantity, if one exists.
    pub fn quantity(&self) -> Option<f64> {
        match self {
            BreakEvenResult::Value { quantity } => Some(*quantity),
            BreakEvenResult::Unattainable { .. } => None,
        }
    }

    pub fn is_attainable(&self) -> bool {
        matches!(self, BreakEvenResult::Value { .. })
    }
}

/// Price derived from a target margin over variable cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSuggestion {
    pub suggested_price: f64,
}

/// Sampled cost and revenue lines for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,

    pub quantities: Vec<f64>,

    pub total_costs: Vec<f64>,

    pub revenues: Vec<f64>,

    /// (quantity, cost) where the two lines cross.
    pub break_even: (f64, f64),
}

impl ChartSeries {
    /// Whether every sampled value and the break-even point are finite.
    pub fn is_finite(&self) -> bool {
        self.quantities
            .iter()
            .chain(&self.total_costs)
            .chain(&self.revenues)
            .chain([&self.break_even.0, &self.break_even.1])
            .all(|v| v.is_finite())
    }
}

/// Everything the plotting layer needs to draw a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Largest sampled quantity, never below zero.
    pub fn max_quantity(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.quantities.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Smallest sampled quantity, never above zero.
    pub fn min_quantity(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.quantities.iter().copied())
            .fold(0.0, f64::min)
    }

    /// Largest cost or revenue value across all series.
    pub fn max_amount(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.total_costs.iter().chain(s.revenues.iter()).copied())
            .fold(0.0, f64::max)
    }

    /// Smallest cost or revenue value, never above zero.
    pub fn min_amount(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.total_costs.iter().chain(s.revenues.iter()).copied())
            .fold(0.0, f64::min)
    }
}

/// Per-product results of a completed batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReport {
    pub product: ProductInput,
    pub break_even: BreakEvenResult,
    pub suggestion: PriceSuggestion,
}

/// Reason a whole batch was rejected before any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchFailure {
    /// A cost or price field is not a finite number.
    NumericParse,
    /// The input lists have different element counts.
    LengthMismatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum BatchOutcome {
    Completed(Vec<ProductReport>),
    Failed(BatchFailure),
}

/// The five outputs shown to the user, plus the structured outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub outcome: BatchOutcome,

    /// One break-even line per product, per language.
    pub break_even_text: Localized,

    /// One suggested-price line per product, per language.
    pub suggestion_text: Localized,

    /// `None` whenever the batch failed.
    pub chart: Option<ChartData>,
}

impl BatchResult {
    pub fn reports(&self) -> &[ProductReport] {
        match &self.outcome {
            BatchOutcome::Completed(reports) => reports,
            BatchOutcome::Failed(_) => &[],
        }
    }

    pub fn failure(&self) -> Option<BatchFailure> {
        match self.outcome {
            BatchOutcome::Completed(_) => None,
            BatchOutcome::Failed(failure) => Some(failure),
        }
    }
}

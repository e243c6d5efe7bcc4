pub mod product;
pub mod report;

pub use product::ProductInput;
pub use report::{
    BatchFailure, BatchOutcome, BatchResult, BreakEvenResult, ChartData, ChartSeries,
    PriceSuggestion, ProductReport, UnattainableReason,
};

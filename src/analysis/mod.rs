pub mod batch;
pub mod break_even;
pub mod constants;
pub mod pricing;
pub mod series;

pub use batch::{
    evaluate_product, parse_numbers, parse_products, parse_value, rejected, run, run_products,
    split_field,
};
pub use break_even::{break_even_revenue, compute_break_even};
pub use constants::*;
pub use pricing::suggest_price;
pub use series::{build_chart, build_series, linspace};
